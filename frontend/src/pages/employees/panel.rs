use super::{
    components::{form::EmployeeForm, table::EmployeeTable},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::Employee,
    components::{confirm_dialog::ConfirmDialog, layout::ErrorBanner},
    state::employees::EmployeeSortField,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    {
        let vm = vm.clone();
        create_effect(move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.load().await });
        });
    }
    view! { <EmployeesPanel vm=vm /> }
}

#[component]
pub fn EmployeesPanel(vm: EmployeesViewModel) -> impl IntoView {
    let state = vm.state;
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let pending_delete = Signal::derive(move || state.with(|s| s.pending_delete.is_some()));
    let delete_message = Signal::derive(move || {
        state.with(|s| {
            s.pending_delete
                .as_ref()
                .map(|e| format!("Delete {} (Emp ID {})? This cannot be undone.", e.full_name, e.emp_id))
                .unwrap_or_default()
        })
    });

    let on_cancel_edit = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.cancel_edit()
    });
    let on_sort = Callback::new({
        let vm = vm.clone();
        move |field: EmployeeSortField| vm.toggle_sort(field)
    });
    let on_toggle_menu = Callback::new({
        let vm = vm.clone();
        move |id: i64| vm.toggle_menu(id)
    });
    let on_close_menu = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.close_menu()
    });
    let on_edit = Callback::new({
        let vm = vm.clone();
        move |employee: Employee| vm.start_edit(&employee)
    });
    let on_delete = Callback::new({
        let vm = vm.clone();
        move |employee: Employee| vm.request_delete(&employee)
    });
    let on_cancel_delete = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.cancel_delete()
    });

    view! {
        <div class="page">
            <ErrorBanner error=error />
            <EmployeeForm
                form=vm.form
                state=state
                on_submit=Callback::new(vm.on_submit())
                on_cancel=on_cancel_edit
            />
            <EmployeeTable
                state=state
                on_sort=on_sort
                on_toggle_menu=on_toggle_menu
                on_close_menu=on_close_menu
                on_edit=on_edit
                on_delete=on_delete
            />
            <ConfirmDialog
                is_open=pending_delete
                title="Delete employee"
                message=delete_message
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=on_cancel_delete
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || state.with(|s| s.loading))
                destructive=true
            />
        </div>
    }
}
