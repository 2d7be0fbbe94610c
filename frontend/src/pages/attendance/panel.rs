use super::{
    components::{filters::AttendanceFilters, form::AttendanceForm, table::AttendanceTable},
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::{components::layout::ErrorBanner, state::attendance::AttendanceSortField};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    {
        let vm = vm.clone();
        create_effect(move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.load().await });
        });
    }
    view! { <AttendancePanel vm=vm /> }
}

#[component]
pub fn AttendancePanel(vm: AttendanceViewModel) -> impl IntoView {
    let state = vm.state;
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    let on_toggle_filters = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.toggle_filters()
    });
    let on_close_filters = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.close_filters()
    });
    let on_clear_filters = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.clear_filters()
    });
    let on_sort = Callback::new({
        let vm = vm.clone();
        move |field: AttendanceSortField| vm.toggle_sort(field)
    });

    view! {
        <div class="page">
            <ErrorBanner error=error />
            <AttendanceForm form=vm.form state=state on_submit=Callback::new(vm.on_submit()) />
            <section class="card">
                <div class="card-header">
                    <h2 class="card-title">"Attendance Records"</h2>
                    <AttendanceFilters
                        filters=vm.filters
                        state=state
                        on_toggle=on_toggle_filters
                        on_close=on_close_filters
                        on_apply=Callback::new(vm.on_apply_filters())
                        on_clear=on_clear_filters
                    />
                </div>
                <AttendanceTable state=state on_sort=on_sort />
            </section>
        </div>
    }
}
