use crate::{
    api::Employee,
    components::{empty_state::EmptyState, layout::LoadingSpinner, popover::use_click_outside},
    state::employees::{EmployeeSortField, EmployeesState},
    utils::sort::sort_indicator,
};
use leptos::{html, *};

#[component]
pub fn EmployeeTable(
    state: RwSignal<EmployeesState>,
    on_sort: Callback<EmployeeSortField>,
    on_toggle_menu: Callback<i64>,
    on_close_menu: Callback<()>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let is_empty = Signal::derive(move || state.with(|s| s.employees.is_empty()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let indicator = move || {
        state.with(|s| sort_indicator(s.sort.direction_for(EmployeeSortField::EmpId)))
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Employees"</h2>
            <Show
                when=move || !is_empty.get()
                fallback=move || {
                    if loading.get() {
                        view! { <LoadingSpinner /> }.into_view()
                    } else {
                        view! {
                            <EmptyState
                                title="No employees yet"
                                description="Register an employee using the form above."
                            />
                        }
                        .into_view()
                    }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>
                                <button
                                    type="button"
                                    class="sort-header"
                                    on:click=move |_| on_sort.call(EmployeeSortField::EmpId)
                                >
                                    "Emp ID " {indicator}
                                </button>
                            </th>
                            <th>"Full Name"</th>
                            <th>"Email"</th>
                            <th>"Department"</th>
                            <th class="actions-col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.sorted())
                            key=|e| {
                                (e.id, e.emp_id, e.full_name.clone(), e.email.clone(), e.department.clone())
                            }
                            children=move |employee: Employee| {
                                view! {
                                    <tr>
                                        <td>{employee.emp_id}</td>
                                        <td>{employee.full_name.clone()}</td>
                                        <td>{employee.email.clone()}</td>
                                        <td>{employee.department.clone()}</td>
                                        <td class="actions-col">
                                            <RowActions
                                                employee=employee
                                                state=state
                                                on_toggle_menu=on_toggle_menu
                                                on_close_menu=on_close_menu
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn RowActions(
    employee: Employee,
    state: RwSignal<EmployeesState>,
    on_toggle_menu: Callback<i64>,
    on_close_menu: Callback<()>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let id = employee.id;
    let container = create_node_ref::<html::Div>();
    let is_open = Signal::derive(move || state.with(|s| s.open_menu == Some(id)));
    use_click_outside(container, is_open, on_close_menu);

    let for_edit = employee.clone();
    let for_delete = employee;

    view! {
        <div class="dropdown" node_ref=container>
            <button
                type="button"
                class="btn btn-icon"
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| on_toggle_menu.call(id)
            >
                "⋮"
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown-menu" role="menu">
                    <button
                        type="button"
                        role="menuitem"
                        on:click={
                            let employee = for_edit.clone();
                            move |_| on_edit.call(employee.clone())
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        role="menuitem"
                        class="danger"
                        on:click={
                            let employee = for_delete.clone();
                            move |_| on_delete.call(employee.clone())
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
