use super::form::STATUS_OPTIONS;
use crate::{
    components::popover::use_click_outside, pages::attendance::utils::AttendanceFilterState,
    state::attendance::AttendanceState,
};
use leptos::{html, *};

/// Filter button plus its popover. Applying closes the popover; clearing
/// leaves it open so new criteria can be entered straight away.
#[component]
pub fn AttendanceFilters(
    filters: RwSignal<AttendanceFilterState>,
    state: RwSignal<AttendanceState>,
    on_toggle: Callback<()>,
    on_close: Callback<()>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let is_open = Signal::derive(move || state.with(|s| s.show_filters));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    use_click_outside(container, is_open, on_close);

    let employee_options = move || {
        state.with(|s| {
            s.employees
                .iter()
                .map(|employee| {
                    let value = employee.id.to_string();
                    let selected = {
                        let value = value.clone();
                        move || filters.with(|f| f.employee == value)
                    };
                    view! {
                        <option value=value selected=selected>
                            {employee.full_name.clone()}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="popover-anchor" node_ref=container>
            <button
                type="button"
                class="btn"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| on_toggle.call(())
            >
                "Filters"
            </button>
            <Show when=move || is_open.get()>
                <div class="popover" role="dialog" aria-label="Attendance filters">
                    <label class="field">
                        <span>"Employee"</span>
                        <select
                            prop:value=move || filters.with(|f| f.employee.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.employee = value);
                            }
                        >
                            <option value="" selected=move || filters.with(|f| f.employee.is_empty())>
                                "All employees"
                            </option>
                            {employee_options}
                        </select>
                    </label>
                    <label class="field">
                        <span>"Department"</span>
                        <input
                            type="text"
                            placeholder="Any department"
                            prop:value=move || filters.with(|f| f.department.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.department = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"From"</span>
                        <input
                            type="date"
                            prop:value=move || filters.with(|f| f.date_from.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.date_from = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"To"</span>
                        <input
                            type="date"
                            prop:value=move || filters.with(|f| f.date_to.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.date_to = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Status"</span>
                        <select
                            prop:value=move || filters.with(|f| f.status.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.status = value);
                            }
                        >
                            <option value="" selected=move || filters.with(|f| f.status.is_empty())>
                                "Any status"
                            </option>
                            {STATUS_OPTIONS
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            selected=move || filters.with(|f| f.status == status.as_str())
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=move || loading.get()
                            on:click=move |_| on_apply.call(())
                        >
                            "Apply"
                        </button>
                        <button type="button" class="btn" on:click=move |_| on_clear.call(())>
                            "Clear"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
