use crate::{
    api::AttendanceStatus, pages::attendance::utils::AttendanceFormState,
    state::attendance::AttendanceState,
};
use leptos::{ev::SubmitEvent, *};

pub const STATUS_OPTIONS: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

#[component]
pub fn AttendanceForm(
    form: RwSignal<AttendanceFormState>,
    state: RwSignal<AttendanceState>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let employee_options = move || {
        state.with(|s| {
            s.employees
                .iter()
                .map(|employee| {
                    let value = employee.id.to_string();
                    let selected = {
                        let value = value.clone();
                        move || form.with(|f| f.employee == value)
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
        <section class="card">
            <h2 class="card-title">"Mark Attendance"</h2>
            <form class="form-grid" on:submit=move |ev| on_submit.call(ev)>
                <label class="field">
                    <span>"Employee"</span>
                    <select
                        prop:value=move || form.with(|f| f.employee.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.employee = value);
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.employee.is_empty())>
                            "Select employee"
                        </option>
                        {employee_options}
                    </select>
                </label>
                <label class="field">
                    <span>"Date"</span>
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.date = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Status"</span>
                    <select
                        prop:value=move || form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {STATUS_OPTIONS
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || form.with(|f| f.status == status)
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Marking..." } else { "Mark Attendance" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures::employee, ssr::render_to_string};
    use chrono::NaiveDate;

    #[test]
    fn lists_employees_by_name_and_both_statuses() {
        let html = render_to_string(move || {
            let form = create_rw_signal(AttendanceFormState::for_date(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ));
            let state = create_rw_signal(AttendanceState {
                employees: vec![employee(1, 101, "Alice"), employee(2, 102, "Bob")],
                ..Default::default()
            });
            view! { <AttendanceForm form=form state=state on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("value=\"PRESENT\""));
        assert!(html.contains("value=\"ABSENT\""));
        assert!(html.contains("Mark Attendance"));
    }

    #[test]
    fn loading_disables_submit() {
        let html = render_to_string(move || {
            let form = create_rw_signal(AttendanceFormState::default());
            let state = create_rw_signal(AttendanceState {
                loading: true,
                ..Default::default()
            });
            view! { <AttendanceForm form=form state=state on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Marking..."));
        assert!(html.contains("disabled"));
    }
}
