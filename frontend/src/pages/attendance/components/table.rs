use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    state::attendance::{AttendanceSortField, AttendanceState},
    utils::{sort::sort_indicator, time::format_date},
};
use leptos::*;

const UNRESOLVED_NAME: &str = "Unknown";
const PLACEHOLDER: &str = "-";

#[component]
pub fn AttendanceTable(
    state: RwSignal<AttendanceState>,
    on_sort: Callback<AttendanceSortField>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let show_empty = Signal::derive(move || state.with(|s| s.show_empty_message()));
    let show_counts = Signal::derive(move || state.with(|s| s.employee_filter_active()));
    let counts = Signal::derive(move || state.with(|s| s.counts()));
    let indicator = move |field: AttendanceSortField| {
        move || state.with(|s| sort_indicator(s.sort.direction_for(field)))
    };

    view! {
        <Show when=move || show_counts.get() && !show_empty.get()>
            <div class="counters">
                <span class="counter counter-present">
                    "Present: " {move || counts.get().present}
                </span>
                <span class="counter counter-absent">
                    "Absent: " {move || counts.get().absent}
                </span>
            </div>
        </Show>
        <Show
            when=move || !show_empty.get()
            fallback=|| view! { <EmptyState title="No attendance records yet" /> }
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <button
                                type="button"
                                class="sort-header"
                                on:click=move |_| on_sort.call(AttendanceSortField::EmpId)
                            >
                                "Emp ID " {indicator(AttendanceSortField::EmpId)}
                            </button>
                        </th>
                        <th>"Name"</th>
                        <th>"Department"</th>
                        <th>
                            <button
                                type="button"
                                class="sort-header"
                                on:click=move |_| on_sort.call(AttendanceSortField::Date)
                            >
                                "Date " {indicator(AttendanceSortField::Date)}
                            </button>
                        </th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.sorted())
                        key=|record| (record.id, record.status)
                        children=move |record: AttendanceRecord| {
                            view! { <AttendanceRow record=record state=state /> }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
        </Show>
    }
}

#[component]
fn AttendanceRow(record: AttendanceRecord, state: RwSignal<AttendanceState>) -> impl IntoView {
    let resolved = state.with_untracked(|s| record.resolve_employee(&s.employees));
    let (emp_id, name, department) = match resolved {
        Some(employee) => (employee.emp_id.to_string(), employee.full_name, employee.department),
        None => (
            PLACEHOLDER.to_string(),
            UNRESOLVED_NAME.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };
    let status_class = match record.status {
        AttendanceStatus::Present => "badge badge-present",
        AttendanceStatus::Absent => "badge badge-absent",
    };

    view! {
        <tr>
            <td>{emp_id}</td>
            <td>{name}</td>
            <td>{department}</td>
            <td>{format_date(record.date)}</td>
            <td>
                <span class=status_class>{record.status.label()}</span>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::AttendanceFilter,
        test_support::{
            fixtures::{employee, record},
            ssr::render_to_string,
        },
    };

    fn render(state: AttendanceState) -> String {
        render_to_string(move || {
            let state = create_rw_signal(state);
            view! { <AttendanceTable state=state on_sort=Callback::new(|_| {}) /> }
        })
    }

    fn employee_filter() -> Option<AttendanceFilter> {
        Some(AttendanceFilter {
            employee: Some("1".into()),
            ..Default::default()
        })
    }

    #[test]
    fn rows_resolve_employees_and_fall_back_to_placeholders() {
        let html = render(AttendanceState {
            employees: vec![employee(1, 101, "Alice")],
            attendance: vec![
                record(10, 1, "2024-01-02", AttendanceStatus::Present),
                record(11, 99, "2024-01-01", AttendanceStatus::Absent),
            ],
            ..Default::default()
        });
        assert!(html.contains("Alice"));
        assert!(html.contains("101"));
        assert!(html.contains("Unknown"));
        assert!(html.contains("2024-01-02"));
        assert!(html.contains("Absent"));
        assert!(!html.contains("Present: "));
    }

    #[test]
    fn date_sort_orders_rows() {
        let mut state = AttendanceState {
            employees: vec![employee(1, 101, "Alice"), employee(2, 102, "Bob")],
            attendance: vec![
                record(10, 2, "2024-01-02", AttendanceStatus::Present),
                record(11, 1, "2024-01-01", AttendanceStatus::Present),
            ],
            ..Default::default()
        };
        state.toggle_sort(AttendanceSortField::Date);
        let html = render(state);
        let first = html.find("2024-01-01").unwrap();
        let second = html.find("2024-01-02").unwrap();
        assert!(first < second);
    }

    #[test]
    fn employee_filter_shows_counters() {
        let html = render(AttendanceState {
            employees: vec![employee(1, 101, "Alice")],
            attendance: vec![
                record(10, 1, "2024-01-02", AttendanceStatus::Present),
                record(11, 1, "2024-01-01", AttendanceStatus::Absent),
                record(12, 1, "2023-12-29", AttendanceStatus::Present),
            ],
            applied_filter: employee_filter(),
            ..Default::default()
        });
        assert!(html.contains("Present: "));
        assert!(html.contains("Absent: "));
    }

    #[test]
    fn empty_employee_filter_result_shows_message_instead_of_table() {
        let html = render(AttendanceState {
            applied_filter: employee_filter(),
            ..Default::default()
        });
        assert!(html.contains("No attendance records yet"));
        assert!(!html.contains("<table"));
    }
}
