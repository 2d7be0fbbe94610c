use super::{
    repository::AttendanceRepository,
    utils::{AttendanceFilterState, AttendanceFormState, MSG_FETCH_FAILED, MSG_MARK_FAILED},
};
use crate::{
    api::ApiClient,
    state::attendance::{AttendanceSortField, AttendanceState},
};
use leptos::{ev::SubmitEvent, *};
use log::{error, info};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceViewModel {
    repository: AttendanceRepository,
    pub state: RwSignal<AttendanceState>,
    pub form: RwSignal<AttendanceFormState>,
    pub filters: RwSignal<AttendanceFilterState>,
}

impl AttendanceViewModel {
    pub fn new(repository: AttendanceRepository) -> Self {
        Self {
            repository,
            state: create_rw_signal(AttendanceState::default()),
            form: create_rw_signal(AttendanceFormState::default()),
            filters: create_rw_signal(AttendanceFilterState::default()),
        }
    }

    pub async fn load(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.repository.fetch_initial().await {
            Ok((employees, attendance)) => self.state.update(|s| {
                s.set_loaded(employees, attendance);
                s.loading = false;
            }),
            Err(err) => {
                error!("Failed to load attendance screen: {}", err);
                self.state.update(|s| {
                    s.error = Some(MSG_FETCH_FAILED.to_string());
                    s.loading = false;
                });
            }
        }
    }

    pub async fn submit(&self) {
        if self.state.with_untracked(|s| s.loading) {
            return;
        }
        let payload = match self.form.with_untracked(AttendanceFormState::to_payload) {
            Ok(payload) => payload,
            Err(message) => {
                self.state.update(|s| s.error = Some(message));
                return;
            }
        };

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.repository.mark_attendance(payload).await {
            Ok(record) => {
                info!("Marked attendance {} on {}", record.id, record.date);
                self.state.update(|s| {
                    s.prepend(record);
                    s.loading = false;
                });
                self.form.update(AttendanceFormState::reset);
            }
            Err(err) => {
                error!("Failed to mark attendance: {}", err);
                self.state.update(|s| {
                    s.error = Some(err.user_message(MSG_MARK_FAILED));
                    s.loading = false;
                });
            }
        }
    }

    pub async fn apply_filters(&self) {
        let filter = match self.filters.with_untracked(AttendanceFilterState::to_filter) {
            Ok(filter) => filter,
            Err(message) => {
                self.state.update(|s| s.error = Some(message));
                return;
            }
        };

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.repository.fetch_attendance(&filter).await {
            Ok(records) => self.state.update(|s| {
                s.apply_filtered(filter, records);
                s.loading = false;
            }),
            Err(err) => {
                error!("Failed to fetch filtered attendance: {}", err);
                self.state.update(|s| {
                    s.error = Some(err.user_message(MSG_FETCH_FAILED));
                    s.loading = false;
                });
            }
        }
    }

    pub fn clear_filters(&self) {
        self.filters.update(AttendanceFilterState::reset);
        self.state.update(|s| {
            s.clear_filters();
            s.error = None;
        });
    }

    pub fn toggle_filters(&self) {
        self.state.update(|s| s.toggle_filters());
    }

    pub fn close_filters(&self) {
        self.state.update(|s| s.show_filters = false);
    }

    pub fn toggle_sort(&self, field: AttendanceSortField) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) + Clone + 'static {
        let vm = self.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let vm = vm.clone();
            spawn_local(async move { vm.submit().await });
        }
    }

    pub fn on_apply_filters(&self) -> impl Fn(()) + Clone + 'static {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.apply_filters().await });
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AttendanceViewModel::new(AttendanceRepository::new_with_client(Rc::new(api)))
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use crate::pages::attendance::utils::{MSG_RANGE_ORDER, MSG_SELECT_EMPLOYEE};
    use httpmock::prelude::*;
    use serde_json::json;

    fn employees_json() -> serde_json::Value {
        json!([
            { "id": 1, "empId": 2, "fullName": "Alice", "email": "alice@example.com", "department": "Engineering" },
            { "id": 2, "empId": 1, "fullName": "Bob", "email": "bob@example.com", "department": "Sales" }
        ])
    }

    fn record_json(id: i64, employee: i64, date: &str, status: &str) -> serde_json::Value {
        json!({ "id": id, "employee": employee, "date": date, "status": status })
    }

    fn view_model(server: &MockServer) -> AttendanceViewModel {
        let api = ApiClient::new_with_base_url(server.url("/api"));
        AttendanceViewModel::new(AttendanceRepository::new_with_client(Rc::new(api)))
    }

    /// Loads the screen, then drops the unfiltered mocks so later
    /// requests only match the mocks a test registers itself.
    async fn loaded_view_model(server: &MockServer) -> AttendanceViewModel {
        let mut employees = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200).json_body(employees_json());
            })
            .await;
        let mut attendance = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/");
                then.status(200).json_body(json!([
                    record_json(10, 1, "2024-01-02", "PRESENT"),
                    record_json(11, 2, "2024-01-01", "ABSENT")
                ]));
            })
            .await;
        let vm = view_model(server);
        vm.load().await;
        employees.delete_async().await;
        attendance.delete_async().await;
        vm
    }

    #[tokio::test]
    async fn load_populates_employees_and_attendance() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;

        let state = vm.state.get_untracked();
        assert_eq!(state.employees.len(), 2);
        assert_eq!(state.attendance.len(), 2);
        let resolved = state.attendance[0].resolve_employee(&state.employees).unwrap();
        assert_eq!(resolved.full_name, "Alice");
        runtime.dispose();
    }

    #[tokio::test]
    async fn load_failure_sets_message() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(503);
            })
            .await;
        let vm = view_model(&server);
        vm.load().await;

        let state = vm.state.get_untracked();
        assert_eq!(state.error.as_deref(), Some(MSG_FETCH_FAILED));
        assert!(!state.loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn submit_without_employee_issues_no_request() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(201).json_body(record_json(12, 1, "2024-01-03", "PRESENT"));
            })
            .await;
        let vm = view_model(&server);

        vm.submit().await;
        assert_eq!(
            vm.state.get_untracked().error.as_deref(),
            Some(MSG_SELECT_EMPLOYEE)
        );
        assert_eq!(create.hits_async().await, 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn submit_prepends_record_and_resets_form() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/attendance/").json_body(json!({
                    "employee_id": 2,
                    "date": "2024-01-03",
                    "status": "ABSENT"
                }));
                then.status(201).json_body(record_json(12, 2, "2024-01-03", "ABSENT"));
            })
            .await;

        vm.form.set(AttendanceFormState {
            employee: "2".into(),
            date: "2024-01-03".into(),
            status: AttendanceStatus::Absent,
        });
        vm.submit().await;

        let state = vm.state.get_untracked();
        assert_eq!(state.attendance.len(), 3);
        assert_eq!(state.attendance[0].id, 12);
        assert_eq!(vm.form.get_untracked(), AttendanceFormState::default());
        create.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn submit_failure_prefers_non_field_errors_over_detail() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(400).json_body(json!({
                    "non_field_errors": ["duplicate"],
                    "detail": "ignored"
                }));
            })
            .await;

        vm.form.update(|f| f.employee = "1".into());
        vm.submit().await;

        let state = vm.state.get_untracked();
        assert_eq!(state.error.as_deref(), Some("duplicate"));
        assert_eq!(state.attendance.len(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn apply_filters_replaces_list_and_closes_popover() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;
        let filtered = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/attendance/")
                    .query_param("status", "ABSENT");
                then.status(200)
                    .json_body(json!([record_json(11, 2, "2024-01-01", "ABSENT")]));
            })
            .await;

        vm.toggle_filters();
        vm.filters.update(|f| f.status = "ABSENT".into());
        vm.apply_filters().await;

        let state = vm.state.get_untracked();
        assert_eq!(state.attendance.len(), 1);
        assert!(!state.show_filters);
        assert!(!state.employee_filter_active());
        filtered.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn inverted_range_is_rejected_locally() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;

        vm.filters.update(|f| {
            f.date_from = "2024-02-10".into();
            f.date_to = "2024-02-01".into();
        });
        vm.apply_filters().await;

        let state = vm.state.get_untracked();
        assert_eq!(state.error.as_deref(), Some(MSG_RANGE_ORDER));
        assert_eq!(state.attendance.len(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn clear_filters_empties_list_without_fetching() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let vm = loaded_view_model(&server).await;
        let refetch = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/attendance/")
                    .query_param("employee", "1");
                then.status(200).json_body(json!([]));
            })
            .await;

        vm.filters.update(|f| f.employee = "1".into());
        vm.apply_filters().await;
        assert!(vm.state.get_untracked().show_empty_message());
        assert_eq!(refetch.hits_async().await, 1);

        vm.toggle_sort(AttendanceSortField::Date);
        vm.clear_filters();

        let state = vm.state.get_untracked();
        assert!(state.attendance.is_empty());
        assert_eq!(state.sort.field(), None);
        assert!(!state.show_empty_message());
        assert_eq!(vm.filters.get_untracked(), AttendanceFilterState::default());
        assert_eq!(refetch.hits_async().await, 1);
        runtime.dispose();
    }
}
