use super::{
    repository::EmployeesRepository,
    utils::{
        EmployeeFormState, MSG_ADD_FAILED, MSG_DELETE_FAILED, MSG_FETCH_FAILED,
        MSG_UPDATE_FAILED,
    },
};
use crate::{
    api::{ApiClient, Employee},
    state::employees::{EmployeeSortField, EmployeesState},
};
use leptos::{ev::SubmitEvent, *};
use log::{error, info, warn};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesViewModel {
    repository: EmployeesRepository,
    pub state: RwSignal<EmployeesState>,
    pub form: RwSignal<EmployeeFormState>,
}

impl EmployeesViewModel {
    pub fn new(repository: EmployeesRepository) -> Self {
        Self {
            repository,
            state: create_rw_signal(EmployeesState::default()),
            form: create_rw_signal(EmployeeFormState::default()),
        }
    }

    pub async fn load(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.repository.fetch_employees().await {
            Ok(employees) => self.state.update(|s| {
                s.set_employees(employees);
                s.loading = false;
            }),
            Err(err) => {
                error!("Failed to fetch employees: {}", err);
                self.state.update(|s| {
                    s.error = Some(MSG_FETCH_FAILED.to_string());
                    s.loading = false;
                });
            }
        }
    }

    /// Creates a new employee, or updates the one being edited.
    pub async fn submit(&self) {
        if self.state.with_untracked(|s| s.loading) {
            return;
        }
        let payload = match self.form.with_untracked(EmployeeFormState::to_payload) {
            Ok(payload) => payload,
            Err(message) => {
                self.state.update(|s| s.error = Some(message));
                return;
            }
        };
        let editing_id = self.state.with_untracked(|s| s.editing_id);

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let (result, fallback) = match editing_id {
            Some(id) => (
                self.repository.update_employee(id, payload).await,
                MSG_UPDATE_FAILED,
            ),
            None => (
                self.repository.create_employee(payload).await,
                MSG_ADD_FAILED,
            ),
        };

        match result {
            Ok(employee) => {
                info!("Saved employee {} ({})", employee.emp_id, employee.id);
                self.state.update(|s| {
                    if editing_id.is_some() {
                        s.editing_id = None;
                        if !s.replace(employee.clone()) {
                            warn!("Updated employee {} is no longer listed, re-adding it", employee.id);
                            s.prepend(employee);
                        }
                    } else {
                        s.prepend(employee);
                    }
                    s.loading = false;
                });
                self.form.update(EmployeeFormState::reset);
            }
            Err(err) => {
                error!("Failed to save employee: {}", err);
                self.state.update(|s| {
                    s.error = Some(err.user_message(fallback));
                    s.loading = false;
                });
            }
        }
    }

    pub fn start_edit(&self, employee: &Employee) {
        self.form.set(EmployeeFormState::from_employee(employee));
        self.state.update(|s| {
            s.editing_id = Some(employee.id);
            s.error = None;
            s.close_menu();
        });
    }

    pub fn cancel_edit(&self) {
        self.form.update(EmployeeFormState::reset);
        self.state.update(|s| {
            s.editing_id = None;
            s.error = None;
        });
    }

    pub fn request_delete(&self, employee: &Employee) {
        self.state.update(|s| {
            s.pending_delete = Some(employee.clone());
            s.close_menu();
        });
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.pending_delete = None);
    }

    pub async fn confirm_delete(&self) {
        let Some(target) = self.state.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        self.state.update(|s| {
            s.pending_delete = None;
            s.loading = true;
            s.error = None;
        });
        match self.repository.delete_employee(target.id).await {
            Ok(()) => {
                info!("Deleted employee {} ({})", target.emp_id, target.id);
                if self.state.with_untracked(|s| s.editing_id == Some(target.id)) {
                    self.form.update(EmployeeFormState::reset);
                }
                self.state.update(|s| {
                    s.remove(target.id);
                    s.close_menu();
                    s.loading = false;
                });
            }
            Err(err) => {
                error!("Failed to delete employee {}: {}", target.id, err);
                self.state.update(|s| {
                    s.error = Some(err.user_message(MSG_DELETE_FAILED));
                    s.close_menu();
                    s.loading = false;
                });
            }
        }
    }

    pub fn toggle_sort(&self, field: EmployeeSortField) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn toggle_menu(&self, id: i64) {
        self.state.update(|s| s.toggle_menu(id));
    }

    pub fn close_menu(&self) {
        self.state.update(|s| s.close_menu());
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) + Clone + 'static {
        let vm = self.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let vm = vm.clone();
            spawn_local(async move { vm.submit().await });
        }
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) + Clone + 'static {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.confirm_delete().await });
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    EmployeesViewModel::new(EmployeesRepository::new_with_client(Rc::new(api)))
}
