use crate::api::{ApiClient, ApiError, Employee, EmployeePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: EmployeePayload) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: EmployeePayload,
    ) -> Result<Employee, ApiError> {
        self.client.update_employee(id, &payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
