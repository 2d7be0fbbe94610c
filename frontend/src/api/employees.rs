use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Employee, EmployeePayload},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/employees/").await;
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let request = self.request(Method::POST, "/employees/").await.json(payload);
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/employees/{}/", id))
            .await
            .json(payload);
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/employees/{}/", id))
            .await;
        self.send(request).await?;
        Ok(())
    }
}
