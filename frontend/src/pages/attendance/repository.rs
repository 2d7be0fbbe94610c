use crate::api::{
    ApiClient, ApiError, AttendanceFilter, AttendanceRecord, CreateAttendance, Employee,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Employees first, then the unfiltered attendance list.
    pub async fn fetch_initial(
        &self,
    ) -> Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError> {
        let employees = self.client.list_employees().await?;
        let attendance = self
            .client
            .list_attendance(&AttendanceFilter::default())
            .await?;
        Ok((employees, attendance))
    }

    pub async fn fetch_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(filter).await
    }

    pub async fn mark_attendance(
        &self,
        payload: CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.create_attendance(&payload).await
    }
}
