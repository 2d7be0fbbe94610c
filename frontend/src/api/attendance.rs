use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceFilter, AttendanceRecord, CreateAttendance},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let params = filter.to_query();
        let mut request = self.request(Method::GET, "/attendance/").await;
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    pub async fn create_attendance(
        &self,
        payload: &CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let request = self
            .request(Method::POST, "/attendance/")
            .await
            .json(payload);
        let response = self.send(request).await?;
        Self::read_json(response).await
    }
}
