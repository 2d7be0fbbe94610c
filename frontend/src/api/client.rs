use log::{debug, error, warn};
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Builds a request against `{base_url}{path}` with the JSON content type
    /// every call carries.
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Sends the request and turns transport failures and non-2xx statuses
    /// into `ApiError`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            ApiError::Request(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await.unwrap_or_default();
        let body = ErrorBody::from_bytes(&bytes);
        warn!("Request returned {}: {:?}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
