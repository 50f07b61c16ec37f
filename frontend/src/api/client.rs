use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, session::SessionContext};

/// Thin REST client over the leave backend. The session is constructor
/// injected: every authenticated call reads its bearer token from the
/// `SessionContext` it was built with, never from ambient browser state.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    /// Client with a fixed base URL, bypassing runtime config resolution.
    /// Host tests point this at a mock server.
    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(super) fn http(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn auth_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let token = self
            .session
            .token()
            .ok_or_else(|| ApiError::request_failed("Not authenticated"))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::request_failed("Invalid token format"))?,
        );
        Ok(headers)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            redirect_to_login_if_needed();
        }
    }

    /// Decodes a success body as `T`, or the backend's `{"error": …}` body
    /// as `ApiError`. Bodies that fail to decode map to a generic
    /// request-failure error carrying the HTTP status.
    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(decode_error_body(response, status).await)
        }
    }

    pub(super) async fn map_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), ApiError> {
        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(decode_error_body(response, status).await)
        }
    }

    pub(super) fn send_error(err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!("Request failed: {}", err))
    }
}

async fn decode_error_body(response: reqwest::Response, status: StatusCode) -> ApiError {
    match response.json::<ApiError>().await {
        Ok(error) => error,
        Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
    }
}

fn redirect_to_login_if_needed() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}
