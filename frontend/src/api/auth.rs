use crate::api::{
    client::ApiClient,
    types::{ApiError, AuthResponse, LoginRequest, RegisterRequest},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(&format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    /// Registration responds with the same token + user payload as login.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(&format!("{}/auth/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }
}
