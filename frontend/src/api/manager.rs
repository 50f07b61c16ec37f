use crate::api::{
    client::ApiClient,
    types::{ApiError, LeaveDecisionRequest, LeaveResponse},
};

impl ApiClient {
    pub async fn all_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(&format!("{}/manager/leaves", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    pub async fn pending_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(&format!("{}/manager/leaves/pending", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    pub async fn decide_leave(
        &self,
        id: i64,
        request: LeaveDecisionRequest,
    ) -> Result<LeaveResponse, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .put(&format!("{}/manager/leaves/{}/approve", base_url, id))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }
}
