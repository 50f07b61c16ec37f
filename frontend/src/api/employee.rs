use crate::api::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveBalanceResponse, LeaveResponse},
};

impl ApiClient {
    pub async fn apply_leave(&self, request: CreateLeaveRequest) -> Result<LeaveResponse, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(&format!("{}/employee/leaves", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    pub async fn my_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(&format!("{}/employee/leaves", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    pub async fn leave_balance(&self) -> Result<LeaveBalanceResponse, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(&format!("{}/employee/leaves/balance", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_json_response(response).await
    }

    pub async fn cancel_leave(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .delete(&format!("{}/employee/leaves/{}", base_url, id))
            .headers(headers)
            .send()
            .await
            .map_err(Self::send_error)?;
        self.map_empty_response(response).await
    }
}
