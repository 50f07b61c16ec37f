use crate::api::{ApiClient, ApiError, LeaveDecisionRequest, LeaveResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ManagerRepository {
    client: Rc<ApiClient>,
}

impl ManagerRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn pending_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.client.pending_leaves().await
    }

    pub async fn team_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.client.all_leaves().await
    }

    pub async fn decide_leave(
        &self,
        id: i64,
        decision: LeaveDecisionRequest,
    ) -> Result<(), ApiError> {
        self.client.decide_leave(id, decision).await.map(|_| ())
    }
}
