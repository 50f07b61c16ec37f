use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveBalanceResponse, LeaveResponse};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Everything the employee dashboard needs in one fetch. The two calls run
/// concurrently and the first failure wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeOverview {
    pub leaves: Vec<LeaveResponse>,
    pub balance: LeaveBalanceResponse,
}

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employee_overview(&self) -> Result<EmployeeOverview, ApiError> {
        let (leaves, balance) =
            futures::try_join!(self.client.my_leaves(), self.client.leave_balance())?;
        Ok(EmployeeOverview { leaves, balance })
    }

    pub async fn submit_leave(&self, payload: CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.apply_leave(payload).await.map(|_| ())
    }

    pub async fn cancel_leave(&self, id: i64) -> Result<(), ApiError> {
        self.client.cancel_leave(id).await
    }
}
