use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Body of a successful `/auth/login` or `/auth/register` call. The backend
/// also sends a `type: "Bearer"` discriminator which nothing here needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub leave_balance: Option<f64>,
}

/// Client-side identity restored from the session store between page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
}

impl SessionUser {
    pub fn is_manager(&self) -> bool {
        self.roles.iter().any(|role| role == "MANAGER")
    }
}

impl From<&AuthResponse> for SessionUser {
    fn from(response: &AuthResponse) -> Self {
        Self {
            id: response.id,
            username: response.username.clone(),
            email: response.email.clone(),
            full_name: response.full_name.clone(),
            roles: response.roles.clone(),
        }
    }
}

/// Leave type identifiers accepted by the backend, in form display order.
pub const LEAVE_TYPES: &[&str] = &[
    "SICK_LEAVE",
    "CASUAL_LEAVE",
    "ANNUAL_LEAVE",
    "MATERNITY_LEAVE",
    "PATERNITY_LEAVE",
    "UNPAID_LEAVE",
];

pub const DEFAULT_LEAVE_TYPE: &str = "CASUAL_LEAVE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub reason: Option<String>,
}

/// One leave record as the backend reports it. `status` and `leave_type`
/// stay plain strings so unknown values render through the display fallbacks
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: i32,
    pub leave_type: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: String,
    #[serde(default)]
    pub approved_by_name: Option<String>,
    #[serde(default)]
    pub manager_comments: Option<String>,
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionRequest {
    pub status: String,
    pub manager_comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalanceResponse {
    pub total_balance: f64,
    pub used_leave: f64,
    pub remaining_balance: f64,
    pub pending_requests: i64,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default = "default_error_code")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

fn default_error_code() -> String {
    "UNKNOWN".to_string()
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn deserialize_leave_response_with_unknown_status() {
        let record: LeaveResponse = serde_json::from_value(serde_json::json!({
            "id": 12,
            "userId": 7,
            "userName": "Alice Example",
            "userEmail": "alice@example.com",
            "department": "Engineering",
            "startDate": "2024-06-10",
            "endDate": "2024-06-12",
            "numberOfDays": 3,
            "leaveType": "SABBATICAL",
            "reason": null,
            "status": "ESCALATED",
            "approvedByName": null,
            "managerComments": null,
            "approvedAt": null,
            "createdAt": "2024-06-01T09:30:00"
        }))
        .unwrap();
        assert_eq!(record.status, "ESCALATED");
        assert_eq!(record.leave_type, "SABBATICAL");
        assert_eq!(record.number_of_days, 3);
    }

    #[test]
    fn session_user_manager_flag_requires_manager_role() {
        let mut user = SessionUser {
            id: 1,
            username: "bob".into(),
            email: "bob@example.com".into(),
            full_name: "Bob Example".into(),
            roles: vec!["EMPLOYEE".into()],
        };
        assert!(!user.is_manager());
        user.roles.push("MANAGER".into());
        assert!(user.is_manager());
    }

    #[test]
    fn default_leave_type_is_listed() {
        assert!(LEAVE_TYPES.contains(&DEFAULT_LEAVE_TYPE));
    }
}
