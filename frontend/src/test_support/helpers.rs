use crate::api::{LeaveBalanceResponse, LeaveResponse, SessionUser};
use crate::session::SessionContext;
use crate::state::auth::AuthState;
use chrono::NaiveDate;
use leptos::*;

pub fn employee_user() -> SessionUser {
    SessionUser {
        id: 7,
        username: "alice".into(),
        email: "alice@example.com".into(),
        full_name: "Alice Example".into(),
        roles: vec!["EMPLOYEE".into()],
    }
}

pub fn manager_user() -> SessionUser {
    SessionUser {
        id: 3,
        username: "mia".into(),
        email: "mia@example.com".into(),
        full_name: "Mia Manager".into(),
        roles: vec!["EMPLOYEE".into(), "MANAGER".into()],
    }
}

pub fn provide_auth(
    user: Option<SessionUser>,
) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let is_authenticated = user.is_some();
    let (auth, set_auth) = create_signal(AuthState {
        user,
        is_authenticated,
    });
    provide_context((auth, set_auth));
    (auth, set_auth)
}

/// Session already holding a bearer token, as after a successful login.
pub fn session_with_token() -> SessionContext {
    let session = SessionContext::new();
    session.start("jwt-token".into(), employee_user());
    session
}

pub fn leave_response(id: i64, status: &str) -> LeaveResponse {
    LeaveResponse {
        id,
        user_id: 7,
        user_name: "Alice Example".into(),
        user_email: Some("alice@example.com".into()),
        department: Some("Engineering".into()),
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
        number_of_days: 3,
        leave_type: "CASUAL_LEAVE".into(),
        reason: Some("Family visit".into()),
        status: status.into(),
        approved_by_name: None,
        manager_comments: None,
        approved_at: None,
        created_at: None,
    }
}

pub fn leave_balance() -> LeaveBalanceResponse {
    LeaveBalanceResponse {
        total_balance: 20.0,
        used_leave: 2.0,
        remaining_balance: 18.0,
        pending_requests: 1,
    }
}
