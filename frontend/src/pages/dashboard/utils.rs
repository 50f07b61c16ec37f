use crate::api::{ApiError, CreateLeaveRequest, LeaveResponse, DEFAULT_LEAVE_TYPE};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(DEFAULT_LEAVE_TYPE.to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set(DEFAULT_LEAVE_TYPE.into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// Validates locally before anything goes on the wire; a bad date range
    /// never reaches the backend.
    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let start = parse_date(
            &self.start_date.get(),
            "Enter the start date as YYYY-MM-DD.",
        )?;
        let end = parse_date(&self.end_date.get(), "Enter the end date as YYYY-MM-DD.")?;
        if end < start {
            return Err(ApiError::validation("End date must be after start date"));
        }
        Ok(CreateLeaveRequest {
            leave_type: self.leave_type.get(),
            start_date: start,
            end_date: end,
            reason: optional_string(self.reason.get()),
        })
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Per-status counts over one list of leaves. `other` catches statuses this
/// client does not know about, so the four counts always sum to the list
/// length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub other: usize,
}

pub fn summarize(leaves: &[LeaveResponse]) -> LeaveStats {
    let mut stats = LeaveStats::default();
    for leave in leaves {
        match leave.status.as_str() {
            "PENDING" => stats.pending += 1,
            "APPROVED" => stats.approved += 1,
            "REJECTED" => stats.rejected += 1,
            _ => stats.other += 1,
        }
    }
    stats
}

fn parse_date(input: &str, err: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(err.to_string()))
}

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
