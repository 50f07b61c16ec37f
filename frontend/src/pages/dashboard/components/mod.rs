pub mod leave_form;
pub mod summary;

pub use leave_form::LeaveApplyForm;
pub use summary::{BalanceSection, StatsSection};
