pub mod confirm_dialog;
pub mod decision_dialog;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod leave_detail;
pub mod leave_table;
pub mod status;
