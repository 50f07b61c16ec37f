pub mod dashboard;
pub mod home;
pub mod login;
pub mod manager_pending;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use manager_pending::ManagerPendingPage;
