use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAuth, RequireManager},
    pages::{
        dashboard::DashboardPage, home::HomePage, login::LoginPage,
        manager_pending::ManagerPendingPage,
    },
    session::SessionContext,
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard", "/manager/pending"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/manager/pending"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let session = SessionContext::restore();
    provide_context(session.clone());
    provide_context(crate::api::ApiClient::new(session));
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/manager/pending" view=ProtectedManagerPending/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedManagerPending() -> impl IntoView {
    view! { <RequireManager><ManagerPendingPage/></RequireManager> }
}
