use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, SessionUser},
    pages::login::repository as auth_repository,
    session::SessionContext,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn is_manager(&self) -> bool {
        self.user.as_ref().map(SessionUser::is_manager).unwrap_or(false)
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_default()
}

fn create_auth_context() -> AuthContext {
    let session = use_session();
    let (auth_state, set_auth_state) = create_signal(AuthState {
        is_authenticated: session.is_authenticated(),
        user: session.user(),
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &auth_repository::AuthRepository,
    session: SessionContext,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = repo.login(request).await?;
    let user = SessionUser::from(&response);
    session.start(response.token, user.clone());
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// Registration signs the new user in immediately; the response carries the
/// same token + user payload as login.
pub async fn register_request(
    request: RegisterRequest,
    repo: &auth_repository::AuthRepository,
    session: SessionContext,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = repo.register(request).await?;
    let user = SessionUser::from(&response);
    session.start(response.token, user.clone());
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// The backend keeps no server-side session, so signing out only discards
/// the local token and user snapshot.
pub fn logout(session: &SessionContext, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}

fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    let repo = auth_repository::AuthRepository::new_with_client(std::rc::Rc::new(use_api_client()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(payload, &repo, session, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    let repo = auth_repository::AuthRepository::new_with_client(std::rc::Rc::new(use_api_client()));

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { register_request(payload, &repo, session, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();

    create_action(move |_: &()| {
        let session = session.clone();
        async move { logout(&session, set_auth) }
    })
}
