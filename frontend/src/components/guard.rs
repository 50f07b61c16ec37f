use crate::{
    api::SessionUser,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    create_effect(move |_| {
        if auth.get().is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show when=move || is_authenticated.get()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireManager(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_manager = create_memo(move |_| is_manager_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        let target = if !state.is_authenticated {
            "/login"
        } else if !is_manager_user(state.user.as_ref()) {
            "/dashboard"
        } else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show when=move || should_render_manager_children(is_authenticated.get(), is_manager.get())>
            {children()}
        </Show>
    }
}

fn is_manager_user(user: Option<&SessionUser>) -> bool {
    user.map(SessionUser::is_manager).unwrap_or(false)
}

fn should_render_manager_children(is_authenticated: bool, is_manager: bool) -> bool {
    is_authenticated && is_manager
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireManager};
    use crate::test_support::helpers::{employee_user, manager_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_manager_renders_children_for_managers() {
        let html = render_to_string(move || {
            provide_auth(Some(manager_user()));
            view! {
                <RequireManager>
                    {|| view! { <div>"manager-queue"</div> }}
                </RequireManager>
            }
        });
        assert!(html.contains("manager-queue"));
    }

    #[test]
    fn require_manager_hides_children_for_employees() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! {
                <RequireManager>
                    {|| view! { <div>"manager-queue"</div> }}
                </RequireManager>
            }
        });
        assert!(!html.contains("manager-queue"));
    }
}
