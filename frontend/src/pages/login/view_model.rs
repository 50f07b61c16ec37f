use super::utils::{AuthFormState, AuthMode};
use crate::api::{ApiError, LoginRequest, RegisterRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub mode: RwSignal<AuthMode>,
    pub form: AuthFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn switch_mode(&self, mode: AuthMode) {
        self.mode.set(mode);
        self.error.set(None);
    }
}

fn leave_for_dashboard(form: AuthFormState, error: RwSignal<Option<ApiError>>) {
    error.set(None);
    form.clear_password();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/dashboard");
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let mode = create_rw_signal(AuthMode::SignIn);
    let form = AuthFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let register_action = auth::use_register_action();

    let form_copy = form;
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => leave_for_dashboard(form_copy, error),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    // Registration signs the new account straight in, so the success path is
    // the same handoff as login.
    let form_for_register = form;
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => leave_for_dashboard(form_for_register, error),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        mode,
        form,
        error,
        login_action,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_to_sign_in() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert_eq!(vm.mode.get(), AuthMode::SignIn);
            assert!(vm.error.get().is_none());
            assert!(vm.form.username.get().is_empty());
        });
    }

    #[test]
    fn switching_modes_clears_feedback() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.error.set(Some(ApiError::validation("bad input")));
            vm.switch_mode(AuthMode::Register);
            assert_eq!(vm.mode.get(), AuthMode::Register);
            assert!(vm.error.get().is_none());
        });
    }
}
