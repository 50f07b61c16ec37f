use crate::{
    api::LoginRequest,
    pages::login::{
        utils::{self, AuthMode},
        view_model::use_login_view_model,
    },
};
use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let login_pending = vm.login_action.pending();
    let register_pending = vm.register_action.pending();
    let form = vm.form;
    let mode = vm.mode;
    let error = vm.error;
    let login_action = vm.login_action;
    let register_action = vm.register_action;

    let vm_for_toggle = vm.clone();
    let toggle_mode = move |_| {
        let next = match mode.get_untracked() {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        };
        vm_for_toggle.switch_mode(next);
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match mode.get_untracked() {
            AuthMode::SignIn => {
                if login_pending.get_untracked() {
                    return;
                }
                let username = form.username.get_untracked();
                let password = form.password.get_untracked();
                if let Err(msg) = utils::validate_credentials(&username, &password) {
                    error.set(Some(crate::api::ApiError::validation(msg)));
                    return;
                }
                error.set(None);
                login_action.dispatch(LoginRequest { username, password });
            }
            AuthMode::Register => {
                if register_pending.get_untracked() {
                    return;
                }
                match form.to_register_request() {
                    Ok(request) => {
                        error.set(None);
                        register_action.dispatch(request);
                    }
                    Err(msg) => error.set(Some(crate::api::ApiError::validation(msg))),
                }
            }
        }
    };

    let is_register = move || mode.get() == AuthMode::Register;
    let pending = move || login_pending.get() || register_pending.get();

    let input_class = "appearance-none relative block w-full px-3 py-2 border border-border placeholder:text-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {move || if is_register() { "Create your LeaveDesk account" } else { "Sign in to LeaveDesk" }}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Leave management for your team"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-2">
                        <div>
                            <label for="username" class="sr-only">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                required
                                class=input_class
                                placeholder="Username"
                                prop:value=move || form.username.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.username.set(target.value());
                                }
                            />
                        </div>
                        <Show when=is_register>
                            <div>
                                <label for="email" class="sr-only">"Email"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    class=input_class
                                    placeholder="Email"
                                    prop:value=move || form.email.get()
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        form.email.set(target.value());
                                    }
                                />
                            </div>
                            <div>
                                <label for="full_name" class="sr-only">"Full name"</label>
                                <input
                                    id="full_name"
                                    name="full_name"
                                    type="text"
                                    class=input_class
                                    placeholder="Full name"
                                    prop:value=move || form.full_name.get()
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        form.full_name.set(target.value());
                                    }
                                />
                            </div>
                            <div>
                                <label for="department" class="sr-only">"Department"</label>
                                <input
                                    id="department"
                                    name="department"
                                    type="text"
                                    class=input_class
                                    placeholder="Department (optional)"
                                    prop:value=move || form.department.get()
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        form.department.set(target.value());
                                    }
                                />
                            </div>
                        </Show>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class=input_class
                                placeholder="Password"
                                prop:value=move || form.password.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.password.set(target.value());
                                }
                            />
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                            {move || error.get().map(|err| err.error).unwrap_or_default()}
                        </div>
                    </Show>

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            {move || match (is_register(), pending()) {
                                (false, false) => "Sign in",
                                (false, true) => "Signing in...",
                                (true, false) => "Create account",
                                (true, true) => "Creating account...",
                            }}
                        </button>
                    </div>
                    <p class="text-center text-sm text-fg-muted">
                        <button type="button" class="text-action-primary-bg hover:underline" on:click=toggle_mode>
                            {move || if is_register() {
                                "Already have an account? Sign in"
                            } else {
                                "New here? Create an account"
                            }}
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::LoginPanel;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn login_panel_renders_the_sign_in_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Sign in to LeaveDesk"));
        assert!(html.contains("placeholder=\"Username\""));
        assert!(html.contains("placeholder=\"Password\""));
        assert!(html.contains("New here? Create an account"));
    }
}
