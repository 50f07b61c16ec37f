use crate::components::decision_dialog::{Decision, DecisionDialog};
use crate::components::layout::{ErrorMessage, Layout, SuccessMessage};
use crate::components::leave_detail::LeaveDetailModal;
use crate::components::leave_table::{LeaveScope, LeaveTable};
use crate::pages::manager_pending::view_model::{use_manager_queue_view_model, ManagerQueue};
use leptos::*;

#[component]
pub fn ManagerPendingPage() -> impl IntoView {
    let vm = use_manager_queue_view_model(ManagerQueue::Pending);
    let leaves = vm.leaves();
    let loading = vm.loading();
    let load_error = vm.load_error();
    let queue_message = vm.queue_message;
    let decision_prompt = vm.decision_prompt;

    let dismiss_prompt = Callback::new(move |_| decision_prompt.set(None));
    let prompt = Signal::derive(move || decision_prompt.get());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex justify-end">
                    <button
                        class="inline-flex items-center justify-center rounded-md px-3 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| vm.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
                <Show when=move || queue_message.get().error.is_some()>
                    <ErrorMessage message={queue_message.get().error.map(|err| err.error).unwrap_or_default()} />
                </Show>
                <Show when=move || queue_message.get().success.is_some()>
                    <SuccessMessage message={queue_message.get().success.clone().unwrap_or_default()} />
                </Show>
                <LeaveTable
                    leaves=leaves
                    scope=LeaveScope::Manager
                    loading=loading
                    error=load_error
                    on_view=vm.on_view()
                    on_approve=vm.on_decide(Decision::Approve)
                    on_reject=vm.on_decide(Decision::Reject)
                    title="Pending Requests"
                />
            </div>
            <LeaveDetailModal selected=vm.selected_leave />
            <DecisionDialog
                prompt=prompt
                on_submit=vm.on_submit_decision()
                on_dismiss=dismiss_prompt
                submit_disabled=vm.decide_action.pending()
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{manager_user, provide_auth, session_with_token};
    use crate::test_support::ssr::render_to_string;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn pending_queue_renders_the_manager_table() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/manager/leaves/pending");
            then.status(200).json_body(json!([]));
        });

        let html = render_to_string(move || {
            provide_auth(Some(manager_user()));
            provide_context(ApiClient::new_with_base_url(
                server.url("/api"),
                session_with_token(),
            ));
            view! { <ManagerPendingPage /> }
        });
        assert!(html.contains("Pending Requests"));
    }
}
