use crate::api::LeaveDecisionRequest;
use leptos::ev::KeyboardEvent;
use leptos::*;
use web_sys::HtmlInputElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn wire_status(self) -> &'static str {
        match self {
            Decision::Approve => "APPROVED",
            Decision::Reject => "REJECTED",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Decision::Approve => "Approve leave request",
            Decision::Reject => "Reject leave request",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }
}

/// What the manager is being asked to confirm.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionPrompt {
    pub leave_id: i64,
    pub employee_name: String,
    pub decision: Decision,
}

pub fn decision_request(decision: Decision, comment: &str) -> LeaveDecisionRequest {
    let trimmed = comment.trim();
    LeaveDecisionRequest {
        status: decision.wire_status().to_string(),
        manager_comments: if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        },
    }
}

#[component]
pub fn DecisionDialog(
    prompt: Signal<Option<DecisionPrompt>>,
    on_submit: Callback<(i64, LeaveDecisionRequest)>,
    on_dismiss: Callback<()>,
    #[prop(optional, into)] submit_disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let comment = create_rw_signal(String::new());

    // A fresh prompt starts with an empty comment box.
    create_effect(move |_| {
        if prompt.get().is_some() {
            comment.set(String::new());
        }
    });

    let dismiss_on_backdrop = on_dismiss;
    let dismiss_on_esc = on_dismiss;
    let dismiss_on_footer_button = on_dismiss;

    let submit = move |_| {
        if let Some(active) = prompt.get_untracked() {
            let request = decision_request(active.decision, &comment.get_untracked());
            on_submit.call((active.leave_id, request));
        }
    };

    view! {
        <Show when=move || prompt.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| dismiss_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dismiss_on_esc.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">
                        {move || prompt.get().map(|p| p.decision.title())}
                    </h2>
                    <p class="text-sm text-fg-muted">
                        {move || {
                            prompt
                                .get()
                                .map(|p| format!("Leave request from {}.", p.employee_name))
                        }}
                    </p>
                    <label class="block text-sm">
                        <span class="text-fg-muted">"Comments (optional)"</span>
                        <input
                            type="text"
                            class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || comment.get()
                            on:input=move |ev| {
                                let input: HtmlInputElement = event_target(&ev);
                                comment.set(input.value());
                            }
                        />
                    </label>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| dismiss_on_footer_button.call(())
                        >
                            "Close"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || submit_disabled.get()
                            on:click=submit
                        >
                            {move || prompt.get().map(|p| p.decision.submit_label())}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_renders_the_active_prompt() {
        let html = render_to_string(move || {
            let prompt = Signal::derive(|| {
                Some(DecisionPrompt {
                    leave_id: 2,
                    employee_name: "Alice Example".to_string(),
                    decision: Decision::Reject,
                })
            });
            view! {
                <DecisionDialog
                    prompt=prompt
                    on_submit=Callback::new(|_| {})
                    on_dismiss=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Reject leave request"));
        assert!(html.contains("Leave request from Alice Example."));
        assert!(html.contains("Comments (optional)"));
    }
}
