use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::components::status::format_leave_type;
use crate::pages::dashboard::utils::{LeaveFormState, MessageState};
use crate::api::LEAVE_TYPES;
use leptos::*;

#[component]
pub fn LeaveApplyForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    on_submit: Callback<()>,
    pending: Signal<bool>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    let leave_type = state.leave_type_signal();
    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let reason_signal = state.reason_signal();
    // Soft picker floor; the real range check happens in to_payload().
    let today = chrono::Local::now().date_naive().to_string();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">"Apply for leave"</h3>
                <p class="text-sm text-fg-muted">"Pick the leave type and dates, then submit the request."</p>
            </div>
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message={message.get().error.map(|err| err.error).unwrap_or_default()} />
            </Show>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
            </Show>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Type"</label>
                    <select
                        class="mt-1 block w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|value| view! {
                                <option value=*value>{format_leave_type(value)}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Start date"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                            min=today.clone()
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"End date"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                            min=move || {
                                let start = start_signal.get();
                                if start.is_empty() { today.clone() } else { start }
                            }
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Reason (optional)"</label>
                    <textarea
                        rows=3
                        class="mt-1 block w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_every_leave_type_option() {
        let html = render_to_string(move || {
            let state = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            view! {
                <LeaveApplyForm
                    state=state
                    message=message
                    on_submit=Callback::new(|_| {})
                    pending=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("Apply for leave"));
        assert!(html.contains("CASUAL LEAVE"));
        assert!(html.contains("SICK LEAVE"));
        assert!(html.contains("Submit request"));
    }

    #[test]
    fn form_surfaces_validation_errors() {
        let html = render_to_string(move || {
            let state = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            message.update(|msg| msg.set_error(crate::api::ApiError::validation(
                "End date must be after start date",
            )));
            view! {
                <LeaveApplyForm
                    state=state
                    message=message
                    on_submit=Callback::new(|_| {})
                    pending=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("End date must be after start date"));
    }
}
