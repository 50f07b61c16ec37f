use crate::api::LeaveResponse;
use crate::components::status::{format_leave_type, StatusBadge};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Read-only modal for a single leave request. Decisions and cancellation
/// live on the pages, not here.
#[component]
pub fn LeaveDetailModal(selected: RwSignal<Option<LeaveResponse>>) -> impl IntoView {
    let header_close_ref = create_node_ref::<html::Button>();
    let footer_close_ref = create_node_ref::<html::Button>();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&header_close_ref, &footer_close_ref);
    #[cfg(target_arch = "wasm32")]
    let previously_focused = create_rw_signal(None::<web_sys::HtmlElement>);

    let on_dialog_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            selected.set(None);
            #[cfg(target_arch = "wasm32")]
            if let Some(element) = previously_focused.get_untracked() {
                let _ = element.focus();
                previously_focused.set(None);
            }
        }
        "Tab" => {
            #[cfg(target_arch = "wasm32")]
            {
                let active_id = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.active_element())
                    .and_then(|element| element.get_attribute("id"))
                    .unwrap_or_default();
                if ev.shift_key() && active_id == "leave-detail-modal-header-close" {
                    ev.prevent_default();
                    if let Some(button) = footer_close_ref.get() {
                        let _ = button.focus();
                    }
                } else if !ev.shift_key() && active_id == "leave-detail-modal-footer-close" {
                    ev.prevent_default();
                    if let Some(button) = header_close_ref.get() {
                        let _ = button.focus();
                    }
                }
            }
        }
        _ => {}
    };

    create_effect(move |_| {
        if selected.get().is_some() {
            #[cfg(target_arch = "wasm32")]
            {
                let active = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.active_element())
                    .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
                previously_focused.set(active);
                if let Some(button) = header_close_ref.get() {
                    let _ = button.focus();
                }
            }
        }
    });

    let close = move || {
        selected.set(None);
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = previously_focused.get_untracked() {
            let _ = element.focus();
            previously_focused.set(None);
        }
    };

    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|leave| {
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div
                                    class="fixed inset-0 bg-overlay-backdrop"
                                    on:click=move |_| close()
                                ></div>
                                <div
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-md mx-4 p-6 space-y-4 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-action-primary-focus"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=on_dialog_keydown
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-fg-muted">"Leave request"</p>
                                            <p class="text-lg font-semibold text-fg">
                                                {format_leave_type(&leave.leave_type)}
                                            </p>
                                        </div>
                                        <button
                                            id="leave-detail-modal-header-close"
                                            node_ref=header_close_ref
                                            aria-label="Close"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| close()
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <div class="space-y-2 text-sm text-fg">
                                        <div>
                                            <span class="font-medium text-fg-muted">"Employee: "</span>
                                            <span>{leave.user_name.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Status: "</span>
                                            <StatusBadge status={leave.status.clone()}/>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Dates: "</span>
                                            <span>{format!("{} \u{2192} {} ({} days)", leave.start_date, leave.end_date, leave.number_of_days)}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Reason: "</span>
                                            <span>{leave.reason.clone().unwrap_or_else(|| "-".into())}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Decided by: "</span>
                                            <span>{leave.approved_by_name.clone().unwrap_or_else(|| "-".into())}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Manager comments: "</span>
                                            <span>{leave.manager_comments.clone().unwrap_or_else(|| "-".into())}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Submitted: "</span>
                                            <span>
                                                {leave
                                                    .created_at
                                                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                                    .unwrap_or_else(|| "-".into())}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="flex justify-end">
                                        <button
                                            id="leave-detail-modal-footer-close"
                                            node_ref=footer_close_ref
                                            class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                                            on:click=move |_| close()
                                        >
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_response;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn leave_detail_modal_renders_the_selected_leave() {
        let html = render_to_string(move || {
            let mut leave = leave_response(1, "APPROVED");
            leave.manager_comments = Some("enjoy".into());
            let selected = create_rw_signal(Some(leave));
            view! { <LeaveDetailModal selected=selected /> }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("CASUAL LEAVE"));
        assert!(html.contains("Approved"));
        assert!(html.contains("enjoy"));
    }

    #[test]
    fn leave_detail_modal_renders_nothing_without_a_selection() {
        let html = render_to_string(move || {
            let selected = create_rw_signal(None::<crate::api::LeaveResponse>);
            view! { <LeaveDetailModal selected=selected /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
