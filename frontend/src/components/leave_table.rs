use crate::api::LeaveResponse;
use crate::components::empty_state::EmptyState;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::components::status::{format_leave_type, StatusBadge};
use leptos::*;

/// Whose leaves the table is showing. Resolved once by the page that owns
/// the table, never re-derived per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveScope {
    Employee,
    Manager,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveAction {
    View,
    Cancel,
    Approve,
    Reject,
}

/// Row actions for a leave in the given scope. Only pending leaves can be
/// acted on; everything else is view-only.
pub fn available_actions(scope: LeaveScope, status: &str) -> Vec<LeaveAction> {
    match (scope, status) {
        (LeaveScope::Manager, "PENDING") => {
            vec![LeaveAction::Approve, LeaveAction::Reject, LeaveAction::View]
        }
        (LeaveScope::Employee, "PENDING") => vec![LeaveAction::Cancel, LeaveAction::View],
        _ => vec![LeaveAction::View],
    }
}

#[component]
pub fn LeaveTable(
    leaves: Signal<Vec<LeaveResponse>>,
    scope: LeaveScope,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    on_view: Callback<LeaveResponse>,
    #[prop(optional)] on_cancel: Option<Callback<LeaveResponse>>,
    #[prop(optional)] on_approve: Option<Callback<LeaveResponse>>,
    #[prop(optional)] on_reject: Option<Callback<LeaveResponse>>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let show_employee_column = scope == LeaveScope::Manager;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <div class="px-6 py-4 border-b border-border">
                <h3 class="text-lg font-medium text-fg">{title}</h3>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="px-6 py-4">
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-fg-muted">
                    <LoadingSpinner />
                    <span>"Loading leave requests..."</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && leaves.get().is_empty() && error.get().is_none()>
                <div class="px-6 py-4">
                    <EmptyState
                        title="No leave requests"
                        description="Leave requests will show up here once they are submitted."
                    />
                </div>
            </Show>
            <Show when=move || !leaves.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <Show when=move || show_employee_column>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee"</th>
                                </Show>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Type"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Dates"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Days"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Status"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-surface-elevated divide-y divide-border">
                            <For
                                each=move || leaves.get()
                                key=|leave| leave.id
                                children=move |leave: LeaveResponse| {
                                    let leave = store_value(leave);
                                    let row = leave.get_value();
                                    let actions = available_actions(scope, &row.status);
                                    let can_cancel = actions.contains(&LeaveAction::Cancel);
                                    let can_decide = actions.contains(&LeaveAction::Approve);
                                    let dates = format!("{} \u{2192} {}", row.start_date, row.end_date);
                                    view! {
                                        <tr class="hover:bg-surface-muted cursor-pointer" on:click=move |_| on_view.call(leave.get_value())>
                                            <Show when=move || show_employee_column>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                    {leave.get_value().user_name}
                                                </td>
                                            </Show>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {format_leave_type(&row.leave_type)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {dates}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {row.number_of_days}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <StatusBadge status={row.status.clone()}/>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                <div class="flex gap-2">
                                                    <Show when=move || can_decide>
                                                        <button
                                                            class="text-status-success-text hover:underline"
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                if let Some(cb) = on_approve {
                                                                    cb.call(leave.get_value());
                                                                }
                                                            }
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            class="text-status-error-text hover:underline"
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                if let Some(cb) = on_reject {
                                                                    cb.call(leave.get_value());
                                                                }
                                                            }
                                                        >
                                                            "Reject"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || can_cancel>
                                                        <button
                                                            class="text-status-error-text hover:underline"
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                if let Some(cb) = on_cancel {
                                                                    cb.call(leave.get_value());
                                                                }
                                                            }
                                                        >
                                                            "Cancel"
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="text-action-primary-bg hover:underline"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            on_view.call(leave.get_value());
                                                        }
                                                    >
                                                        "View"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{available_actions, LeaveAction, LeaveScope};

    #[test]
    fn managers_can_decide_pending_leaves() {
        let actions = available_actions(LeaveScope::Manager, "PENDING");
        assert_eq!(
            actions,
            vec![LeaveAction::Approve, LeaveAction::Reject, LeaveAction::View]
        );
    }

    #[test]
    fn employees_can_cancel_their_own_pending_leaves() {
        let actions = available_actions(LeaveScope::Employee, "PENDING");
        assert_eq!(actions, vec![LeaveAction::Cancel, LeaveAction::View]);
    }

    #[test]
    fn settled_leaves_are_view_only_in_both_scopes() {
        for status in ["APPROVED", "REJECTED", "CANCELLED", "ON_HOLD"] {
            assert_eq!(
                available_actions(LeaveScope::Employee, status),
                vec![LeaveAction::View]
            );
            assert_eq!(
                available_actions(LeaveScope::Manager, status),
                vec![LeaveAction::View]
            );
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_response;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employee_table_hides_the_employee_column() {
        let html = render_to_string(move || {
            let leaves = Signal::derive(|| vec![leave_response(1, "PENDING")]);
            view! {
                <LeaveTable
                    leaves=leaves
                    scope=LeaveScope::Employee
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    on_view=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    title="My Leave Requests"
                />
            }
        });
        assert!(html.contains("My Leave Requests"));
        assert!(html.contains("CASUAL LEAVE"));
        assert!(html.contains("Cancel"));
        assert!(!html.contains(">Employee<"));
    }

    #[test]
    fn manager_table_shows_decision_buttons_for_pending_rows() {
        let html = render_to_string(move || {
            let leaves = Signal::derive(|| {
                vec![leave_response(1, "PENDING"), leave_response(2, "APPROVED")]
            });
            view! {
                <LeaveTable
                    leaves=leaves
                    scope=LeaveScope::Manager
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    on_view=Callback::new(|_| {})
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                    title="Pending Requests"
                />
            }
        });
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
        assert!(html.contains("Alice Example"));
    }

    #[test]
    fn empty_table_renders_the_empty_state() {
        let html = render_to_string(move || {
            let leaves = Signal::derive(Vec::new);
            view! {
                <LeaveTable
                    leaves=leaves
                    scope=LeaveScope::Employee
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    on_view=Callback::new(|_| {})
                    title="My Leave Requests"
                />
            }
        });
        assert!(html.contains("No leave requests"));
    }
}
