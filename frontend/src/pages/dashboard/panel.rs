use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::decision_dialog::{Decision, DecisionDialog};
use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::components::leave_detail::LeaveDetailModal;
use crate::components::leave_table::{LeaveScope, LeaveTable};
use crate::pages::dashboard::{
    components::{BalanceSection, LeaveApplyForm, StatsSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use crate::pages::manager_pending::view_model::{use_manager_queue_view_model, ManagerQueue};
use crate::state::auth::use_auth;
use leptos::*;

/// Role is resolved once here; everything below renders one fixed
/// configuration instead of re-checking the role per component.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_manager = Signal::derive(move || auth.get().is_manager());

    view! {
        <DashboardFrame>
            <Show when=move || is_manager.get() fallback=EmployeeDashboard>
                <ManagerDashboard />
            </Show>
        </DashboardFrame>
    }
}

#[component]
fn EmployeeDashboard() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let leaves = vm.leaves();
    let balance = vm.balance();
    let stats = vm.stats();
    let loading = vm.loading();
    let load_error = vm.load_error();
    let list_message = vm.list_message;
    let pending_cancel = vm.pending_cancel;

    let on_submit = {
        let vm = vm;
        Callback::new(move |_| vm.submit())
    };
    let confirm_cancel = {
        let vm = vm;
        Callback::new(move |_| vm.confirm_cancel())
    };
    let dismiss_cancel = Callback::new(move |_| pending_cancel.set(None));

    let cancel_prompt_open = Signal::derive(move || pending_cancel.get().is_some());
    let cancel_prompt_message = Signal::derive(move || {
        pending_cancel
            .get()
            .map(|leave| {
                format!(
                    "Cancel the {} request from {} to {}?",
                    crate::components::status::format_leave_type(&leave.leave_type),
                    leave.start_date,
                    leave.end_date
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <button class="inline-flex items-center justify-center rounded-md px-3 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated" on:click=move |_| vm.refresh()>
                    "Refresh"
                </button>
            </div>
            <Show when=move || list_message.get().error.is_some()>
                <ErrorMessage message={list_message.get().error.map(|err| err.error).unwrap_or_default()} />
            </Show>
            <Show when=move || list_message.get().success.is_some()>
                <SuccessMessage message={list_message.get().success.clone().unwrap_or_default()} />
            </Show>
            <StatsSection stats=stats />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <LeaveTable
                        leaves=leaves
                        scope=LeaveScope::Employee
                        loading=loading
                        error=load_error
                        on_view=vm.on_view()
                        on_cancel=vm.on_request_cancel()
                        title="My Leave Requests"
                    />
                </div>
                <div class="space-y-6">
                    <BalanceSection balance=balance />
                    <LeaveApplyForm
                        state=vm.form
                        message=vm.form_message
                        on_submit=on_submit
                        pending=vm.mutating()
                    />
                </div>
            </div>
        </div>
        <LeaveDetailModal selected=vm.selected_leave />
        <ConfirmDialog
            is_open=cancel_prompt_open
            title="Cancel leave request"
            message=cancel_prompt_message
            on_confirm=confirm_cancel
            on_cancel=dismiss_cancel
            confirm_label="Cancel request"
            confirm_disabled=vm.cancel_action.pending()
            destructive=true
        />
    }
}

#[component]
fn ManagerDashboard() -> impl IntoView {
    let vm = use_manager_queue_view_model(ManagerQueue::Team);
    let leaves = vm.leaves();
    let stats = vm.stats();
    let loading = vm.loading();
    let load_error = vm.load_error();
    let queue_message = vm.queue_message;
    let decision_prompt = vm.decision_prompt;

    let dismiss_prompt = Callback::new(move |_| decision_prompt.set(None));
    let prompt = Signal::derive(move || decision_prompt.get());

    view! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <button class="inline-flex items-center justify-center rounded-md px-3 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated" on:click=move |_| vm.refresh()>
                    "Refresh"
                </button>
            </div>
            <Show when=move || queue_message.get().error.is_some()>
                <ErrorMessage message={queue_message.get().error.map(|err| err.error).unwrap_or_default()} />
            </Show>
            <Show when=move || queue_message.get().success.is_some()>
                <SuccessMessage message={queue_message.get().success.clone().unwrap_or_default()} />
            </Show>
            <StatsSection stats=stats />
            <LeaveTable
                leaves=leaves
                scope=LeaveScope::Manager
                loading=loading
                error=load_error
                on_view=vm.on_view()
                on_approve=vm.on_decide(Decision::Approve)
                on_reject=vm.on_decide(Decision::Reject)
                title="Team Leave Requests"
            />
        </div>
        <LeaveDetailModal selected=vm.selected_leave />
        <DecisionDialog
            prompt=prompt
            on_submit=vm.on_submit_decision()
            on_dismiss=dismiss_prompt
            submit_disabled=vm.decide_action.pending()
        />
    }
}
