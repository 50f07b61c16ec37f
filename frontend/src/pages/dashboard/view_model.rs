use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveBalanceResponse, LeaveResponse};
use crate::pages::dashboard::{
    repository::{EmployeeOverview, LeaveRepository},
    utils::{summarize, LeaveFormState, LeaveStats, MessageState},
};
use crate::state::auth::use_session;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub form: LeaveFormState,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub selected_leave: RwSignal<Option<LeaveResponse>>,
    pub pending_cancel: RwSignal<Option<LeaveResponse>>,
    pub overview_resource: Resource<u32, Result<EmployeeOverview, ApiError>>,
    pub apply_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
    pub cancel_action: Action<i64, Result<(), ApiError>>,
    reload: RwSignal<u32>,
}

fn apply_optional_apply_action_result(
    result: Option<Result<(), ApiError>>,
    form_message: RwSignal<MessageState>,
    form: LeaveFormState,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                form_message.update(|msg| msg.set_success("Leave request submitted."));
                form.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => form_message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_optional_cancel_action_result(
    result: Option<Result<(), ApiError>>,
    list_message: RwSignal<MessageState>,
    pending_cancel: RwSignal<Option<LeaveResponse>>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        pending_cancel.set(None);
        match result {
            Ok(_) => {
                list_message.update(|msg| msg.set_success("Leave request cancelled."));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => list_message.update(|msg| msg.set_error(err)),
        }
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()));
        let repository = store_value(LeaveRepository::new(api));

        let form = LeaveFormState::default();
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let selected_leave = create_rw_signal(None::<LeaveResponse>);
        let pending_cancel = create_rw_signal(None::<LeaveResponse>);
        let reload = create_rw_signal(0u32);

        let overview_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.employee_overview().await;
                    if let Err(err) = &result {
                        log::error!("failed to load leave overview: {err}");
                    }
                    result
                }
            },
        );

        let apply_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_leave(payload).await }
        });

        let cancel_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.cancel_leave(id).await }
        });

        {
            create_effect(move |_| {
                apply_optional_apply_action_result(
                    apply_action.value().get(),
                    form_message,
                    form,
                    reload,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_optional_cancel_action_result(
                    cancel_action.value().get(),
                    list_message,
                    pending_cancel,
                    reload,
                );
            });
        }

        Self {
            form,
            form_message,
            list_message,
            selected_leave,
            pending_cancel,
            overview_resource,
            apply_action,
            cancel_action,
            reload,
        }
    }

    pub fn leaves(&self) -> Signal<Vec<LeaveResponse>> {
        let resource = self.overview_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .map(|overview| overview.leaves)
                .unwrap_or_default()
        })
    }

    pub fn balance(&self) -> Signal<Option<LeaveBalanceResponse>> {
        let resource = self.overview_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .map(|overview| overview.balance)
        })
    }

    pub fn stats(&self) -> Signal<LeaveStats> {
        let leaves = self.leaves();
        Signal::derive(move || leaves.with(|leaves| summarize(leaves)))
    }

    pub fn loading(&self) -> Signal<bool> {
        let resource = self.overview_resource;
        Signal::derive(move || resource.get().is_none())
    }

    pub fn load_error(&self) -> Signal<Option<String>> {
        let resource = self.overview_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.err())
                .map(String::from)
        })
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    /// True while either mutation is in flight; submits are ignored then.
    pub fn mutating(&self) -> Signal<bool> {
        let apply_pending = self.apply_action.pending();
        let cancel_pending = self.cancel_action.pending();
        Signal::derive(move || apply_pending.get() || cancel_pending.get())
    }

    pub fn on_view(&self) -> Callback<LeaveResponse> {
        let selected_leave = self.selected_leave;
        Callback::new(move |leave: LeaveResponse| selected_leave.set(Some(leave)))
    }

    pub fn on_request_cancel(&self) -> Callback<LeaveResponse> {
        let pending_cancel = self.pending_cancel;
        let list_message = self.list_message;
        Callback::new(move |leave: LeaveResponse| {
            list_message.update(|msg| msg.clear());
            pending_cancel.set(Some(leave));
        })
    }

    pub fn confirm_cancel(&self) {
        if self.cancel_action.pending().get_untracked() {
            return;
        }
        if let Some(leave) = self.pending_cancel.get_untracked() {
            self.cancel_action.dispatch(leave.id);
        }
    }

    pub fn submit(&self) {
        if self.apply_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.form_message.update(|msg| msg.clear());
                self.apply_action.dispatch(payload);
            }
            Err(err) => self.form_message.update(|msg| msg.set_error(err)),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::repository::EmployeeOverview;
    use crate::session::SessionContext;
    use crate::test_support::helpers::{leave_balance, leave_response, session_with_token};
    use crate::test_support::ssr::{with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/leaves");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/leaves/balance");
            then.status(200).json_body(json!({
                "totalBalance": 20.0,
                "usedLeave": 2.0,
                "remainingBalance": 18.0,
                "pendingRequests": 0
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/leaves");
            then.status(200).json_body(json!({
                "id": 1,
                "userId": 7,
                "userName": "Alice Example",
                "startDate": "2026-09-01",
                "endDate": "2026-09-03",
                "numberOfDays": 3,
                "leaveType": "CASUAL_LEAVE",
                "reason": null,
                "status": "PENDING"
            }));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employee/leaves/1");
            then.status(200).json_body(json!({ "message": "cancelled" }));
        });
        server
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..100 {
            if condition() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        false
    }

    fn provide_client(server: &MockServer) {
        provide_context(ApiClient::new_with_base_url(
            server.url("/api"),
            session_with_token(),
        ));
    }

    #[test]
    fn derived_signals_follow_the_overview_resource() {
        with_runtime(|| {
            let server = mock_server();
            provide_client(&server);
            leptos_reactive::suppress_resource_load(true);
            let vm = DashboardViewModel::new();
            vm.overview_resource.set(Ok(EmployeeOverview {
                leaves: vec![
                    leave_response(1, "PENDING"),
                    leave_response(2, "APPROVED"),
                    leave_response(3, "REJECTED"),
                ],
                balance: leave_balance(),
            }));

            assert_eq!(vm.leaves().get().len(), 3);
            let stats = vm.stats().get();
            assert_eq!(stats.pending, 1);
            assert_eq!(stats.approved, 1);
            assert_eq!(stats.rejected, 1);
            assert_eq!(
                vm.balance().get().map(|b| b.remaining_balance),
                Some(18.0)
            );
            assert!(!vm.loading().get());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn invalid_form_input_never_dispatches_the_apply_action() {
        with_runtime(|| {
            let server = mock_server();
            provide_client(&server);
            leptos_reactive::suppress_resource_load(true);
            let vm = DashboardViewModel::new();
            vm.form.start_signal().set("2026-09-10".into());
            vm.form.end_signal().set("2026-09-05".into());
            vm.submit();
            assert!(vm.apply_action.value().get().is_none());
            assert_eq!(
                vm.form_message.get().error.map(|err| err.error),
                Some("End date must be after start date".into())
            );
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn action_results_update_messages_and_trigger_a_reload() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            let form_message = create_rw_signal(MessageState::default());
            let list_message = create_rw_signal(MessageState::default());
            let pending_cancel = create_rw_signal(Some(leave_response(1, "PENDING")));
            let reload = create_rw_signal(0u32);

            apply_optional_apply_action_result(Some(Ok(())), form_message, form, reload);
            assert_eq!(
                form_message.get().success.as_deref(),
                Some("Leave request submitted.")
            );
            assert_eq!(reload.get(), 1);

            apply_optional_cancel_action_result(
                Some(Err(ApiError::request_failed("Leave request not found"))),
                list_message,
                pending_cancel,
                reload,
            );
            assert!(pending_cancel.get().is_none());
            assert!(list_message.get().error.is_some());
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn apply_and_cancel_actions_resolve_against_the_backend() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            provide_client(&server);
            let vm = DashboardViewModel::new();

            vm.form.start_signal().set("2026-09-01".into());
            vm.form.end_signal().set("2026-09-03".into());
            vm.submit();
            assert!(
                wait_until(|| vm.apply_action.value().get().is_some()).await,
                "apply action should complete"
            );
            assert!(matches!(vm.apply_action.value().get(), Some(Ok(()))));

            vm.on_request_cancel().call(leave_response(1, "PENDING"));
            assert!(vm.pending_cancel.get().is_some());
            vm.confirm_cancel();
            assert!(
                wait_until(|| vm.cancel_action.value().get().is_some()).await,
                "cancel action should complete"
            );
            assert!(matches!(vm.cancel_action.value().get(), Some(Ok(()))));

            runtime.dispose();
        });
    }

    #[test]
    fn pending_count_increments_after_apply_and_refresh() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            let mut empty_leaves = server.mock(|when, then| {
                when.method(GET).path("/api/employee/leaves");
                then.status(200).json_body(json!([]));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/employee/leaves/balance");
                then.status(200).json_body(json!({
                    "totalBalance": 20.0,
                    "usedLeave": 2.0,
                    "remainingBalance": 18.0,
                    "pendingRequests": 0
                }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/employee/leaves");
                then.status(200)
                    .json_body_obj(&leave_response(5, "PENDING"));
            });

            provide_client(&server);
            let vm = DashboardViewModel::new();
            assert!(
                wait_until(|| vm.overview_resource.get().is_some()).await,
                "initial overview should settle"
            );
            assert_eq!(vm.stats().get().pending, 0);

            vm.form.start_signal().set("2026-09-01".into());
            vm.form.end_signal().set("2026-09-03".into());
            vm.submit();
            assert!(
                wait_until(|| vm.apply_action.value().get().is_some()).await,
                "apply action should complete"
            );

            // The backend now reports the freshly created request.
            empty_leaves.delete();
            server.mock(|when, then| {
                when.method(GET).path("/api/employee/leaves");
                then.status(200)
                    .json_body_obj(&vec![leave_response(5, "PENDING")]);
            });

            vm.refresh();
            assert!(
                wait_until(|| vm.stats().get().pending == 1).await,
                "pending count should increment after the refresh"
            );

            runtime.dispose();
        });
    }

    #[test]
    fn view_model_is_shared_through_context() {
        with_runtime(|| {
            let server = mock_server();
            provide_context(ApiClient::new_with_base_url(
                server.url("/api"),
                SessionContext::new(),
            ));
            leptos_reactive::suppress_resource_load(true);
            let first = use_dashboard_view_model();
            let second = use_dashboard_view_model();
            first.list_message.update(|msg| msg.set_success("shared"));
            assert_eq!(second.list_message.get().success.as_deref(), Some("shared"));
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
