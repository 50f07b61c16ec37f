use crate::api::{ApiClient, ApiError, LeaveDecisionRequest, LeaveResponse};
use crate::components::decision_dialog::{Decision, DecisionPrompt};
use crate::pages::dashboard::utils::{summarize, LeaveStats, MessageState};
use crate::pages::manager_pending::repository::ManagerRepository;
use crate::state::auth::use_session;
use leptos::*;

/// Which slice of the team's leave requests the view model loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerQueue {
    Team,
    Pending,
}

#[derive(Clone)]
pub struct DecisionPayload {
    pub id: i64,
    pub request: LeaveDecisionRequest,
}

#[derive(Clone, Copy)]
pub struct ManagerQueueViewModel {
    pub queue: ManagerQueue,
    pub queue_message: RwSignal<MessageState>,
    pub selected_leave: RwSignal<Option<LeaveResponse>>,
    pub decision_prompt: RwSignal<Option<DecisionPrompt>>,
    pub leaves_resource: Resource<u32, Result<Vec<LeaveResponse>, ApiError>>,
    pub decide_action: Action<DecisionPayload, Result<(), ApiError>>,
    reload: RwSignal<u32>,
}

fn apply_optional_decide_action_result(
    result: Option<Result<(), ApiError>>,
    queue_message: RwSignal<MessageState>,
    decision_prompt: RwSignal<Option<DecisionPrompt>>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        decision_prompt.set(None);
        match result {
            Ok(_) => {
                queue_message.update(|msg| msg.set_success("Decision recorded."));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => queue_message.update(|msg| msg.set_error(err)),
        }
    }
}

impl ManagerQueueViewModel {
    pub fn new(queue: ManagerQueue) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()));
        let repository = store_value(ManagerRepository::new(api));

        let queue_message = create_rw_signal(MessageState::default());
        let selected_leave = create_rw_signal(None::<LeaveResponse>);
        let decision_prompt = create_rw_signal(None::<DecisionPrompt>);
        let reload = create_rw_signal(0u32);

        let leaves_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = match queue {
                        ManagerQueue::Team => repo.team_leaves().await,
                        ManagerQueue::Pending => repo.pending_leaves().await,
                    };
                    if let Err(err) = &result {
                        log::error!("failed to load manager queue: {err}");
                    }
                    result
                }
            },
        );

        let decide_action = create_action(move |payload: &DecisionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.decide_leave(payload.id, payload.request).await }
        });

        {
            create_effect(move |_| {
                apply_optional_decide_action_result(
                    decide_action.value().get(),
                    queue_message,
                    decision_prompt,
                    reload,
                );
            });
        }

        Self {
            queue,
            queue_message,
            selected_leave,
            decision_prompt,
            leaves_resource,
            decide_action,
            reload,
        }
    }

    pub fn leaves(&self) -> Signal<Vec<LeaveResponse>> {
        let resource = self.leaves_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn stats(&self) -> Signal<LeaveStats> {
        let leaves = self.leaves();
        Signal::derive(move || leaves.with(|leaves| summarize(leaves)))
    }

    pub fn loading(&self) -> Signal<bool> {
        let resource = self.leaves_resource;
        Signal::derive(move || resource.get().is_none())
    }

    pub fn load_error(&self) -> Signal<Option<String>> {
        let resource = self.leaves_resource;
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

    pub fn on_view(&self) -> Callback<LeaveResponse> {
        let selected_leave = self.selected_leave;
        Callback::new(move |leave: LeaveResponse| selected_leave.set(Some(leave)))
    }

    pub fn on_decide(&self, decision: Decision) -> Callback<LeaveResponse> {
        let decision_prompt = self.decision_prompt;
        let queue_message = self.queue_message;
        Callback::new(move |leave: LeaveResponse| {
            queue_message.update(|msg| msg.clear());
            decision_prompt.set(Some(DecisionPrompt {
                leave_id: leave.id,
                employee_name: leave.user_name,
                decision,
            }));
        })
    }

    pub fn on_submit_decision(&self) -> Callback<(i64, LeaveDecisionRequest)> {
        let decide_action = self.decide_action;
        Callback::new(move |(id, request): (i64, LeaveDecisionRequest)| {
            if decide_action.pending().get_untracked() {
                return;
            }
            decide_action.dispatch(DecisionPayload { id, request });
        })
    }
}

/// Reuses a queue view model already provided higher in the tree, as long
/// as it loads the same queue.
pub fn use_manager_queue_view_model(queue: ManagerQueue) -> ManagerQueueViewModel {
    match use_context::<ManagerQueueViewModel>() {
        Some(vm) if vm.queue == queue => vm,
        _ => {
            let vm = ManagerQueueViewModel::new(queue);
            provide_context(vm);
            vm
        }
    }
}
