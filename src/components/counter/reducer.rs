use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::CounterAction;
use crate::state::Action;
use crate::store::{AsyncPhase, RequestState};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub value: i64,
    /// The `incrementAsync` request
    pub request: RequestState,
}

pub fn reduce(state: &Arc<State>, action: &Action) -> Arc<State> {
    let Action::Counter(event) = action else {
        return Arc::clone(state);
    };
    log::trace!("{} {event:?}", action.kind());

    let mut next = State::clone(state);
    match event {
        CounterAction::Increment => next.value = next.value.saturating_add(1),
        CounterAction::Decrement => next.value = next.value.saturating_sub(1),
        CounterAction::IncrementByAmount(amount) => {
            next.value = next.value.saturating_add(*amount)
        }
        CounterAction::IncrementAsync(phase) => {
            if let AsyncPhase::Fulfilled { payload, .. } = phase {
                next.value = next.value.saturating_add(*payload);
            }
            next.request = RequestState::after(phase);
        }
    }
    Arc::new(next)
}
