use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::environment::types::User;
use crate::state::Action;
use crate::store::{AsyncPhase, RequestState};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub users: im::Vector<User>,
    pub fetch: RequestState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UsersAction {
    FetchUsers(AsyncPhase<Vec<User>>),
}

impl UsersAction {
    pub fn verb(&self) -> String {
        let name: &'static str = self.into();
        match self {
            UsersAction::FetchUsers(phase) => format!("{name}/{}", phase.name()),
        }
    }
}

pub fn reduce(state: &Arc<State>, action: &Action) -> Arc<State> {
    let Action::Users(event) = action else {
        return Arc::clone(state);
    };
    log::trace!("{} {event:?}", action.kind());

    match event {
        UsersAction::FetchUsers(phase) => {
            let mut next = State::clone(state);
            // the user list is always replaced as a whole
            if let AsyncPhase::Fulfilled { payload, .. } = phase {
                next.users = payload.iter().cloned().collect();
            }
            next.fetch = RequestState::after(phase);
            Arc::new(next)
        }
    }
}
