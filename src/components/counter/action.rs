use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::store::AsyncPhase;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    IncrementAsync(AsyncPhase<i64>),
}

impl CounterAction {
    pub fn verb(&self) -> String {
        let name: &'static str = self.into();
        match self {
            CounterAction::IncrementAsync(phase) => format!("{name}/{}", phase.name()),
            _ => name.to_string(),
        }
    }
}
