//! The application snapshot and the root action.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::components::counter::{self, CounterAction, CounterState};
use crate::components::posts::{self, PostsAction, PostsState};
use crate::components::users::{self, UsersAction, UsersState};
use crate::store::Store;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub counter: Arc<CounterState>,
    pub posts: Arc<PostsState>,
    pub users: Arc<UsersState>,
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "event", rename_all = "camelCase")]
pub enum Action {
    Counter(CounterAction),
    Posts(PostsAction),
    Users(UsersAction),
}

impl Action {
    /// Namespaced kind, e.g. `posts/reactionAdded` or
    /// `users/fetchUsers/fulfilled`
    pub fn kind(&self) -> String {
        match self {
            Action::Counter(action) => format!("counter/{}", action.verb()),
            Action::Posts(action) => format!("posts/{}", action.verb()),
            Action::Users(action) => format!("users/{}", action.verb()),
        }
    }
}

crate::combine_reducers! {
    /// The root reducer over all sections
    pub fn reduce(RootState, Action) {
        counter => counter::reduce,
        posts => posts::reduce,
        users => users::reduce,
    }
}

pub type AppStore = Store<RootState, Action>;

/// A store with an empty snapshot
pub fn create_store() -> AppStore {
    Store::new(RootState::default(), reduce)
}
