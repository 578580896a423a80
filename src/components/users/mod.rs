mod reducer;

pub use reducer::{reduce, State as UsersState, UsersAction};

use tokio::task::JoinHandle;

use crate::environment::types::{User, UserId};
use crate::environment::Environment;
use crate::error::StoreError;
use crate::state::{Action, AppStore, RootState};
use crate::store::{dispatch_async, RequestState};

const UNKNOWN_AUTHOR: &str = "Unknown author";

pub fn select_all_users(state: &RootState) -> &im::Vector<User> {
    &state.users.users
}

pub fn select_user_by_id<'a>(state: &'a RootState, id: &UserId) -> Option<&'a User> {
    state.users.users.iter().find(|user| &user.id == id)
}

/// The display name for a post author
pub fn select_author_name<'a>(state: &'a RootState, id: &UserId) -> &'a str {
    select_user_by_id(state, id)
        .map(|user| user.name.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
}

pub fn select_users_status(state: &RootState) -> &RequestState {
    &state.users.fetch
}

pub fn fetch_users(
    store: &AppStore,
    environment: &Environment,
) -> Result<JoinHandle<()>, StoreError> {
    let model = environment.model.clone();
    dispatch_async(
        store,
        async move { model.users().await },
        |phase| Action::Users(UsersAction::FetchUsers(phase)),
    )
}
