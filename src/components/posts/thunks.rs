use tokio::task::JoinHandle;

use super::PostsAction;
use crate::environment::types::NewPost;
use crate::environment::Environment;
use crate::error::StoreError;
use crate::state::{Action, AppStore};
use crate::store::dispatch_async;

/// Load all posts from the backend and append them to the collection
pub fn fetch_posts(
    store: &AppStore,
    environment: &Environment,
) -> Result<JoinHandle<()>, StoreError> {
    let model = environment.model.clone();
    dispatch_async(
        store,
        async move { model.posts().await },
        |phase| Action::Posts(PostsAction::FetchPosts(phase)),
    )
}

/// Only fetch if the posts were never requested, as a list view does when
/// it first appears
pub fn fetch_posts_if_idle(
    store: &AppStore,
    environment: &Environment,
) -> Result<Option<JoinHandle<()>>, StoreError> {
    if !store.get_state().posts.fetch.status.is_idle() {
        log::debug!("posts already requested");
        return Ok(None);
    }
    fetch_posts(store, environment).map(Some)
}

/// Send a new post to the backend; the echoed post is appended once the
/// server accepted it
pub fn add_new_post(
    store: &AppStore,
    environment: &Environment,
    post: NewPost,
) -> Result<JoinHandle<()>, StoreError> {
    let model = environment.model.clone();
    dispatch_async(
        store,
        async move { model.create_post(post).await },
        |phase| Action::Posts(PostsAction::AddNewPost(phase)),
    )
}
