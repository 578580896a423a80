use serde::{Deserialize, Serialize};

use crate::environment::types::{Post, PostId};
use crate::store::RequestState;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub posts: im::Vector<Post>,
    /// The `fetchPosts` request
    pub fetch: RequestState,
    /// The `addNewPost` request
    pub add: RequestState,
    /// Last number handed out for a locally created post
    pub last_local_id: u64,
}

impl State {
    pub fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|post| &post.id == id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.position(id).is_some()
    }

    /// An id that no post in the collection has yet
    pub(super) fn fresh_id(&mut self) -> PostId {
        loop {
            self.last_local_id += 1;
            let candidate = PostId(format!("local-{}", self.last_local_id));
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
