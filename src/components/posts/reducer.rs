use std::sync::Arc;

use super::{PostsAction, State};
use crate::environment::types::{Post, ReactionCounts};
use crate::state::Action;
use crate::store::{AsyncPhase, RequestState};

pub fn reduce(state: &Arc<State>, action: &Action) -> Arc<State> {
    let Action::Posts(event) = action else {
        return Arc::clone(state);
    };
    log::trace!("{} {event:?}", action.kind());

    match event {
        PostsAction::PostAdded(draft) => {
            let mut next = State::clone(state);
            let id = next.fresh_id();
            next.posts.push_back(Post {
                id,
                title: draft.title.clone(),
                content: draft.content.clone(),
                author_id: draft.author_id.clone(),
                created_at: draft.created_at,
                reaction_counts: ReactionCounts::default(),
            });
            Arc::new(next)
        }
        PostsAction::PostUpdated { id, title, content } => {
            if title.is_none() && content.is_none() {
                return Arc::clone(state);
            }
            update_post(state, state.position(id), |post| {
                if let Some(title) = title {
                    post.title = title.clone();
                }
                if let Some(content) = content {
                    post.content = content.clone();
                }
            })
        }
        PostsAction::ReactionAdded { post_id, reaction } => {
            update_post(state, state.position(post_id), |post| {
                post.reaction_counts = post.reaction_counts.incremented(*reaction);
            })
        }
        PostsAction::FetchPosts(phase) => {
            let mut next = State::clone(state);
            if let AsyncPhase::Fulfilled { payload, .. } = phase {
                next.posts.extend(payload.iter().cloned());
            }
            next.fetch = RequestState::after(phase);
            Arc::new(next)
        }
        PostsAction::AddNewPost(phase) => {
            let mut next = State::clone(state);
            if let AsyncPhase::Fulfilled { payload, .. } = phase {
                next.posts.push_back(payload.clone());
            }
            next.add = RequestState::after(phase);
            Arc::new(next)
        }
    }
}

/// Replace the post at `index` with a changed copy. Unknown posts are
/// silently ignored.
fn update_post(
    state: &Arc<State>,
    index: Option<usize>,
    change: impl FnOnce(&mut Post),
) -> Arc<State> {
    let Some(index) = index else {
        return Arc::clone(state);
    };
    let mut post = state.posts[index].clone();
    change(&mut post);
    let mut next = State::clone(state);
    next.posts.set(index, post);
    Arc::new(next)
}
