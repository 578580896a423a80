use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::components::posts::select_posts_newest_first;
use crate::components::users::select_author_name;
use crate::environment::types::{Post, PostId, ReactionKind, UserId};
use crate::helper::{excerpt, format_number, time_ago};
use crate::state::RootState;

const EXCERPT_LENGTH: usize = 100;

/// A post prepared for display
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostViewModel {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// The first characters of `content`, for list views
    pub excerpt: String,
    pub author_id: UserId,
    pub author: String,
    pub created: DateTime<Utc>,
    pub created_human: String,
    pub reactions: Vec<ReactionViewModel>,
}

impl PartialEq for PostViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PostViewModel {}

impl PostViewModel {
    pub fn new(post: &Post, state: &RootState, now: DateTime<Utc>) -> Self {
        let reactions = ReactionKind::iter()
            .map(|kind| ReactionViewModel::new(kind, post.reaction_counts.get(kind)))
            .collect();
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: excerpt(&post.content, EXCERPT_LENGTH),
            author_id: post.author_id.clone(),
            author: select_author_name(state, &post.author_id).to_string(),
            created: post.created_at,
            created_human: time_ago(post.created_at, now),
            reactions,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReactionViewModel {
    pub kind: ReactionKind,
    pub emoji: String,
    pub count: u32,
    pub count_str: String,
}

impl ReactionViewModel {
    pub fn new(kind: ReactionKind, count: u32) -> Self {
        Self {
            kind,
            emoji: kind.emoji().to_string(),
            count,
            count_str: format_number(count as i64),
        }
    }
}

/// All posts, newest first, ready for display
pub fn feed(state: &RootState, now: DateTime<Utc>) -> Vec<PostViewModel> {
    select_posts_newest_first(state)
        .into_iter()
        .map(|post| PostViewModel::new(post, state, now))
        .collect()
}
