use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::environment::types::{Post, PostId, ReactionKind, UserId};
use crate::store::AsyncPhase;

/// What the user typed into the new post form, stamped with the time it
/// was submitted. The id is assigned by the reducer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PostsAction {
    PostAdded(PostDraft),
    /// Overwrites only the fields that are `Some`
    PostUpdated {
        id: PostId,
        title: Option<String>,
        content: Option<String>,
    },
    ReactionAdded {
        #[serde(rename = "postId")]
        post_id: PostId,
        reaction: ReactionKind,
    },
    FetchPosts(AsyncPhase<Vec<Post>>),
    AddNewPost(AsyncPhase<Post>),
}

impl PostsAction {
    /// A `postAdded` event stamped with the current time
    pub fn post_added(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: UserId,
    ) -> Self {
        Self::post_added_at(title, content, author_id, Utc::now())
    }

    pub fn post_added_at(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        PostsAction::PostAdded(PostDraft {
            title: title.into(),
            content: content.into(),
            author_id,
            created_at,
        })
    }

    pub fn verb(&self) -> String {
        let name: &'static str = self.into();
        match self {
            PostsAction::FetchPosts(phase) => format!("{name}/{}", phase.name()),
            PostsAction::AddNewPost(phase) => format!("{name}/{}", phase.name()),
            _ => name.to_string(),
        }
    }
}
