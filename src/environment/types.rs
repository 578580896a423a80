use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

// Backend entities

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId(value.to_string())
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(rename = "user", alias = "authorId")]
    pub author_id: UserId,
    #[serde(rename = "date", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "reactions", alias = "reactionCounts", default)]
    pub reaction_counts: ReactionCounts,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Body of `POST posts`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user: UserId,
}

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    Hooray,
    Heart,
    Rocket,
    Eyes,
}

impl ReactionKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::ThumbsUp => "👍",
            ReactionKind::Hooray => "🎉",
            ReactionKind::Heart => "❤️",
            ReactionKind::Rocket => "🚀",
            ReactionKind::Eyes => "👀",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionCounts {
    pub thumbs_up: u32,
    pub hooray: u32,
    pub heart: u32,
    pub rocket: u32,
    pub eyes: u32,
}

impl ReactionCounts {
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::Hooray => self.hooray,
            ReactionKind::Heart => self.heart,
            ReactionKind::Rocket => self.rocket,
            ReactionKind::Eyes => self.eyes,
        }
    }

    /// A copy with `kind` bumped by one
    pub fn incremented(&self, kind: ReactionKind) -> Self {
        let mut next = *self;
        let counter = match kind {
            ReactionKind::ThumbsUp => &mut next.thumbs_up,
            ReactionKind::Hooray => &mut next.hooray,
            ReactionKind::Heart => &mut next.heart,
            ReactionKind::Rocket => &mut next.rocket,
            ReactionKind::Eyes => &mut next.eyes,
        };
        *counter = counter.saturating_add(1);
        next
    }
}
