use crate::environment::types::{Post, PostId, UserId};
use crate::state::RootState;
use crate::store::RequestState;

pub fn select_all_posts(state: &RootState) -> &im::Vector<Post> {
    &state.posts.posts
}

pub fn select_post_by_id<'a>(state: &'a RootState, id: &PostId) -> Option<&'a Post> {
    state.posts.posts.iter().find(|post| &post.id == id)
}

pub fn select_posts_by_user<'a>(state: &'a RootState, user: &UserId) -> Vec<&'a Post> {
    state
        .posts
        .posts
        .iter()
        .filter(|post| &post.author_id == user)
        .collect()
}

/// Newest first. Posts with the same timestamp keep their insertion order.
pub fn select_posts_newest_first(state: &RootState) -> Vec<&Post> {
    let mut posts: Vec<&Post> = state.posts.posts.iter().collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

pub fn select_posts_status(state: &RootState) -> &RequestState {
    &state.posts.fetch
}

pub fn select_add_post_status(state: &RootState) -> &RequestState {
    &state.posts.add
}

/// Whether the new post form may be submitted
pub fn can_save_post(
    title: &str,
    content: &str,
    author: Option<&UserId>,
    add_request: &RequestState,
) -> bool {
    let author_set = author.map_or(false, |a| !a.0.is_empty());
    !title.trim().is_empty()
        && !content.trim().is_empty()
        && author_set
        && !add_request.status.is_loading()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::posts::PostsAction;
    use crate::state::{reduce, Action};
    use crate::store::RequestStatus;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn feed() -> Arc<RootState> {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut state = Arc::new(RootState::default());
        for (i, (title, user)) in [("old", "u1"), ("newest", "u2"), ("middle", "u1")]
            .into_iter()
            .enumerate()
        {
            let offset = match title {
                "old" => 0,
                "newest" => 10,
                _ => 5,
            };
            let action = PostsAction::post_added_at(
                title,
                format!("content {i}"),
                UserId::from(user),
                start + Duration::minutes(offset),
            );
            state = reduce(&state, &Action::Posts(action));
        }
        state
    }

    #[test]
    fn test_by_id_and_user() {
        let state = feed();
        let first = select_all_posts(&state)[0].clone();
        assert_eq!(select_post_by_id(&state, &first.id), Some(&first));
        assert_eq!(select_post_by_id(&state, &PostId::from("missing")), None);

        let titles: Vec<_> = select_posts_by_user(&state, &UserId::from("u1"))
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["old", "middle"]);
        assert!(select_posts_by_user(&state, &UserId::from("u9")).is_empty());
    }

    #[test]
    fn test_newest_first() {
        let state = feed();
        let titles: Vec<_> = select_posts_newest_first(&state)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["newest", "middle", "old"]);
        // the stored order is untouched
        assert_eq!(select_all_posts(&state)[0].title, "old");
    }

    #[test]
    fn test_can_save_post() {
        let idle = RequestState::default();
        let loading = RequestState {
            status: RequestStatus::Loading,
            error: None,
        };
        let user = UserId::from("u1");
        assert!(can_save_post("T", "C", Some(&user), &idle));
        assert!(!can_save_post(" ", "C", Some(&user), &idle));
        assert!(!can_save_post("T", "", Some(&user), &idle));
        assert!(!can_save_post("T", "C", None, &idle));
        assert!(!can_save_post("T", "C", Some(&user), &loading));
    }
}
