mod action;
mod reducer;
mod selectors;
mod state;
mod thunks;

pub use action::{PostDraft, PostsAction};
pub use reducer::reduce;
pub use selectors::*;
pub use state::State;
pub use thunks::{add_new_post, fetch_posts, fetch_posts_if_idle};

pub type PostsState = State;
