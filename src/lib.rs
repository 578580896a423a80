//! State core for a small counter and social feed client.
//!
//! All application state lives in one [`Store`](store::Store). Features own
//! a section of the snapshot and a pure reducer for it; async operations
//! against the REST backend report back through pending, fulfilled and
//! rejected actions.

mod app;
pub mod components;
pub mod environment;
pub mod error;
mod helper;
pub mod state;
pub mod store;
pub mod view_model;

pub use app::run;
pub use helper::{excerpt, time_ago};
pub use state::{create_store, reduce, Action, AppStore, RootState};
