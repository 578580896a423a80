pub mod counter;
pub mod posts;
pub mod users;
