use chrono::Utc;

use crate::components::{posts, users};
use crate::environment::{Config, Environment};
use crate::error::AppError;
use crate::state::create_store;
use crate::view_model;

/// Load users and posts from the configured backend and print the feed.
pub fn run() -> Result<(), AppError> {
    let config = Config::load()?;
    setup_logging(&config.log_filter);
    let environment = Environment::new(config)?;
    log::info!("using backend {}", environment.model.url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(show_feed(&environment))
}

fn setup_logging(default_filter: &str) {
    use env_logger::Env;
    use std::io::Write;
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

async fn show_feed(environment: &Environment) -> Result<(), AppError> {
    let store = create_store();
    store
        .subscribe(|state| {
            log::debug!(
                "state changed: {} posts ({}), {} users ({})",
                state.posts.posts.len(),
                state.posts.fetch.status,
                state.users.users.len(),
                state.users.fetch.status
            )
        })
        .detach();

    let users = users::fetch_users(&store, environment)?;
    let posts = posts::fetch_posts_if_idle(&store, environment)?;
    users.await?;
    if let Some(posts) = posts {
        posts.await?;
    }
    store.process_pending()?;

    let state = store.get_state();
    if let Some(error) = &users::select_users_status(&state).error {
        println!("Could not load users: {error}");
    }
    if let Some(error) = &posts::select_posts_status(&state).error {
        println!("Could not load posts: {error}");
        return Ok(());
    }

    for post in view_model::feed(&state, Utc::now()) {
        let reactions: Vec<String> = post
            .reactions
            .iter()
            .map(|r| format!("{} {}", r.emoji, r.count_str))
            .collect();
        println!("{}", post.title);
        println!("  by {} {}", post.author, post.created_human);
        println!("  {}", post.excerpt);
        println!("  {}", reactions.join("  "));
    }
    Ok(())
}
