//! Backends for tests: an in-memory fake and a mock HTTP server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use bulletin::environment::types::{NewPost, Post, PostId, ReactionCounts, User, UserId};
use bulletin::environment::{Backend, Config, Environment, Model};
use bulletin::error::ApiError;
use chrono::{TimeZone, Utc};
use tokio::net::TcpListener;

pub fn post(id: &str, title: &str, user: &str) -> Post {
    Post {
        id: PostId::from(id),
        title: title.to_string(),
        content: format!("{title} content"),
        author_id: UserId::from(user),
        created_at: Utc.with_ymd_and_hms(2023, 3, 1, 9, 0, 0).unwrap(),
        reaction_counts: ReactionCounts::default(),
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
    }
}

/// Answers from queues of canned responses. An empty queue answers with
/// an empty list.
#[derive(Default)]
pub struct FakeBackend {
    pub posts: Mutex<VecDeque<Result<Vec<Post>, ApiError>>>,
    pub users: Mutex<VecDeque<Result<Vec<User>, ApiError>>>,
    pub created: Mutex<Vec<NewPost>>,
    pub calls: AtomicUsize,
}

impl FakeBackend {
    pub fn with_posts(responses: Vec<Result<Vec<Post>, ApiError>>) -> Self {
        Self {
            posts: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    pub fn with_users(mut self, responses: Vec<Result<Vec<User>, ApiError>>) -> Self {
        self.users = Mutex::new(responses.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posts.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut created = self.created.lock().unwrap();
        created.push(new_post.clone());
        Ok(Post {
            id: PostId(format!("server-{}", created.len())),
            title: new_post.title.clone(),
            content: new_post.content.clone(),
            author_id: new_post.user.clone(),
            created_at: Utc::now(),
            reaction_counts: ReactionCounts::default(),
        })
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn fetch_count(&self, amount: i64) -> Result<i64, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(amount)
    }
}

pub fn environment(backend: Arc<FakeBackend>) -> Environment {
    Environment::with_model(Model::with_backend("fake://", backend), Config::default())
}

/// Serve `app` on a random local port, returns the base URL
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{addr}/fakeApi/")
}
