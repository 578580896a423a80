use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::types::{NewPost, Post, User};
use crate::error::ApiError;

/// How long the simulated counter endpoint takes to answer
const FETCH_COUNT_DELAY: Duration = Duration::from_millis(500);

/// The REST backend the feed talks to.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET posts`
    async fn posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST posts`, returns the post as stored by the server
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError>;

    /// `GET users`
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// Echoes `amount` after a short delay
    async fn fetch_count(&self, amount: i64) -> Result<i64, ApiError> {
        tokio::time::sleep(FETCH_COUNT_DELAY).await;
        Ok(amount)
    }
}

pub struct HttpBackend {
    base: Url,
    client: reqwest::Client,
}

impl HttpBackend {
    /// `base` should end with a slash, otherwise its last path segment is
    /// replaced when joining endpoints.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("posts")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        let response = self
            .client
            .post(self.endpoint("posts")?)
            .json(post)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("users")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Cheap to clone handle on the backend; logs every call.
#[derive(Clone)]
pub struct Model {
    pub url: String,
    backend: Arc<dyn Backend>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url).finish()
    }
}

impl Model {
    pub fn new(base: Url) -> Self {
        let url = base.to_string();
        Self {
            url,
            backend: Arc::new(HttpBackend::new(base)),
        }
    }

    pub fn with_backend(url: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            url: url.into(),
            backend,
        }
    }

    pub async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        log::trace!("Posts");
        let posts = self.backend.posts().await.log_error("posts")?;
        log::trace!("posts arrived {}", posts.len());
        Ok(posts)
    }

    pub async fn create_post(&self, post: NewPost) -> Result<Post, ApiError> {
        log::trace!("Create Post");
        self.backend
            .create_post(&post)
            .await
            .log_error("create_post")
    }

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        log::trace!("Users");
        self.backend.users().await.log_error("users")
    }

    pub async fn fetch_count(&self, amount: i64) -> Result<i64, ApiError> {
        log::trace!("Fetch Count");
        self.backend
            .fetch_count(amount)
            .await
            .log_error("fetch_count")
    }
}

trait ResultExt {
    fn log_error(self, call: &'static str) -> Self;
}

impl<T> ResultExt for Result<T, ApiError> {
    fn log_error(self, call: &'static str) -> Self {
        if let Err(ref e) = self {
            log::error!("API Error: {call} {e}");
        }
        self
    }
}
