pub mod config;
pub mod model;
pub mod types;

pub use config::Config;
pub use model::{Backend, HttpBackend, Model};

use crate::error::ConfigError;

/// Everything the async operations need from the outside world. Built once
/// at startup and passed down explicitly.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub config: Config,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("api_url", &self.config.api_url)
            .finish()
    }
}

impl Environment {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let model = Model::new(config.api_base()?);
        Ok(Self { model, config })
    }

    pub fn with_model(model: Model, config: Config) -> Self {
        Self { model, config }
    }
}
