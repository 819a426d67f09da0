//! Configuration module
//!
//! Selects the content store backend and the defaults applied by the
//! orchestration services.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::policy::TaggingPolicy;
use crate::storage_types::ContentBackend;

// Matches the one-minute deadline the HTTP handlers historically applied per request.
const OPERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub content_backend: ContentBackend,
    pub local_storage_path: Option<PathBuf>,
    /// `None` disables the per-operation deadline.
    pub operation_timeout: Option<Duration>,
    pub tagging_policy: TaggingPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl CatalogConfig {
    /// Everything in memory, nothing survives the process.
    pub fn in_memory() -> Self {
        Self {
            content_backend: ContentBackend::Memory,
            local_storage_path: None,
            operation_timeout: Some(Duration::from_secs(OPERATION_TIMEOUT_SECS)),
            tagging_policy: TaggingPolicy::BestEffort,
        }
    }

    /// Content blobs stored as files under `path`.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            content_backend: ContentBackend::Local,
            local_storage_path: Some(path.into()),
            ..Self::in_memory()
        }
    }

    pub fn with_operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn with_tagging_policy(mut self, policy: TaggingPolicy) -> Self {
        self.tagging_policy = policy;
        self
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from a variable lookup (the environment in
    /// [`CatalogConfig::from_env`]).
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_backend = match lookup("CONTENT_BACKEND") {
            Some(value) => value.parse::<ContentBackend>()?,
            None => ContentBackend::default(),
        };

        let local_storage_path = lookup("LOCAL_STORAGE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let timeout_secs = match lookup("OPERATION_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("OPERATION_TIMEOUT_SECS must be a number of seconds: {}", e)
            })?,
            None => OPERATION_TIMEOUT_SECS,
        };
        let operation_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let tagging_policy = match lookup("TAGGING_POLICY") {
            Some(value) => value.parse::<TaggingPolicy>()?,
            None => TaggingPolicy::default(),
        };

        let config = Self {
            content_backend,
            local_storage_path,
            operation_timeout,
            tagging_policy,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.content_backend == ContentBackend::Local && self.local_storage_path.is_none() {
            return Err(anyhow::anyhow!(
                "CONTENT_BACKEND=local requires LOCAL_STORAGE_PATH to be set"
            ));
        }

        Ok(())
    }
}
