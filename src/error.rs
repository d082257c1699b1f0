use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the content, config and generator layers.
///
/// Navigation never produces one of these: routing degrades instead of failing.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {context}: {source}")]
    Toml {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("remote content provider {provider} failed: {message}")]
    Remote { provider: &'static str, message: String },

    #[error("file watcher error: {0}")]
    Watch(String),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        SiteError::Json {
            context: context.into(),
            source,
        }
    }

    pub fn toml(context: impl Into<String>, source: toml::de::Error) -> Self {
        SiteError::Toml {
            context: context.into(),
            source,
        }
    }

    pub fn remote(provider: &'static str, message: impl ToString) -> Self {
        SiteError::Remote {
            provider,
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
