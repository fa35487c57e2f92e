use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки документации
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}: front matter block not found")]
    MissingFrontMatter(PathBuf),

    #[error("{path}: invalid front matter: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path}: invalid lastUpdate '{value}'")]
    LastUpdate { path: PathBuf, value: String },
}

impl DocsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocsError::Io {
            path: path.into(),
            source,
        }
    }
}
