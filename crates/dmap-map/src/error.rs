use std::path::PathBuf;

use thiserror::Error;

use dmap_model::RegionId;

#[derive(Debug, Error)]
pub enum MapError {
    /// A topology feature (or a click) names an id absent from the region table.
    #[error("region {id} has no entry in the region table")]
    UnknownRegion { id: RegionId },

    #[error("region {id} has no drawable geometry")]
    EmptyGeometry { id: RegionId },

    #[error("no region matches {query:?}")]
    NoSuchRegion { query: String },

    #[error("invalid map configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write markup: {message}")]
    Markup { message: String },
}

impl MapError {
    pub(crate) fn markup(error: impl std::fmt::Display) -> Self {
        Self::Markup {
            message: error.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
