//! Error kinds surfaced by catalog loading, lookup, and URL construction.
//!
//! Each variant is terminal for the requested operation. Callers branch on the
//! variant (the CLI only prints it); nothing here is retried.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Required launchpad parameter that was supplied empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Parameter {
    BaseUrl,
    Client,
}

impl Parameter {
    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::BaseUrl => "Base URL",
            Parameter::Client => "SAP Client",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an app list file could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected catalog shape:\n{0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum FioriError {
    #[error("failed to load app list {}", path.display())]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },

    #[error("{0} is required and must be provided by the user")]
    MissingParameter(Parameter),

    #[error("app \"{app_name}\" not found in app list")]
    AppNotFound { app_name: String },

    #[error("app \"{app_name}\" (ID: {app_id}) does not have a Semantic Object-Action defined")]
    MissingSemanticAction { app_name: String, app_id: String },
}

impl FioriError {
    pub(crate) fn catalog_load(path: impl Into<PathBuf>, source: impl Into<LoadFailure>) -> Self {
        FioriError::CatalogLoad {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FioriError>;
