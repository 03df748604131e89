use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the engine's flow operations.
#[derive(Error, Debug)]
pub enum FlowError {
    /// No instance, or more than one, matched the identifier.
    #[error("Expected exactly one flow instance with id '{id}', found {matches}")]
    NotFound { id: Uuid, matches: usize },

    #[error("Flow '{id}' is not a template and cannot be instantiated")]
    InvalidTemplate { id: Uuid },

    #[error("Asset provisioning failed: {0}")]
    Provisioning(#[from] ProvisioningError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by a persistence store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("A flow with id '{0}' is already stored")]
    DuplicateId(Uuid),

    #[error("No stored flow with id '{0}'")]
    Missing(Uuid),

    #[error("Store file '{path}' could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store snapshot is unreadable: {0}")]
    Snapshot(String),
}

/// Errors raised while copying template assets into a new flow's namespace.
#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error("Template asset directory '{0}' does not exist")]
    SourceMissing(PathBuf),

    #[error("Could not copy asset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Rejected(String),
}
