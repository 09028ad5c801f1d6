use std::io;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open sales file [{path}]: {source}")]
    Open {
        path: String,
        source: io::Error
    },
    #[error("Sales file [{path}] has no header row")]
    MissingHeader {
        path: String
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV reader task failed: {0}")]
    Ingestion(#[from] JoinError)
}
