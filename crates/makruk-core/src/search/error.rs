//! Error types for search setup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
