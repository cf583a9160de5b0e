//! Error types for transaction building

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    #[error("Invalid destination: {reason}")]
    InvalidDestination { reason: String },

    #[error("Failed to build transaction: {message}")]
    BuildFailed { message: String },

    #[error("Fee estimation failed: {message}")]
    FeeEstimation { message: String },
}
