//! Allocation error model.

use thiserror::Error;

use godown_core::{ArticleCode, DomainError, StoreName};

/// Failure surfaced by the allocation pipeline.
///
/// All failures are deterministic: retrying with the same snapshot yields the
/// same error, so callers fix their input rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The requested store has no entry in the capacity table.
    #[error("unknown store: {0}")]
    InvalidStore(StoreName),

    /// A stock level was negative, which points at corrupted upstream data.
    #[error("negative stock quantity {quantity} for article {article}")]
    NegativeQuantity { article: ArticleCode, quantity: i64 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
