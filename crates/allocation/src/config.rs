//! Allocation configuration.

use std::num::NonZeroUsize;

use godown_core::{DomainError, DomainResult};

/// Environment variable holding the number of report worker threads.
pub const WORKERS_ENV: &str = "GODOWN_ALLOCATION_WORKERS";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocationConfig {
    /// Threads used for the per-store loop when building a report.
    /// One means sequential.
    pub workers: NonZeroUsize,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
        }
    }
}

impl AllocationConfig {
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Read `GODOWN_ALLOCATION_WORKERS`; unset means the default.
    pub fn from_env() -> DomainResult<Self> {
        match std::env::var(WORKERS_ENV) {
            Ok(raw) => Self::parse_workers(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(DomainError::validation(format!("{WORKERS_ENV}: {e}"))),
        }
    }

    fn parse_workers(raw: &str) -> DomainResult<Self> {
        let workers = raw
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|e| DomainError::validation(format!("{WORKERS_ENV}={raw:?}: {e}")))?;
        Ok(Self { workers })
    }
}
