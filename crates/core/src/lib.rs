//! `godown-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the identifiers shared by every stage of the allocation pipeline and the
//! base error model.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ArticleCode, StoreName};
