//! Store allocation planning over a shared godown inventory.
//!
//! Pure, deterministic domain logic (no IO, no persistence). The pipeline has
//! three stages, each reading the same immutable [`AllocationSnapshot`]:
//!
//! 1. [`eligibility`]: articles in stock that a store did not receive in the
//!    prior period.
//! 2. [`allocator`]: one unit per eligible article, highest stock first, up
//!    to the store's capacity.
//! 3. [`report`] and [`statistics`]: per-store reports and cross-store
//!    totals.
//!
//! [`AllocationPlanner`] bundles the stages behind one facade.

pub mod allocator;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod percentage;
pub mod planner;
pub mod report;
pub mod sample;
pub mod snapshot;
pub mod statistics;

pub use allocator::{AllocationLine, AllocationResult, UNITS_PER_LINE, create_allocation};
pub use config::AllocationConfig;
pub use eligibility::{EligibleSet, RankedArticle, eligible_set};
pub use error::AllocationError;
pub use percentage::CapacityPercentage;
pub use planner::AllocationPlanner;
pub use report::{AllocationReport, StoreReport};
pub use snapshot::{
    AllocationSnapshot, PriorShipments, ShipmentHistory, ShipmentRecord, SnapshotInput,
    StockLevels, StoreCapacities,
};
pub use statistics::{AllocationStatistics, StoreStatistics};

pub use godown_core::{ArticleCode, DomainError, StoreName};
