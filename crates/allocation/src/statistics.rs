//! Cross-store statistics derived from an allocation report.

use std::collections::BTreeMap;

use serde::Serialize;

use godown_core::{DomainError, StoreName};

use crate::error::AllocationError;
use crate::percentage::CapacityPercentage;
use crate::report::AllocationReport;
use crate::snapshot::AllocationSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatistics {
    pub capacity_utilization: f64,
    /// Distinct articles allocated. Equal to `total_articles` since every
    /// line carries one unit.
    pub unique_articles: usize,
    pub total_articles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationStatistics {
    pub total_unique_articles_in_godown: usize,
    pub total_stock_in_godown: u64,
    pub store_statistics: BTreeMap<StoreName, StoreStatistics>,
    pub total_allocated: u64,
    pub total_capacity: u64,
    pub overall_utilization: f64,
}

impl AllocationStatistics {
    /// Summarise an already built report. No allocation is recomputed here.
    ///
    /// The report must have been built from `snapshot`: every store must be
    /// present in it with the same capacity, and each store's line count must
    /// match its allocated units. Anything else is an `InvariantViolation`.
    pub fn from_report(
        snapshot: &AllocationSnapshot,
        report: &AllocationReport,
    ) -> Result<Self, AllocationError> {
        if report.len() != snapshot.store_count() {
            return Err(DomainError::invariant(format!(
                "report covers {} stores, snapshot has {}",
                report.len(),
                snapshot.store_count()
            ))
            .into());
        }

        let mut store_statistics = BTreeMap::new();
        let mut total_allocated: u64 = 0;
        let mut total_capacity: u64 = 0;

        for (store, store_report) in report.iter() {
            let capacity = snapshot.capacity(store).map_err(|_| {
                DomainError::invariant(format!("report store {store} is not in the snapshot"))
            })?;
            if capacity != store_report.max_capacity {
                return Err(DomainError::invariant(format!(
                    "{store}: report capacity {} differs from snapshot capacity {capacity}",
                    store_report.max_capacity
                ))
                .into());
            }
            if store_report.allocation.len() != store_report.total_allocated as usize {
                return Err(DomainError::invariant(format!(
                    "{store}: {} lines for {} allocated units",
                    store_report.allocation.len(),
                    store_report.total_allocated
                ))
                .into());
            }
            total_allocated += u64::from(store_report.total_allocated);
            total_capacity += u64::from(store_report.max_capacity);
            store_statistics.insert(
                store.clone(),
                StoreStatistics {
                    capacity_utilization: store_report.capacity_percentage.as_f64(),
                    unique_articles: store_report.allocation.len(),
                    total_articles: store_report.total_allocated,
                },
            );
        }

        Ok(Self {
            total_unique_articles_in_godown: snapshot.unique_articles(),
            total_stock_in_godown: snapshot.total_stock(),
            store_statistics,
            total_allocated,
            total_capacity,
            overall_utilization: CapacityPercentage::of(total_allocated, total_capacity).as_f64(),
        })
    }
}
