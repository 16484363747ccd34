//! Per-store allocation report.

use std::collections::BTreeMap;
use std::thread;

use serde::Serialize;

use godown_core::{ArticleCode, StoreName};

use crate::allocator::{AllocationLine, AllocationResult, allocate_eligible};
use crate::eligibility::eligible_set;
use crate::error::AllocationError;
use crate::percentage::CapacityPercentage;
use crate::snapshot::AllocationSnapshot;

/// Allocation result of one store, enriched with its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReport {
    pub max_capacity: u32,
    pub total_allocated: u32,
    pub capacity_percentage: CapacityPercentage,
    pub available_articles_count: usize,
    /// False when the store had no prior-shipment history, so nothing was
    /// excluded for it.
    pub history_recorded: bool,
    pub allocation: Vec<AllocationLine>,
}

impl StoreReport {
    fn new(result: AllocationResult, history_recorded: bool) -> Self {
        Self {
            max_capacity: result.capacity(),
            total_allocated: result.total_allocated,
            capacity_percentage: result.capacity_percentage,
            available_articles_count: result.available_articles_count,
            history_recorded,
            allocation: result.allocation,
        }
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.max_capacity.saturating_sub(self.total_allocated)
    }

    pub fn articles(&self) -> impl Iterator<Item = &ArticleCode> {
        self.allocation.iter().map(|line| &line.article)
    }
}

/// Store-keyed reports, in store-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllocationReport(BTreeMap<StoreName, StoreReport>);

impl AllocationReport {
    pub fn get(&self, store: &StoreName) -> Option<&StoreReport> {
        self.0.get(store)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StoreName, &StoreReport)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for AllocationReport {
    type Item = (StoreName, StoreReport);
    type IntoIter = std::collections::btree_map::IntoIter<StoreName, StoreReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn store_report(
    snapshot: &AllocationSnapshot,
    store: &StoreName,
    capacity: u32,
) -> Result<StoreReport, AllocationError> {
    let eligible = eligible_set(snapshot, store)?;
    let result = allocate_eligible(snapshot, &eligible, capacity);
    Ok(StoreReport::new(result, eligible.history_recorded()))
}

/// Build the report for every store in the snapshot.
///
/// With `workers > 1` the stores are split across scoped threads that only
/// borrow the snapshot; the output is identical to a sequential run.
pub fn build_report(
    snapshot: &AllocationSnapshot,
    workers: usize,
) -> Result<AllocationReport, AllocationError> {
    let stores: Vec<(&StoreName, u32)> = snapshot.stores().collect();
    let workers = workers.clamp(1, stores.len().max(1));

    let reports: Vec<(StoreName, StoreReport)> = if workers == 1 {
        stores
            .iter()
            .map(|(store, capacity)| {
                store_report(snapshot, store, *capacity).map(|r| ((*store).clone(), r))
            })
            .collect::<Result<_, _>>()?
    } else {
        let chunk = stores.len().div_ceil(workers);
        thread::scope(|scope| {
            let handles: Vec<_> = stores
                .chunks(chunk)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter()
                            .map(|(store, capacity)| {
                                store_report(snapshot, store, *capacity)
                                    .map(|r| ((*store).clone(), r))
                            })
                            .collect::<Result<Vec<_>, AllocationError>>()
                    })
                })
                .collect();

            let mut reports = Vec::with_capacity(stores.len());
            for handle in handles {
                match handle.join() {
                    Ok(batch) => reports.extend(batch?),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            Ok::<_, AllocationError>(reports)
        })?
    };

    tracing::debug!(stores = reports.len(), workers, "allocation report built");
    Ok(AllocationReport(reports.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ShipmentHistory, StockLevels, StoreCapacities};

    fn article(code: &str) -> ArticleCode {
        ArticleCode::new(code).unwrap()
    }

    fn store(name: &str) -> StoreName {
        StoreName::new(name).unwrap()
    }

    fn snapshot() -> AllocationSnapshot {
        let capacities: StoreCapacities = [
            (store("BOMBAY"), 2),
            (store("MOGA"), 10),
            (store("DUKE NIT"), 3),
            (store("MORADABAD"), 0),
        ]
        .into_iter()
        .collect();
        let stock: StockLevels = [("A", 5), ("B", 3), ("C", 1), ("D", 0)]
            .into_iter()
            .map(|(c, q)| (article(c), q))
            .collect();
        let history: ShipmentHistory = [
            (store("BOMBAY"), vec![article("C")]),
            (store("DUKE NIT"), vec![article("A"), article("B"), article("C")]),
            (store("MORADABAD"), vec![]),
        ]
        .into_iter()
        .collect();
        AllocationSnapshot::new(capacities, stock, history).unwrap()
    }

    #[test]
    fn reports_every_store_in_name_order() {
        let snap = snapshot();
        let report = build_report(&snap, 1).unwrap();

        let names: Vec<&str> = report.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, vec!["BOMBAY", "DUKE NIT", "MOGA", "MORADABAD"]);

        let bombay = report.get(&store("BOMBAY")).unwrap();
        assert_eq!(bombay.max_capacity, 2);
        assert_eq!(bombay.total_allocated, 2);
        assert_eq!(bombay.capacity_percentage.to_string(), "100.0");
        assert_eq!(bombay.available_articles_count, 2);
        assert!(bombay.history_recorded);

        let duke = report.get(&store("DUKE NIT")).unwrap();
        assert!(duke.allocation.is_empty());
        assert_eq!(duke.capacity_percentage.to_string(), "0.0");
    }

    #[test]
    fn store_without_history_is_flagged() {
        let snap = snapshot();
        let report = build_report(&snap, 1).unwrap();

        let moga = report.get(&store("MOGA")).unwrap();
        assert!(!moga.history_recorded);
        assert_eq!(moga.available_articles_count, 3);
        assert_eq!(moga.total_allocated, 3);
        assert_eq!(moga.capacity_percentage.to_string(), "30.0");
        assert_eq!(moga.remaining_capacity(), 7);
    }

    #[test]
    fn report_matches_single_store_allocation() {
        let snap = snapshot();
        let report = build_report(&snap, 1).unwrap();

        for (name, store_report) in report.iter() {
            let single = crate::allocator::create_allocation(&snap, name).unwrap();
            assert_eq!(store_report.allocation, single.allocation);
            assert_eq!(store_report.available_articles_count, single.available_articles_count);
        }
    }

    #[test]
    fn threaded_report_equals_sequential_report() {
        let snap = snapshot();
        let sequential = build_report(&snap, 1).unwrap();
        for workers in [2, 3, 8] {
            assert_eq!(build_report(&snap, workers).unwrap(), sequential);
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_report() {
        let snap = AllocationSnapshot::new(
            StoreCapacities::new(),
            StockLevels::new(),
            ShipmentHistory::new(),
        )
        .unwrap();
        assert!(build_report(&snap, 4).unwrap().is_empty());
    }

    #[test]
    fn serializes_as_store_keyed_object() {
        let snap = snapshot();
        let json = serde_json::to_value(build_report(&snap, 1).unwrap()).unwrap();

        assert_eq!(json["BOMBAY"]["maxCapacity"], 2);
        assert_eq!(json["BOMBAY"]["capacityPercentage"], "100.0");
        assert_eq!(json["BOMBAY"]["allocation"][1]["article"], "B");
        assert_eq!(json["MOGA"]["historyRecorded"], false);
    }
}
