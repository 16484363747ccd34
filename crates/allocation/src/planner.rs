//! Planner facade over one snapshot.

use std::collections::BTreeMap;

use tracing::instrument;

use godown_core::{ArticleCode, StoreName};

use crate::allocator::{self, AllocationResult};
use crate::config::AllocationConfig;
use crate::eligibility::{self, EligibleSet};
use crate::error::AllocationError;
use crate::report::{self, AllocationReport};
use crate::snapshot::AllocationSnapshot;
use crate::statistics::AllocationStatistics;

/// Runs the allocation pipeline against a borrowed snapshot.
///
/// Every call recomputes from the snapshot; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct AllocationPlanner<'a> {
    snapshot: &'a AllocationSnapshot,
    config: AllocationConfig,
}

impl<'a> AllocationPlanner<'a> {
    pub fn new(snapshot: &'a AllocationSnapshot) -> Self {
        Self::with_config(snapshot, AllocationConfig::default())
    }

    pub fn with_config(snapshot: &'a AllocationSnapshot, config: AllocationConfig) -> Self {
        Self { snapshot, config }
    }

    pub fn snapshot(&self) -> &'a AllocationSnapshot {
        self.snapshot
    }

    pub fn eligible_set(&self, store: &StoreName) -> Result<EligibleSet<'a>, AllocationError> {
        eligibility::eligible_set(self.snapshot, store)
    }

    /// Eligible articles per store, highest stock first.
    pub fn calculate_available_articles(
        &self,
    ) -> Result<BTreeMap<StoreName, Vec<ArticleCode>>, AllocationError> {
        self.snapshot
            .stores()
            .map(|(store, _)| {
                let ranked = self
                    .eligible_set(store)?
                    .ranked(self.snapshot)
                    .into_iter()
                    .map(|r| r.article.clone())
                    .collect();
                Ok((store.clone(), ranked))
            })
            .collect()
    }

    pub fn create_allocation(&self, store: &StoreName) -> Result<AllocationResult, AllocationError> {
        allocator::create_allocation(self.snapshot, store)
    }

    #[instrument(skip_all, fields(stores = self.snapshot.store_count(), workers = self.config.workers.get()))]
    pub fn generate_allocation_report(&self) -> Result<AllocationReport, AllocationError> {
        report::build_report(self.snapshot, self.config.workers.get())
    }

    pub fn generate_allocation_statistics(&self) -> Result<AllocationStatistics, AllocationError> {
        let report = self.generate_allocation_report()?;
        AllocationStatistics::from_report(self.snapshot, &report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ShipmentHistory, StockLevels, StoreCapacities};
    use std::num::NonZeroUsize;

    fn article(code: &str) -> ArticleCode {
        ArticleCode::new(code).unwrap()
    }

    fn store(name: &str) -> StoreName {
        StoreName::new(name).unwrap()
    }

    fn snapshot() -> AllocationSnapshot {
        let capacities: StoreCapacities =
            [(store("BOMBAY"), 2), (store("MOGA"), 1)].into_iter().collect();
        let stock: StockLevels = [("A", 5), ("B", 3), ("C", 1), ("E", 3)]
            .into_iter()
            .map(|(c, q)| (article(c), q))
            .collect();
        let history: ShipmentHistory =
            [(store("BOMBAY"), vec![article("C")]), (store("MOGA"), vec![article("A")])]
                .into_iter()
                .collect();
        AllocationSnapshot::new(capacities, stock, history).unwrap()
    }

    #[test]
    fn available_articles_are_ranked_per_store() {
        let snap = snapshot();
        let available = AllocationPlanner::new(&snap)
            .calculate_available_articles()
            .unwrap();

        let bombay: Vec<&str> = available[&store("BOMBAY")].iter().map(|a| a.as_str()).collect();
        assert_eq!(bombay, vec!["A", "B", "E"]);
        let moga: Vec<&str> = available[&store("MOGA")].iter().map(|a| a.as_str()).collect();
        assert_eq!(moga, vec!["B", "E", "C"]);
    }

    #[test]
    fn available_articles_cover_every_store() {
        let snap = snapshot();
        let available = AllocationPlanner::new(&snap)
            .calculate_available_articles()
            .unwrap();
        let stores: Vec<&str> = available.keys().map(StoreName::as_str).collect();
        assert_eq!(stores, vec!["BOMBAY", "MOGA"]);
    }

    #[test]
    fn create_allocation_twice_is_identical() {
        let snap = snapshot();
        let planner = AllocationPlanner::new(&snap);
        let first = planner.create_allocation(&store("BOMBAY")).unwrap();
        let second = planner.create_allocation(&store("BOMBAY")).unwrap();
        assert_eq!(first, second);
        let articles: Vec<&str> = first.allocation.iter().map(|l| l.article.as_str()).collect();
        assert_eq!(articles, vec!["A", "B"]);
    }

    #[test]
    fn unknown_store_propagates() {
        let snap = snapshot();
        let err = AllocationPlanner::new(&snap)
            .create_allocation(&store("DUKE RO"))
            .unwrap_err();
        assert_eq!(err, AllocationError::InvalidStore(store("DUKE RO")));
    }

    #[test]
    fn report_and_statistics_agree() {
        let snap = snapshot();
        let planner =
            AllocationPlanner::with_config(&snap, AllocationConfig::with_workers(NonZeroUsize::new(2).unwrap()));
        let report = planner.generate_allocation_report().unwrap();
        let stats = planner.generate_allocation_statistics().unwrap();

        assert_eq!(stats.total_stock_in_godown, 12);
        for (name, store_report) in report.iter() {
            let s = &stats.store_statistics[name];
            assert_eq!(s.total_articles, store_report.total_allocated);
            assert_eq!(s.capacity_utilization, store_report.capacity_percentage.as_f64());
        }
    }
}
