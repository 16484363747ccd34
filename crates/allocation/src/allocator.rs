//! Greedy allocator: one unit per eligible article, highest stock first,
//! until the store's capacity is reached.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use godown_core::{ArticleCode, StoreName};

use crate::eligibility::{EligibleSet, eligible_set};
use crate::error::AllocationError;
use crate::percentage::CapacityPercentage;
use crate::snapshot::AllocationSnapshot;

/// Units committed per allocation line.
///
/// Inventory is spread across distinct articles rather than concentrated, so
/// an article contributes at most this many units to one store.
pub const UNITS_PER_LINE: u32 = 1;

/// A single unit commitment of one article to one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationLine {
    pub article: ArticleCode,
    pub quantity: u32,
    /// Godown stock of the article when the allocation was computed.
    pub available_in_godown: u64,
}

impl AllocationLine {
    fn single(article: &ArticleCode, available_in_godown: u64) -> Self {
        Self {
            article: article.clone(),
            quantity: UNITS_PER_LINE,
            available_in_godown,
        }
    }
}

/// Allocation computed for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub allocation: Vec<AllocationLine>,
    pub total_allocated: u32,
    pub capacity_percentage: CapacityPercentage,
    pub available_articles_count: usize,
    #[serde(skip)]
    capacity: u32,
}

impl AllocationResult {
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units the store could still take.
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.total_allocated)
    }

    /// The `n` highest-stock lines of the allocation.
    pub fn top_articles(&self, n: usize) -> &[AllocationLine] {
        &self.allocation[..n.min(self.allocation.len())]
    }
}

/// Allocate against an already computed eligible set.
///
/// The report path calls this with the same set it reports on, so the
/// eligible count and the ranked articles cannot drift apart.
pub fn allocate_eligible(
    snapshot: &AllocationSnapshot,
    eligible: &EligibleSet<'_>,
    capacity: u32,
) -> AllocationResult {
    let mut allocation = Vec::new();
    let mut total_allocated: u32 = 0;

    if capacity > 0 {
        for ranked in eligible.ranked(snapshot) {
            if ranked.available == 0 {
                continue;
            }
            allocation.push(AllocationLine::single(ranked.article, ranked.available));
            total_allocated += UNITS_PER_LINE;
            if total_allocated >= capacity {
                break;
            }
        }
    }

    let capacity_percentage =
        CapacityPercentage::of(u64::from(total_allocated), u64::from(capacity));
    tracing::debug!(
        store = %eligible.store(),
        eligible = eligible.len(),
        total_allocated,
        capacity,
        %capacity_percentage,
        "store allocated"
    );

    AllocationResult {
        allocation,
        total_allocated,
        capacity_percentage,
        available_articles_count: eligible.len(),
        capacity,
    }
}

/// Compute the allocation for a single store.
#[instrument(skip_all, fields(store = %store))]
pub fn create_allocation(
    snapshot: &AllocationSnapshot,
    store: &StoreName,
) -> Result<AllocationResult, AllocationError> {
    let capacity = snapshot.capacity(store)?;
    let eligible = eligible_set(snapshot, store)?;
    Ok(allocate_eligible(snapshot, &eligible, capacity))
}
