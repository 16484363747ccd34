//! Reference data the allocation runs against.
//!
//! The raw tables (`StoreCapacities`, `StockLevels`, `ShipmentHistory`) are
//! what an external loader produces. `AllocationSnapshot` is the validated,
//! immutable view every pipeline stage reads from.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use godown_core::{ArticleCode, DomainError, StoreName};

use crate::error::AllocationError;

/// Maximum units each store may receive in one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreCapacities(BTreeMap<StoreName, u32>);

impl StoreCapacities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, store: StoreName, capacity: u32) -> Option<u32> {
        self.0.insert(store, capacity)
    }

    pub fn get(&self, store: &StoreName) -> Option<u32> {
        self.0.get(store).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StoreName, u32)> for StoreCapacities {
    fn from_iter<I: IntoIterator<Item = (StoreName, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Units of each article currently held in the godown.
///
/// Quantities are signed so that corrupted loader output (negative stock) can
/// be detected and rejected instead of silently clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevels(HashMap<ArticleCode, i64>);

impl StockLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, article: ArticleCode, quantity: i64) -> Option<i64> {
        self.0.insert(article, quantity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ArticleCode, i64)> for StockLevels {
    fn from_iter<I: IntoIterator<Item = (ArticleCode, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One row of a prior-period supply extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub store: StoreName,
    pub article: ArticleCode,
    /// Units shipped. Only membership matters for exclusion.
    pub quantity: u32,
}

/// Articles previously sent to each store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentHistory(HashMap<StoreName, HashSet<ArticleCode>>);

impl ShipmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group flat supply rows into per-store article sets, dropping duplicates.
    pub fn from_records(records: impl IntoIterator<Item = ShipmentRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.record(record.store, record.article);
        }
        history
    }

    pub fn record(&mut self, store: StoreName, article: ArticleCode) {
        self.0.entry(store).or_default().insert(article);
    }

    fn get(&self, store: &StoreName) -> Option<&HashSet<ArticleCode>> {
        self.0.get(store)
    }
}

impl<A> FromIterator<(StoreName, A)> for ShipmentHistory
where
    A: IntoIterator<Item = ArticleCode>,
{
    fn from_iter<I: IntoIterator<Item = (StoreName, A)>>(iter: I) -> Self {
        let mut history = Self::new();
        for (store, articles) in iter {
            let sent = history.0.entry(store).or_default();
            sent.extend(articles);
        }
        history
    }
}

/// Prior-period shipments for one store.
///
/// A store with no recorded history is a legitimate state (incomplete
/// history data), distinct from an unknown store: nothing is excluded for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorShipments<'a> {
    Recorded(&'a HashSet<ArticleCode>),
    NotRecorded,
}

impl PriorShipments<'_> {
    pub fn excludes(&self, article: &ArticleCode) -> bool {
        match self {
            PriorShipments::Recorded(sent) => sent.contains(article),
            PriorShipments::NotRecorded => false,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, PriorShipments::Recorded(_))
    }
}

/// Loader-facing bundle of the three reference tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInput {
    pub store_capacities: StoreCapacities,
    pub godown_stock: StockLevels,
    #[serde(default)]
    pub prior_shipments: ShipmentHistory,
}

/// Validated, immutable reference data for one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSnapshot {
    capacities: BTreeMap<StoreName, u32>,
    stock: HashMap<ArticleCode, u64>,
    history: ShipmentHistory,
    total_stock: u64,
}

impl AllocationSnapshot {
    /// Validate the reference tables.
    ///
    /// Rejects negative stock levels. When several articles are negative the
    /// lowest article code is reported.
    pub fn new(
        capacities: StoreCapacities,
        stock: StockLevels,
        history: ShipmentHistory,
    ) -> Result<Self, AllocationError> {
        if let Some((article, quantity)) = stock
            .0
            .iter()
            .filter(|(_, qty)| **qty < 0)
            .min_by(|a, b| a.0.cmp(b.0))
        {
            tracing::warn!(%article, quantity, "rejecting snapshot with negative stock");
            return Err(AllocationError::NegativeQuantity {
                article: article.clone(),
                quantity: *quantity,
            });
        }

        let mut total_stock: u64 = 0;
        let mut validated = HashMap::with_capacity(stock.0.len());
        for (article, quantity) in stock.0 {
            // non-negative after the check above
            let quantity = quantity.unsigned_abs();
            total_stock = total_stock
                .checked_add(quantity)
                .ok_or_else(|| DomainError::validation("total godown stock overflows u64"))?;
            validated.insert(article, quantity);
        }

        Ok(Self {
            capacities: capacities.0,
            stock: validated,
            history,
            total_stock,
        })
    }

    /// Stores in deterministic (name) order with their capacities.
    pub fn stores(&self) -> impl Iterator<Item = (&StoreName, u32)> {
        self.capacities.iter().map(|(store, cap)| (store, *cap))
    }

    pub fn store_count(&self) -> usize {
        self.capacities.len()
    }

    pub fn capacity(&self, store: &StoreName) -> Result<u32, AllocationError> {
        self.store_entry(store).map(|(_, capacity)| capacity)
    }

    /// The snapshot's own key for `store`, with its capacity.
    pub fn store_entry(&self, store: &StoreName) -> Result<(&StoreName, u32), AllocationError> {
        self.capacities
            .get_key_value(store)
            .map(|(name, capacity)| (name, *capacity))
            .ok_or_else(|| AllocationError::InvalidStore(store.clone()))
    }

    /// Stock held for `article`; absent articles have none.
    pub fn quantity(&self, article: &ArticleCode) -> u64 {
        self.stock.get(article).copied().unwrap_or(0)
    }

    pub fn articles(&self) -> impl Iterator<Item = (&ArticleCode, u64)> {
        self.stock.iter().map(|(article, qty)| (article, *qty))
    }

    pub fn unique_articles(&self) -> usize {
        self.stock.len()
    }

    pub fn total_stock(&self) -> u64 {
        self.total_stock
    }

    pub fn prior_shipments(&self, store: &StoreName) -> PriorShipments<'_> {
        match self.history.get(store) {
            Some(sent) => PriorShipments::Recorded(sent),
            None => PriorShipments::NotRecorded,
        }
    }
}

impl TryFrom<SnapshotInput> for AllocationSnapshot {
    type Error = AllocationError;

    fn try_from(input: SnapshotInput) -> Result<Self, Self::Error> {
        Self::new(input.store_capacities, input.godown_stock, input.prior_shipments)
    }
}
