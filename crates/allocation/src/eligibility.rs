//! Eligibility filter: which godown articles a store may receive.

use std::cmp::Reverse;
use std::collections::HashSet;

use godown_core::{ArticleCode, StoreName};

use crate::error::AllocationError;
use crate::snapshot::{AllocationSnapshot, PriorShipments};

/// Articles in stock, with positive quantity, that were not shipped to the
/// store in the prior period.
///
/// Borrowed from the snapshot and recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleSet<'a> {
    store: &'a StoreName,
    articles: HashSet<&'a ArticleCode>,
    history_recorded: bool,
}

/// An eligible article together with the stock it was ranked by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RankedArticle<'a> {
    pub article: &'a ArticleCode,
    pub available: u64,
}

impl<'a> EligibleSet<'a> {
    pub fn store(&self) -> &'a StoreName {
        self.store
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn contains(&self, article: &ArticleCode) -> bool {
        self.articles.contains(article)
    }

    /// Whether the store had an entry in the prior-shipment history.
    pub fn history_recorded(&self) -> bool {
        self.history_recorded
    }

    /// Eligible articles by descending stock, ties broken by ascending
    /// article code.
    pub fn ranked(&self, snapshot: &AllocationSnapshot) -> Vec<RankedArticle<'a>> {
        let mut ranked: Vec<RankedArticle<'a>> = self
            .articles
            .iter()
            .map(|&article| RankedArticle {
                article,
                available: snapshot.quantity(article),
            })
            .collect();
        ranked.sort_unstable_by_key(|r| (Reverse(r.available), r.article));
        ranked
    }
}

/// Compute the eligible set for `store`.
///
/// Fails with `InvalidStore` when the store has no capacity entry. A store
/// missing from the shipment history is not an error: nothing is excluded.
pub fn eligible_set<'a>(
    snapshot: &'a AllocationSnapshot,
    store: &StoreName,
) -> Result<EligibleSet<'a>, AllocationError> {
    let (store, _) = snapshot.store_entry(store)?;

    let prior = snapshot.prior_shipments(store);
    if let PriorShipments::NotRecorded = prior {
        tracing::debug!(%store, "no prior shipment history; nothing excluded");
    }

    let articles = snapshot
        .articles()
        .filter(|(article, qty)| *qty > 0 && !prior.excludes(article))
        .map(|(article, _)| article)
        .collect();

    Ok(EligibleSet {
        store,
        articles,
        history_recorded: prior.is_recorded(),
    })
}
