//! Per-collection rarity distribution counters
//!
//! A [`Distribution`] lives for exactly one batch run. It is owned by the
//! driver, written once per classified asset, and read back through
//! [`Distribution::report`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::collection::CollectionKey;
use crate::rarity::{Tier, TIER_COUNT};

/// Count per tier, most common first
pub type TierCounts = [u32; TIER_COUNT];

/// Running counts and optional per-tier asset indices
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    counts: BTreeMap<CollectionKey, TierCounts>,
    membership: Option<BTreeMap<Tier, Vec<usize>>>,
}

impl Distribution {
    /// Empty distribution. With `track_membership`, every recorded index is
    /// also appended to its tier's membership list.
    pub fn new(track_membership: bool) -> Self {
        let membership =
            track_membership.then(|| Tier::ALL.into_iter().map(|t| (t, Vec::new())).collect());
        Self {
            counts: BTreeMap::new(),
            membership,
        }
    }

    /// Empty distribution that reports zero vectors for `keys` even if no
    /// asset is ever recorded under them.
    pub fn with_keys(keys: impl IntoIterator<Item = CollectionKey>, track_membership: bool) -> Self {
        let mut dist = Self::new(track_membership);
        for key in keys {
            dist.counts.entry(key).or_default();
        }
        dist
    }

    pub fn tracks_membership(&self) -> bool {
        self.membership.is_some()
    }

    /// Count one asset. Unclassified assets (`tier == None`) are not counted.
    pub fn record(&mut self, key: CollectionKey, tier: Option<Tier>, index: usize) {
        let Some(tier) = tier else {
            return;
        };

        self.counts.entry(key).or_default()[tier.index()] += 1;

        if let Some(membership) = self.membership.as_mut() {
            membership.entry(tier).or_default().push(index);
        }
    }

    /// Counts for one collection (zeros if nothing was recorded).
    pub fn counts(&self, key: CollectionKey) -> TierCounts {
        self.counts.get(&key).copied().unwrap_or_default()
    }

    /// Indices recorded under `tier`, in processing order.
    pub fn members(&self, tier: Tier) -> Option<&[usize]> {
        self.membership
            .as_ref()
            .map(|m| m.get(&tier).map(Vec::as_slice).unwrap_or_default())
    }

    /// Number of classified assets across all collections.
    pub fn total(&self) -> u32 {
        self.counts.values().flatten().sum()
    }

    /// Snapshot of the current state.
    pub fn report(&self) -> DistributionReport {
        DistributionReport {
            counts: self.counts.clone(),
            membership: self.membership.clone(),
        }
    }
}

/// Read-only copy of a [`Distribution`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    pub counts: BTreeMap<CollectionKey, TierCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<BTreeMap<Tier, Vec<usize>>>,
}

impl DistributionReport {
    pub fn total(&self) -> u32 {
        self.counts.values().flatten().sum()
    }
}
