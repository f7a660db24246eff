//! Rarity tier reference data

use super::Tier;

/// Rarity tier information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierInfo {
    pub tier: Tier,
    /// Position in the distribution vector (0 = most common)
    pub index: usize,
    /// Ratio denominator the renderer prints for this tier
    pub denominator: u64,
    pub name: &'static str,
}

/// All rarity tiers, most common first
pub const RARITY_TIERS: &[TierInfo] = &[
    TierInfo {
        tier: Tier::Uni,
        index: 0,
        denominator: 51,
        name: "Uni",
    },
    TierInfo {
        tier: Tier::Gradient,
        index: 1,
        denominator: 26,
        name: "Gradient",
    },
    TierInfo {
        tier: Tier::Dark,
        index: 2,
        denominator: 4,
        name: "Dark",
    },
    TierInfo {
        tier: Tier::Elevated,
        index: 3,
        denominator: 2,
        name: "Elevated",
    },
    TierInfo {
        tier: Tier::Phantom,
        index: 4,
        denominator: 1,
        name: "Phantom",
    },
];

/// Get tier by exact ratio denominator
pub fn tier_by_denominator(denominator: u64) -> Option<&'static TierInfo> {
    RARITY_TIERS.iter().find(|t| t.denominator == denominator)
}

/// Get tier by distribution index
pub fn tier_by_index(index: usize) -> Option<&'static TierInfo> {
    RARITY_TIERS.get(index)
}
