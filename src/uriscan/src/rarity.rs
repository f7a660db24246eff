//! Rarity classification for rendered assets
//!
//! Each asset image prints a ratio such as `2/4`. The denominator selects one
//! of five tiers by exact match; the numerator is only checked for sanity.

pub mod extract;
pub mod tier;

use serde::Serialize;
use std::fmt;

pub use extract::{extract_ratio, ExtractError};
pub use tier::{tier_by_denominator, tier_by_index, TierInfo, RARITY_TIERS};

/// Number of rarity tiers
pub const TIER_COUNT: usize = 5;

/// Rarity tiers, most common first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Uni,
    Gradient,
    Dark,
    Elevated,
    Phantom,
}

impl Tier {
    /// All tiers in distribution order
    pub const ALL: [Tier; TIER_COUNT] = [
        Tier::Uni,
        Tier::Gradient,
        Tier::Dark,
        Tier::Elevated,
        Tier::Phantom,
    ];

    /// Position in the distribution vector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> &'static TierInfo {
        &RARITY_TIERS[self.index()]
    }

    pub fn from_denominator(denominator: u64) -> Option<Self> {
        tier_by_denominator(denominator).map(|t| t.tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(numerator, denominator)` as printed in the asset image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RarityRatio {
    pub numerator: u64,
    pub denominator: u64,
}

impl RarityRatio {
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// A ratio above one cannot come from a well-formed render.
    pub fn is_anomalous(&self) -> bool {
        self.numerator > self.denominator
    }
}

impl fmt::Display for RarityRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Outcome of classifying one ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub ratio: RarityRatio,
    /// `None` when the denominator matches no known tier
    pub tier: Option<Tier>,
    /// Numerator exceeds denominator. Informational only.
    pub anomaly: bool,
}

impl Classification {
    pub fn is_classified(&self) -> bool {
        self.tier.is_some()
    }
}

/// Map a ratio to its tier by exact denominator match.
pub fn classify(ratio: RarityRatio) -> Classification {
    Classification {
        ratio,
        tier: Tier::from_denominator(ratio.denominator),
        anomaly: ratio.is_anomalous(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_denominators() {
        let expected = [(51, 0), (26, 1), (4, 2), (2, 3), (1, 4)];
        for (denominator, index) in expected {
            let c = classify(RarityRatio::new(1, denominator));
            assert_eq!(c.tier.map(Tier::index), Some(index), "denominator {}", denominator);
        }
    }

    #[test]
    fn test_unknown_denominators_are_unclassified() {
        for denominator in [0, 3, 5, 25, 27, 50, 52, 100, u64::MAX] {
            let c = classify(RarityRatio::new(0, denominator));
            assert_eq!(c.tier, None, "denominator {}", denominator);
            assert!(!c.is_classified());
        }
    }

    #[test]
    fn test_anomaly_flag() {
        assert!(classify(RarityRatio::new(5, 4)).anomaly);
        assert!(classify(RarityRatio::new(9, 7)).anomaly);
        assert!(classify(RarityRatio::new(1, 0)).anomaly);
        assert!(!classify(RarityRatio::new(4, 4)).anomaly);
        assert!(!classify(RarityRatio::new(0, 51)).anomaly);
    }

    #[test]
    fn test_anomaly_does_not_change_tier() {
        let c = classify(RarityRatio::new(5, 4));
        assert!(c.anomaly);
        assert_eq!(c.tier, Some(Tier::Dark));
        assert_eq!(c.tier.map(Tier::index), Some(2));
    }

    #[test]
    fn test_tier_names() {
        let names: Vec<_> = Tier::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["Uni", "Gradient", "Dark", "Elevated", "Phantom"]);
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(RarityRatio::new(2, 4).to_string(), "2/4");
    }
}
