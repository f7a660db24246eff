//! # uriscan
//!
//! Decode on-chain NFT token URIs and measure their rarity distribution.
//!
//! This library provides functionality to:
//! - Unwrap `data:...;base64,` token URIs and the SVG image nested inside them
//! - Read the rarity ratio the renderer prints into each SVG
//! - Classify ratios into five tiers and count them per sub-collection
//! - Drive a whole cached batch through that pipeline
//!
//! ## Example
//!
//! ```
//! use uriscan::{Batch, Discard, MemorySource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = r#"<svg><text style="font-size:34px">2/4</text></svg>"#;
//! let image = uriscan::uri::encode("data:image/svg+xml;base64", svg.as_bytes());
//! let json = format!(r#"{{"name":"Shape #0 Kiwi","description":"","image":"{}"}}"#, image);
//! let raw = uriscan::uri::encode("data:application/json;base64", json.as_bytes());
//!
//! let source = MemorySource::new(vec![raw], None);
//! let report = Batch::default().run(&source, &mut Discard)?;
//! assert_eq!(report.classified(), 1);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod collection;
pub mod distribution;
pub mod metadata;
pub mod rarity;
pub mod uri;

// Re-export commonly used items
#[doc(inline)]
pub use batch::{
    ArtifactSink, Batch, BatchError, BatchOptions, BatchReport, ContractStatus, Discard,
    FlaggedAsset, MemorySource, RecordId, RecordSource, SkipStage, SkippedRecord,
};
#[doc(inline)]
pub use collection::{route, CollectionKey, RouteError, Variant};
#[doc(inline)]
pub use distribution::{Distribution, DistributionReport, TierCounts};
#[doc(inline)]
pub use metadata::{AssetError, DecodedAsset, Metadata};
#[doc(inline)]
pub use rarity::{
    classify, extract_ratio, Classification, ExtractError, RarityRatio, Tier, TierInfo,
    RARITY_TIERS, TIER_COUNT,
};
#[doc(inline)]
pub use uri::{DataUri, DecodeError};
