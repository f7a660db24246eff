//! Batch driver
//!
//! Walks asset indices `0..N`, pushing each raw record through
//! decode -> route -> extract -> classify -> record, then decodes the
//! collection-level `contract` record.
//!
//! Failure policy:
//! - a record that cannot be decoded or carries no readable ratio is skipped
//! - an unknown variant aborts the whole run
//! - source/sink I/O failures abort the whole run

use serde::{Serialize, Serializer};
use std::fmt;
use std::io;

use crate::collection::{self, CollectionKey, RouteError, Variant};
use crate::distribution::{Distribution, DistributionReport};
use crate::metadata::DecodedAsset;
use crate::rarity::{self, RarityRatio};

/// Identifier of one raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordId {
    Asset(usize),
    /// Collection-level metadata (`contractURI`)
    Contract,
}

impl RecordId {
    pub const CONTRACT_NAME: &'static str = "contract";

    /// File stem used for the record and its artifacts
    pub fn file_stem(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Asset(index) => write!(f, "{}", index),
            RecordId::Contract => f.write_str(Self::CONTRACT_NAME),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordId::Asset(index) => serializer.serialize_u64(*index as u64),
            RecordId::Contract => serializer.serialize_str(Self::CONTRACT_NAME),
        }
    }
}

/// Where raw records come from
pub trait RecordSource {
    /// Number of asset records (`N`); the contract record is not counted.
    fn asset_count(&self) -> io::Result<usize>;

    /// Raw `<header>,<base64>` text of one record.
    ///
    /// A missing record should be reported as [`io::ErrorKind::NotFound`].
    fn read(&self, id: RecordId) -> io::Result<String>;
}

/// Where decoded artifacts go
pub trait ArtifactSink {
    fn write(&mut self, id: RecordId, asset: &DecodedAsset) -> io::Result<()>;
}

/// Sink that drops every artifact
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl ArtifactSink for Discard {
    fn write(&mut self, _id: RecordId, _asset: &DecodedAsset) -> io::Result<()> {
        Ok(())
    }
}

/// Records held in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    pub assets: Vec<String>,
    pub contract: Option<String>,
}

impl MemorySource {
    pub fn new(assets: Vec<String>, contract: Option<String>) -> Self {
        Self { assets, contract }
    }
}

impl RecordSource for MemorySource {
    fn asset_count(&self) -> io::Result<usize> {
        Ok(self.assets.len())
    }

    fn read(&self, id: RecordId) -> io::Result<String> {
        let record = match id {
            RecordId::Asset(index) => self.assets.get(index),
            RecordId::Contract => self.contract.as_ref(),
        };
        record
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no record {}", id)))
    }
}

/// Fatal batch errors
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("asset {index}: {source}")]
    UnknownVariant {
        index: usize,
        #[source]
        source: RouteError,
    },

    #[error("failed to count raw records: {0}")]
    Count(#[source] io::Error),

    #[error("failed to read record {id}: {source}")]
    Source {
        id: RecordId,
        #[source]
        source: io::Error,
    },

    #[error("failed to write artifacts for {id}: {source}")]
    Sink {
        id: RecordId,
        #[source]
        source: io::Error,
    },
}

/// Batch behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Split counts by sub-collection. When off, every asset is counted
    /// under [`CollectionKey::All`] and unknown variants cannot occur.
    pub route_variants: bool,
    /// Keep per-tier lists of asset indices
    pub track_membership: bool,
    /// Decode the `contract` record after the assets
    pub process_contract: bool,
    /// Process at most this many assets
    pub limit: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            route_variants: true,
            track_membership: true,
            process_contract: true,
            limit: None,
        }
    }
}

/// Pipeline stage at which a record was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipStage {
    Decode,
    Extract,
}

/// A record that could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub id: RecordId,
    pub stage: SkipStage,
    pub reason: String,
}

/// An asset carrying a ratio of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlaggedAsset {
    pub index: usize,
    pub ratio: RarityRatio,
}

/// Outcome of the contract record step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Disabled, or no assets were processed
    NotRun,
    /// No contract record in the source
    Missing,
    Decoded,
    /// Present but undecodable (see `skipped`)
    Failed,
}

/// Everything a finished run reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub sample_size: usize,
    pub distribution: DistributionReport,
    /// Ratios whose denominator matches no tier
    pub unclassified: Vec<FlaggedAsset>,
    /// Ratios with numerator above denominator (still classified)
    pub anomalies: Vec<FlaggedAsset>,
    pub skipped: Vec<SkippedRecord>,
    pub contract: ContractStatus,
}

impl BatchReport {
    /// Number of assets counted in the distribution
    pub fn classified(&self) -> u32 {
        self.distribution.total()
    }
}

/// One configured batch run
#[derive(Debug, Clone, Default)]
pub struct Batch {
    options: BatchOptions,
}

impl Batch {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Process every record in `source`, writing artifacts to `sink`.
    pub fn run<S, W>(&self, source: &S, sink: &mut W) -> Result<BatchReport, BatchError>
    where
        S: RecordSource + ?Sized,
        W: ArtifactSink + ?Sized,
    {
        let available = source.asset_count().map_err(BatchError::Count)?;
        let sample_size = self.options.limit.map_or(available, |l| l.min(available));
        tracing::info!(sample_size, "processing assets");

        let mut distribution = if self.options.route_variants {
            Distribution::with_keys(
                Variant::ALL.into_iter().map(CollectionKey::from),
                self.options.track_membership,
            )
        } else {
            Distribution::with_keys([CollectionKey::All], self.options.track_membership)
        };

        let mut report = BatchReport {
            sample_size,
            distribution: distribution.report(),
            unclassified: Vec::new(),
            anomalies: Vec::new(),
            skipped: Vec::new(),
            contract: ContractStatus::NotRun,
        };

        for index in 0..sample_size {
            self.process_asset(index, source, sink, &mut distribution, &mut report)?;
        }

        if sample_size > 0 && self.options.process_contract {
            report.contract = self.process_contract(source, sink, &mut report.skipped)?;
        }

        report.distribution = distribution.report();
        Ok(report)
    }

    fn process_asset<S, W>(
        &self,
        index: usize,
        source: &S,
        sink: &mut W,
        distribution: &mut Distribution,
        report: &mut BatchReport,
    ) -> Result<(), BatchError>
    where
        S: RecordSource + ?Sized,
        W: ArtifactSink + ?Sized,
    {
        let id = RecordId::Asset(index);
        let raw = source
            .read(id)
            .map_err(|source| BatchError::Source { id, source })?;

        let asset = match DecodedAsset::decode(&raw) {
            Ok(asset) => asset,
            Err(e) => {
                tracing::warn!(%id, error = %e, "skipping undecodable asset");
                report.skipped.push(SkippedRecord {
                    id,
                    stage: SkipStage::Decode,
                    reason: e.to_string(),
                });
                return Ok(());
            }
        };

        sink.write(id, &asset)
            .map_err(|source| BatchError::Sink { id, source })?;

        let key = if self.options.route_variants {
            collection::route(&asset.metadata)
                .map_err(|source| BatchError::UnknownVariant { index, source })?
        } else {
            CollectionKey::All
        };

        let ratio = match rarity::extract_ratio(&asset.svg) {
            Ok(ratio) => ratio,
            Err(e) => {
                tracing::warn!(%id, error = %e, "skipping asset without rarity text");
                report.skipped.push(SkippedRecord {
                    id,
                    stage: SkipStage::Extract,
                    reason: e.to_string(),
                });
                return Ok(());
            }
        };

        let classification = rarity::classify(ratio);
        if classification.anomaly {
            tracing::warn!(%id, %ratio, "numerator exceeds denominator");
            report.anomalies.push(FlaggedAsset { index, ratio });
        }

        match classification.tier {
            Some(tier) => tracing::debug!(%id, %key, %ratio, %tier, "classified"),
            None => {
                tracing::warn!(%id, %ratio, "denominator matches no rarity tier");
                report.unclassified.push(FlaggedAsset { index, ratio });
            }
        }

        distribution.record(key, classification.tier, index);
        Ok(())
    }

    fn process_contract<S, W>(
        &self,
        source: &S,
        sink: &mut W,
        skipped: &mut Vec<SkippedRecord>,
    ) -> Result<ContractStatus, BatchError>
    where
        S: RecordSource + ?Sized,
        W: ArtifactSink + ?Sized,
    {
        let id = RecordId::Contract;
        let raw = match source.read(id) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("no contract record found");
                return Ok(ContractStatus::Missing);
            }
            Err(source) => return Err(BatchError::Source { id, source }),
        };

        match DecodedAsset::decode(&raw) {
            Ok(asset) => {
                sink.write(id, &asset)
                    .map_err(|source| BatchError::Sink { id, source })?;
                tracing::info!(name = %asset.metadata.name, "decoded contract record");
                Ok(ContractStatus::Decoded)
            }
            Err(e) => {
                tracing::warn!(error = %e, "contract record is undecodable");
                skipped.push(SkippedRecord {
                    id,
                    stage: SkipStage::Decode,
                    reason: e.to_string(),
                });
                Ok(ContractStatus::Failed)
            }
        }
    }
}
