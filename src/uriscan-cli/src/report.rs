//! Report printing

use anyhow::{Context, Result};
use std::io::{self, Write};

use uriscan::{BatchReport, ContractStatus, FlaggedAsset, Tier};

use crate::cli::OutputFormat;

/// Print `report` to stdout in the requested format.
pub fn print(report: &BatchReport, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Text => write_text(report, &mut out),
        OutputFormat::Json => write_json(report, &mut out),
    };
    written.context("Failed to write report")
}

pub fn write_json(report: &BatchReport, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// `[a, b, c]`
fn list<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn flagged(assets: &[FlaggedAsset]) -> String {
    list(assets.iter().map(|a| format!("{} ({})", a.index, a.ratio)))
}

pub fn write_text(report: &BatchReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Sample size: {}", report.sample_size)?;
    writeln!(out)?;
    writeln!(out, "Assets distribution:")?;
    writeln!(out, "Shape {}", list(Tier::ALL.iter().map(|t| t.name())))?;
    for (key, counts) in &report.distribution.counts {
        writeln!(out, "{} {}", key, list(counts))?;
    }

    if let Some(membership) = &report.distribution.membership {
        writeln!(out)?;
        writeln!(out, "ID by rarity:")?;
        // Rarest first; the common tier is too large to be useful
        for tier in Tier::ALL.iter().skip(1).rev() {
            let members = membership.get(tier).map(Vec::as_slice).unwrap_or_default();
            writeln!(out, "{} {}", tier, list(members))?;
        }
    }

    if !report.unclassified.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unclassified: {}", flagged(&report.unclassified))?;
    }
    if !report.anomalies.is_empty() {
        writeln!(out)?;
        writeln!(out, "Anomalies: {}", flagged(&report.anomalies))?;
    }
    if !report.skipped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skipped:")?;
        for skipped in &report.skipped {
            writeln!(out, "  {}: {}", skipped.id, skipped.reason)?;
        }
    }

    match report.contract {
        ContractStatus::NotRun => {}
        ContractStatus::Missing => {
            writeln!(out)?;
            writeln!(out, "Contract: missing")?;
        }
        ContractStatus::Decoded => {
            writeln!(out)?;
            writeln!(out, "Contract: decoded")?;
        }
        ContractStatus::Failed => {
            writeln!(out)?;
            writeln!(out, "Contract: failed")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uriscan::{
        CollectionKey, Distribution, RarityRatio, RecordId, SkipStage, SkippedRecord, Variant,
    };

    fn sample_report() -> BatchReport {
        let mut dist = Distribution::with_keys(Variant::ALL.map(CollectionKey::from), true);
        dist.record(Variant::Kiwi.into(), Some(Tier::Dark), 0);
        dist.record(Variant::Dragonfly.into(), Some(Tier::Phantom), 1);
        dist.record(Variant::Kiwi.into(), Some(Tier::Phantom), 3);

        BatchReport {
            sample_size: 4,
            distribution: dist.report(),
            unclassified: Vec::new(),
            anomalies: vec![FlaggedAsset {
                index: 0,
                ratio: RarityRatio::new(5, 4),
            }],
            skipped: vec![SkippedRecord {
                id: RecordId::Asset(2),
                stage: SkipStage::Extract,
                reason: "no anchor".to_string(),
            }],
            contract: ContractStatus::Decoded,
        }
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_text(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Shape [Uni, Gradient, Dark, Elevated, Phantom]\n"));
        assert!(text.contains("Kiwi [0, 0, 1, 0, 1]\n"));
        assert!(text.contains("Dragonfly [0, 0, 0, 0, 1]\n"));
        assert!(text.contains("Phantom [1, 3]\n"));
        assert!(text.contains("Gradient []\n"));
        assert!(!text.contains("Uni []"));
        assert!(text.contains("Anomalies: [0 (5/4)]"));
        assert!(text.contains("  2: no anchor"));
        assert!(text.contains("Contract: decoded"));

        let phantom = text.find("Phantom [").unwrap();
        let gradient = text.find("Gradient [").unwrap();
        assert!(phantom < gradient);
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json(&sample_report(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["sample_size"], 4);
        assert_eq!(
            json["distribution"]["counts"]["Kiwi"],
            serde_json::json!([0, 0, 1, 0, 1])
        );
        assert_eq!(json["skipped"][0]["stage"], "extract");
        assert_eq!(json["contract"], "decoded");
    }
}
