//! Single record decode command handler

use anyhow::{Context, Result};
use std::path::Path;

use uriscan::{classify, extract_ratio, route, DataUri, DecodedAsset};

use crate::file_io;

/// Handle the decode command
pub fn handle(input: Option<&Path>, svg: bool, ratio: bool) -> Result<()> {
    let raw = file_io::read_input(input)?;
    let asset = DecodedAsset::decode(&raw).context("Failed to decode record")?;

    if ratio {
        print!("{}", describe(&raw, &asset)?);
    } else if svg {
        println!("{}", asset.svg);
    } else {
        println!("{}", asset.json);
    }

    Ok(())
}

/// Summary of a record's header, variant and rarity
fn describe(raw: &str, asset: &DecodedAsset) -> Result<String> {
    let ratio = extract_ratio(&asset.svg).context("No rarity ratio in SVG")?;
    let classification = classify(ratio);

    let media_type = DataUri::parse(raw)
        .map(|uri| uri.media_type().to_string())
        .unwrap_or_default();
    let variant = match route(&asset.metadata) {
        Ok(key) => key.to_string(),
        Err(e) => format!("none ({})", e),
    };
    let tier = match classification.tier {
        Some(tier) => format!("{} ({})", tier, tier.index()),
        None => "unclassified".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("Media type: {}\n", media_type));
    out.push_str(&format!("Name:       {}\n", asset.metadata.name));
    out.push_str(&format!("Variant:    {}\n", variant));
    out.push_str(&format!("Ratio:      {}\n", ratio));
    out.push_str(&format!("Tier:       {}\n", tier));
    if classification.anomaly {
        out.push_str("Warning:    numerator exceeds denominator\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uriscan::uri;

    fn record(name: &str, ratio: &str) -> String {
        let svg = format!(r#"<svg><text class="r" style="font-size:34px">{}</text></svg>"#, ratio);
        let image = uri::encode("data:image/svg+xml;base64", svg.as_bytes());
        let json = serde_json::json!({ "name": name, "description": "", "image": image });
        uri::encode("data:application/json;base64", json.to_string().as_bytes())
    }

    #[test]
    fn test_describe() {
        let raw = record("Shape #9 Dragonfly", "3/26");
        let asset = DecodedAsset::decode(&raw).unwrap();
        let text = describe(&raw, &asset).unwrap();

        assert!(text.contains("Media type: application/json\n"));
        assert!(text.contains("Variant:    Dragonfly\n"));
        assert!(text.contains("Ratio:      3/26\n"));
        assert!(text.contains("Tier:       Gradient (1)\n"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_describe_anomaly_and_unknown_variant() {
        let raw = record("Shape #9 Falcon", "7/3");
        let asset = DecodedAsset::decode(&raw).unwrap();
        let text = describe(&raw, &asset).unwrap();

        assert!(text.contains("Variant:    none (unknown variant"));
        assert!(text.contains("Tier:       unclassified\n"));
        assert!(text.contains("Warning:"));
    }

    #[test]
    fn test_describe_without_ratio() {
        let svg = uri::encode("data:image/svg+xml;base64", b"<svg/>");
        let json = serde_json::json!({ "name": "a b Kiwi", "image": svg });
        let raw = uri::encode("data:application/json;base64", json.to_string().as_bytes());
        let asset = DecodedAsset::decode(&raw).unwrap();
        assert!(describe(&raw, &asset).is_err());
    }
}
