//! Token metadata model and the two-layer asset decode

use serde::{Deserialize, Serialize};

use crate::uri::{self, DecodeError};

/// Errors from decoding one raw record into its artifacts
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("token URI: {0}")]
    TokenUri(#[source] DecodeError),

    #[error("metadata is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("image URI: {0}")]
    Image(#[source] DecodeError),
}

/// Decoded token metadata
///
/// Only the fields the pipeline reads are modelled; anything else in the
/// JSON (attributes, external links) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display name, e.g. `"Shape #12 Kiwi"`
    pub name: String,
    /// Free-form description (often markdown)
    #[serde(default)]
    pub description: String,
    /// `data:image/svg+xml;base64,...` URI
    pub image: String,
}

impl Metadata {
    /// Parse metadata from decoded JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whitespace-separated token of `name` at `position`, if present.
    pub fn name_token(&self, position: usize) -> Option<&str> {
        self.name.split_whitespace().nth(position)
    }
}

/// Every decoded layer of a single record
#[derive(Debug, Clone)]
pub struct DecodedAsset {
    /// JSON text exactly as decoded from the token URI
    pub json: String,
    pub metadata: Metadata,
    /// SVG markup decoded from the `image` field
    pub svg: String,
}

impl DecodedAsset {
    /// Unwrap both base64 layers of a raw record.
    ///
    /// raw -> JSON text -> [`Metadata`] -> `image` -> SVG text
    pub fn decode(raw: &str) -> Result<Self, AssetError> {
        let json = uri::decode(raw).map_err(AssetError::TokenUri)?;
        let metadata = Metadata::from_json(&json)?;
        let svg = uri::decode(&metadata.image).map_err(AssetError::Image)?;

        Ok(Self {
            json,
            metadata,
            svg,
        })
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_record(name: &str, description: &str, svg: &str) -> String {
        let image = uri::encode("data:image/svg+xml;base64", svg.as_bytes());
        let json = serde_json::json!({
            "name": name,
            "description": description,
            "image": image,
        })
        .to_string();
        uri::encode("data:application/json;base64", json.as_bytes())
    }

    #[test]
    fn test_decode_both_layers() {
        let svg = r#"<svg><text style="font-size:34px">2/4</text></svg>"#;
        let raw = raw_record("X Y Kiwi", "d", svg);
        let asset = DecodedAsset::decode(&raw).unwrap();

        assert_eq!(asset.metadata.name, "X Y Kiwi");
        assert_eq!(asset.description(), "d");
        assert_eq!(asset.svg, svg);
        assert!(asset.json.contains("\"description\":\"d\""));
    }

    #[test]
    fn test_name_token() {
        let meta = Metadata {
            name: "Shape  #7\tDragonfly".to_string(),
            description: String::new(),
            image: String::new(),
        };
        assert_eq!(meta.name_token(0), Some("Shape"));
        assert_eq!(meta.name_token(2), Some("Dragonfly"));
        assert_eq!(meta.name_token(3), None);
    }

    #[test]
    fn test_missing_description_defaults_empty() {
        let meta = Metadata::from_json(r#"{"name":"a b c","image":"x,y"}"#).unwrap();
        assert_eq!(meta.description, "");
    }

    #[test]
    fn test_missing_image_is_invalid_json() {
        let raw = uri::encode("data:application/json;base64", br#"{"name":"a"}"#);
        assert!(matches!(
            DecodedAsset::decode(&raw),
            Err(AssetError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_bad_outer_layer() {
        assert!(matches!(
            DecodedAsset::decode("no delimiter here"),
            Err(AssetError::TokenUri(DecodeError::MissingDelimiter))
        ));
    }

    #[test]
    fn test_bad_image_layer() {
        let json = r#"{"name":"a b Kiwi","description":"","image":"data:image/svg+xml;base64,%%%"}"#;
        let raw = uri::encode("data:application/json;base64", json.as_bytes());
        assert!(matches!(
            DecodedAsset::decode(&raw),
            Err(AssetError::Image(DecodeError::InvalidBase64(_)))
        ));
    }
}
