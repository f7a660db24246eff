//! Data URI decoding
//!
//! Token metadata is served on-chain as `data:<media type>;base64,<payload>`.
//! The same shape is used twice per asset: the token URI itself carries the
//! JSON metadata, and the metadata's `image` field carries the SVG.
//!
//! Everything before the first `,` is a header and is ignored by the decoder.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::prelude::*;

/// Standard alphabet, accepting payloads with or without trailing `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors that make a payload undecodable
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed payload: no ',' separating header from data")]
    MissingDelimiter,

    #[error("Malformed payload: invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Malformed payload: decoded data is not UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A `<header>,<payload>` string split at its first comma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// Everything before the first comma (e.g. `data:image/svg+xml;base64`)
    pub header: &'a str,
    /// Base64 text after the first comma
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Split a raw record at its first comma.
    pub fn parse(raw: &'a str) -> Result<Self, DecodeError> {
        let (header, payload) = raw.split_once(',').ok_or(DecodeError::MissingDelimiter)?;
        Ok(Self { header, payload })
    }

    /// Media type declared in the header, without the `data:` scheme or parameters.
    ///
    /// `data:application/json;base64` -> `application/json`
    pub fn media_type(&self) -> &'a str {
        let header = self.header.trim_start();
        let header = header.strip_prefix("data:").unwrap_or(header);
        header.split(';').next().unwrap_or_default()
    }

    /// Whether the header declares a `;base64` parameter.
    ///
    /// Informational only: the payload is always decoded as base64.
    pub fn declares_base64(&self) -> bool {
        self.header
            .split(';')
            .skip(1)
            .any(|param| param.trim().eq_ignore_ascii_case("base64"))
    }

    /// Decode the payload into raw bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        // Cached records usually end with a newline; whitespace is never part of the alphabet.
        let cleaned: String;
        let payload = if self.payload.bytes().any(|b| b.is_ascii_whitespace()) {
            cleaned = self
                .payload
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            &cleaned
        } else {
            self.payload
        };

        Ok(PAYLOAD_ENGINE.decode(payload)?)
    }

    /// Decode the payload into UTF-8 text.
    pub fn decode_text(&self) -> Result<String, DecodeError> {
        Ok(String::from_utf8(self.decode_bytes()?)?)
    }
}

/// Decode a `<header>,<base64>` string into raw bytes.
pub fn decode_bytes(raw: &str) -> Result<Vec<u8>, DecodeError> {
    DataUri::parse(raw)?.decode_bytes()
}

/// Decode a `<header>,<base64>` string into text.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    DataUri::parse(raw)?.decode_text()
}

/// Inverse of [`decode_bytes`]: build a `<header>,<base64>` string.
pub fn encode(header: &str, bytes: &[u8]) -> String {
    format!("{},{}", header, BASE64_STANDARD.encode(bytes))
}
