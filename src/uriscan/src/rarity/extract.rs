//! Rarity ratio extraction from rendered SVG
//!
//! The renderer prints the rarity as `<numerator>/<denominator>` inside the
//! first text element styled with a 34px font. There is no structured field
//! for it, so this reads the text at that fixed position.

use super::RarityRatio;

/// Marker that immediately precedes the ratio text
pub const RATIO_ANCHOR: &str = "34px\">";

/// Tag that terminates the ratio text
pub const TEXT_CLOSE: &str = "</text>";

/// Separator between numerator and denominator
pub const RATIO_DELIMITER: char = '/';

/// Errors from locating or parsing the ratio text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("rarity anchor {anchor:?} not found in SVG", anchor = RATIO_ANCHOR)]
    AnchorNotFound,

    #[error("rarity text after anchor is not closed by {close:?}", close = TEXT_CLOSE)]
    Unterminated,

    #[error("rarity text {span:?} is not <integer>/<integer>")]
    RatioParse { span: String },
}

/// Text between the anchor and the next closing `</text>`.
pub fn ratio_span(svg: &str) -> Result<&str, ExtractError> {
    let start = svg
        .find(RATIO_ANCHOR)
        .map(|pos| pos + RATIO_ANCHOR.len())
        .ok_or(ExtractError::AnchorNotFound)?;
    let rest = &svg[start..];
    let end = rest.find(TEXT_CLOSE).ok_or(ExtractError::Unterminated)?;
    Ok(&rest[..end])
}

/// Parse `<integer>/<integer>`, tolerating whitespace around each side.
pub fn parse_ratio(span: &str) -> Result<RarityRatio, ExtractError> {
    let parse_err = || ExtractError::RatioParse {
        span: span.to_string(),
    };

    let mut parts = span.split(RATIO_DELIMITER);
    let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(parse_err());
    };

    let numerator = numerator.trim().parse().map_err(|_| parse_err())?;
    let denominator = denominator.trim().parse().map_err(|_| parse_err())?;

    Ok(RarityRatio {
        numerator,
        denominator,
    })
}

/// Locate and parse the rarity ratio rendered inside `svg`.
pub fn extract_ratio(svg: &str) -> Result<RarityRatio, ExtractError> {
    parse_ratio(ratio_span(svg)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg_with(text: &str) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
                r#"<rect width="100%" height="100%"/>"#,
                r#"<text x="10" y="40" style="font-size:34px">{}</text>"#,
                r#"<text x="10" y="80" style="font-size:12px">footer</text>"#,
                "</svg>"
            ),
            text
        )
    }

    #[test]
    fn test_extract_ratio() {
        let ratio = extract_ratio(&svg_with("2/4")).unwrap();
        assert_eq!(ratio, RarityRatio::new(2, 4));

        let ratio = extract_ratio(&svg_with("13/51")).unwrap();
        assert_eq!(ratio, RarityRatio::new(13, 51));
    }

    #[test]
    fn test_whitespace_around_numbers() {
        let ratio = extract_ratio(&svg_with(" 1 / 2 ")).unwrap();
        assert_eq!(ratio, RarityRatio::new(1, 2));
    }

    #[test]
    fn test_anchor_not_found() {
        let svg = r#"<svg><text style="font-size:12px">2/4</text></svg>"#;
        assert_eq!(extract_ratio(svg), Err(ExtractError::AnchorNotFound));
        assert_eq!(extract_ratio(""), Err(ExtractError::AnchorNotFound));
    }

    #[test]
    fn test_close_tag_is_searched_after_anchor() {
        let svg = r#"<svg><text>title</text><text style="font-size:34px">1/26</text></svg>"#;
        assert_eq!(extract_ratio(svg).unwrap(), RarityRatio::new(1, 26));
    }

    #[test]
    fn test_unterminated() {
        let svg = r#"<svg><text style="font-size:34px">1/2"#;
        assert_eq!(extract_ratio(svg), Err(ExtractError::Unterminated));
    }

    #[test]
    fn test_ratio_parse_errors() {
        for text in ["2", "2/4/8", "a/4", "2/", "/4", "-1/4", "", "2 4"] {
            assert_eq!(
                extract_ratio(&svg_with(text)),
                Err(ExtractError::RatioParse {
                    span: text.to_string()
                }),
                "text {:?}",
                text
            );
        }
    }
}
