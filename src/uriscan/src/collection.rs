//! Sub-collection routing
//!
//! Asset names follow `"<word> <word> <Variant> ..."`; the third
//! whitespace-separated token names the sub-collection the asset belongs to.

use serde::Serialize;
use std::fmt;

use crate::metadata::Metadata;

/// Position of the variant token in `Metadata::name`
pub const VARIANT_TOKEN_POSITION: usize = 2;

/// Known sub-collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Variant {
    Kiwi,
    Dragonfly,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Kiwi, Variant::Dragonfly];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Kiwi => "Kiwi",
            Variant::Dragonfly => "Dragonfly",
        }
    }

    /// Exact, case-sensitive match on the name token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == token)
    }
}

/// Key of one distribution counter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectionKey {
    Variant(Variant),
    /// Single counter set used when routing by variant is disabled
    All,
}

impl CollectionKey {
    pub fn name(self) -> &'static str {
        match self {
            CollectionKey::Variant(v) => v.name(),
            CollectionKey::All => "All",
        }
    }
}

impl From<Variant> for CollectionKey {
    fn from(variant: Variant) -> Self {
        CollectionKey::Variant(variant)
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CollectionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The asset name does not identify a known sub-collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown variant {discriminator:?} in name {name:?}")]
    UnknownVariant { name: String, discriminator: String },

    #[error("name {name:?} has no variant token")]
    MissingDiscriminator { name: String },
}

/// Select the counter set for an asset from its name.
pub fn route(metadata: &Metadata) -> Result<CollectionKey, RouteError> {
    let discriminator = metadata.name_token(VARIANT_TOKEN_POSITION).ok_or_else(|| {
        RouteError::MissingDiscriminator {
            name: metadata.name.clone(),
        }
    })?;

    Variant::from_token(discriminator)
        .map(CollectionKey::from)
        .ok_or_else(|| RouteError::UnknownVariant {
            name: metadata.name.clone(),
            discriminator: discriminator.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Metadata {
        Metadata {
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_route_known_variants() {
        assert_eq!(
            route(&named("X Y Kiwi")),
            Ok(CollectionKey::Variant(Variant::Kiwi))
        );
        assert_eq!(
            route(&named("Shape #3 Dragonfly edition")),
            Ok(CollectionKey::Variant(Variant::Dragonfly))
        );
    }

    #[test]
    fn test_route_unknown_variant() {
        let err = route(&named("X Y Falcon")).unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownVariant {
                name: "X Y Falcon".to_string(),
                discriminator: "Falcon".to_string(),
            }
        );
        // Case-sensitive, no fuzzy match
        assert!(route(&named("X Y kiwi")).is_err());
        assert!(route(&named("Kiwi Y Z")).is_err());
    }

    #[test]
    fn test_route_short_name() {
        assert!(matches!(
            route(&named("Kiwi")),
            Err(RouteError::MissingDiscriminator { .. })
        ));
        assert!(matches!(
            route(&named("")),
            Err(RouteError::MissingDiscriminator { .. })
        ));
    }

    #[test]
    fn test_route_is_deterministic() {
        let meta = named("A B Falcon");
        assert_eq!(route(&meta), route(&meta));
        let meta = named("A B Kiwi");
        assert_eq!(route(&meta), route(&meta));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(CollectionKey::from(Variant::Dragonfly).to_string(), "Dragonfly");
        assert_eq!(CollectionKey::All.to_string(), "All");
    }
}
