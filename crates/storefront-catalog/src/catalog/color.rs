//! Canonical color keys.
//!
//! `ColorKey::parse` is the only place a color string becomes a key. Product
//! colors are deserialized through it and user-selected color filters are
//! parsed with it, so everything downstream compares keys by plain equality.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lowercase, 6-digit `#rrggbb` color key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorKey(String);

impl ColorKey {
    /// Normalize a `#rgb` or `#rrggbb` string (any case, surrounding
    /// whitespace allowed) into a canonical key.
    ///
    /// ```
    /// use storefront_catalog::ColorKey;
    /// assert_eq!(ColorKey::parse("#FFF").unwrap().as_str(), "#ffffff");
    /// assert_eq!(ColorKey::parse(" #FFC0CB").unwrap().as_str(), "#ffc0cb");
    /// ```
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidColor(input.to_string());

        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColorKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::parse(s)
    }
}

impl TryFrom<String> for ColorKey {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorKey::parse(&value)
    }
}

impl From<ColorKey> for String {
    fn from(key: ColorKey) -> String {
        key.0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ColorKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_expands() {
        assert_eq!(ColorKey::parse("#fff").unwrap(), ColorKey::parse("#ffffff").unwrap());
        assert_eq!(ColorKey::parse("#a1B").unwrap().as_str(), "#aa11bb");
    }

    #[test]
    fn test_case_is_normalized() {
        let upper = ColorKey::parse("#FFC0CB").unwrap();
        let lower = ColorKey::parse("#ffc0cb").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "#ffc0cb");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "fff", "#ffff", "#gggggg", "#1a1a1a1a", "red"] {
            assert!(
                matches!(ColorKey::parse(bad), Err(CatalogError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_goes_through_parse() {
        let key: ColorKey = serde_json::from_str("\"#1A1A1A\"").unwrap();
        assert_eq!(key.as_str(), "#1a1a1a");
        assert!(serde_json::from_str::<ColorKey>("\"black\"").is_err());
    }
}
