//! Tire size normalization
//!
//! Manufacturer size strings arrive in many shapes: `235/45ZR19 95W`,
//! `225 / 55 R18`, `235/45R19`. The canonical form used as the join key
//! between fitment data and inventory is `WWW/AARNN` (section width, aspect
//! ratio, rim diameter) with the load index, speed rating, and the `Z` speed
//! symbol stripped.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Loose pattern that locates a size token inside a raw string. Tolerates
/// stray whitespace around the slash and before the rim diameter, and an
/// optional Z speed symbol before R.
static SIZE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3}\s*/\s*[0-9]{2}\s*Z?R\s*[0-9]{2}").expect("Invalid regex"));

/// Strict shape a cleaned token must match to be canonical.
static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})/([0-9]{2})R([0-9]{2})$").expect("Invalid regex"));

/// A validated canonical tire size, e.g. `235/45R19`.
///
/// Construction goes through [`FromStr`] (strict, `WWW/AARNN` only) or
/// [`normalize`] (lenient, extracts the canonical token from free-form
/// input). Serializes as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TireSize {
    width: u16,
    aspect: u8,
    rim: u8,
}

impl TireSize {
    /// Section width in millimeters
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Aspect ratio (sidewall height as a percentage of width)
    pub fn aspect(&self) -> u8 {
        self.aspect
    }

    /// Rim diameter in inches
    pub fn rim(&self) -> u8 {
        self.rim
    }
}

impl std::fmt::Display for TireSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}/{:02}R{:02}", self.width, self.aspect, self.rim)
    }
}

/// Error for strings that are not in canonical form
#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a canonical tire size (expected WWW/AARNN, e.g. 235/45R19)")]
pub struct SizeParseError(String);

impl FromStr for TireSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CANONICAL
            .captures(s)
            .ok_or_else(|| SizeParseError(s.to_string()))?;
        let parse_err = || SizeParseError(s.to_string());
        Ok(TireSize {
            width: caps[1].parse().map_err(|_| parse_err())?,
            aspect: caps[2].parse().map_err(|_| parse_err())?,
            rim: caps[3].parse().map_err(|_| parse_err())?,
        })
    }
}

impl Serialize for TireSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TireSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Extract the canonical size from a free-form size string.
///
/// Uppercases and trims, locates the first size-shaped token, strips internal
/// whitespace, collapses the first `ZR` into `R`, then re-validates against
/// the strict canonical shape. A trailing load/speed suffix (`95W`) is
/// dropped, never part of the match attempt. Returns `None` when no canonical
/// token can be extracted.
pub fn normalize(raw: &str) -> Option<TireSize> {
    let upper = raw.trim().to_uppercase();
    let token = SIZE_TOKEN.find(&upper)?.as_str();
    let cleaned: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.replacen("ZR", "R", 1);
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_speed_symbol_and_suffix() {
        let size = normalize("235/45ZR19 95W").unwrap();
        assert_eq!(size.to_string(), "235/45R19");
    }

    #[test]
    fn test_normalize_already_canonical_unchanged() {
        let size = normalize("225/55R18").unwrap();
        assert_eq!(size.to_string(), "225/55R18");
    }

    #[test]
    fn test_normalize_garbage_is_none() {
        assert!(normalize("garbage").is_none());
    }

    #[test]
    fn test_normalize_empty_is_none() {
        assert!(normalize("").is_none());
        assert!(normalize("   ").is_none());
    }

    #[test]
    fn test_normalize_tolerates_internal_whitespace() {
        let size = normalize("235 / 45 ZR 19").unwrap();
        assert_eq!(size.to_string(), "235/45R19");
    }

    #[test]
    fn test_normalize_lowercase_input() {
        let size = normalize("235/45zr19").unwrap();
        assert_eq!(size.to_string(), "235/45R19");
    }

    #[test]
    fn test_normalize_token_embedded_in_description() {
        let size = normalize("Michelin Pilot Sport 4S 255/35ZR20 (97Y) XL").unwrap();
        assert_eq!(size.to_string(), "255/35R20");
    }

    #[test]
    fn test_normalize_two_digit_width_is_none() {
        assert!(normalize("95/45R17").is_none());
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["235/45ZR19 95W", "225/55R18", "205 / 60 R 16 92H"] {
            let first = normalize(raw).unwrap();
            assert_eq!(normalize(&first.to_string()), Some(first));
        }
    }

    #[test]
    fn test_from_str_strict_rejects_loose_input() {
        assert!("235/45ZR19".parse::<TireSize>().is_err());
        assert!("235 /45R19".parse::<TireSize>().is_err());
        assert!("235/45R19 95W".parse::<TireSize>().is_err());
    }

    #[test]
    fn test_from_str_accepts_canonical() {
        let size: TireSize = "235/45R19".parse().unwrap();
        assert_eq!(size.width(), 235);
        assert_eq!(size.aspect(), 45);
        assert_eq!(size.rim(), 19);
    }

    #[test]
    fn test_serde_round_trip() {
        let size: TireSize = "235/45R19".parse().unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"235/45R19\"");
        let back: TireSize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);
    }
}
