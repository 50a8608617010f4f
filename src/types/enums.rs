//! Enumeration types for the wayfinding engine
//!
//! This module contains the layout-variant selector used by the grid
//! synthesizer and the output format selector used by the CLI front end.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named layout variants understood by the grid synthesizer
///
/// The variants are configurations of one synthesis algorithm, not separate
/// algorithms: each selects a fixed set of facility positions and an
/// optional central hole region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStyle {
    /// Open floor with no hole; lifts are doorway cells on the border
    OpenSpiral,
    /// Central 4x4 atrium hole ringed by corridor; lifts sit on the ring
    AtriumRing,
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutStyle::OpenSpiral => write!(f, "open-spiral"),
            LayoutStyle::AtriumRing => write!(f, "atrium-ring"),
        }
    }
}

impl FromStr for LayoutStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open-spiral" | "openspiral" | "open" => Ok(LayoutStyle::OpenSpiral),
            "atrium-ring" | "atriumring" | "atrium" | "ring" => Ok(LayoutStyle::AtriumRing),
            _ => Err(format!("Unknown layout style: {}", s)),
        }
    }
}

impl Serialize for LayoutStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LayoutStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Output formats supported by the CLI front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// ASCII map plus a numbered step list
    Text,
    /// The `{"path": ..., "labels": ...}` wire shape
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl Serialize for OutputFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_style_round_trip() {
        for style in [LayoutStyle::OpenSpiral, LayoutStyle::AtriumRing] {
            let parsed: LayoutStyle = style.to_string().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_layout_style_aliases() {
        assert_eq!("open".parse::<LayoutStyle>().unwrap(), LayoutStyle::OpenSpiral);
        assert_eq!("ATRIUM".parse::<LayoutStyle>().unwrap(), LayoutStyle::AtriumRing);
        assert!("spiral-ring".parse::<LayoutStyle>().is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&LayoutStyle::AtriumRing).unwrap(), "\"atrium-ring\"");
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");

        let style: LayoutStyle = serde_json::from_str("\"open-spiral\"").unwrap();
        assert_eq!(style, LayoutStyle::OpenSpiral);
    }
}
