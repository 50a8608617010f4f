//! Configuration structures for the wayfinding engine
//!
//! This module contains the CLI argument definitions, the optional JSON
//! configuration file structure, and the resolved configuration used by the
//! front end. Precedence is CLI arguments over file settings over defaults.

use super::{LayoutStyle, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default number of floors offered when no floor directory is available
pub const DEFAULT_FLOORS: u32 = 11;

/// Default number of rooms synthesized per floor
pub const DEFAULT_ROOMS_PER_FLOOR: usize = 27;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "Indoor wayfinder - synthesizes floor maps and routes from the nearest elevator",
    long_about = "Synthesizes a navigable floor grid for a chosen floor and computes the route
from the nearest elevator (or entrance) to a destination room.

EXAMPLES:
    # Show the rooms available on floor 3
    wayfinder --floor 3 --list-rooms

    # Route to room R305 on floor 3
    wayfinder --floor 3 --room R305

    # Bare room numbers are resolved against the selected floor
    wayfinder --floor 3 --room 5

    # Use an authoritative grid file, falling back to local synthesis
    wayfinder --floor 3 --room R305 --grid-file floors.json

    # Emit the route in the JSON wire shape
    wayfinder --floor 3 --room R305 --output-format json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON format)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments override file settings."
    )]
    pub config: Option<String>,

    /// Floor to map and route on
    #[arg(short, long, help = "Floor number to map")]
    pub floor: Option<u32>,

    /// Destination room (id like R305, or a bare room number)
    #[arg(
        short,
        long,
        help = "Destination room",
        long_help = "Destination room as a full id (R305) or a bare number (5, 05) resolved against the selected floor."
    )]
    pub room: Option<String>,

    /// Number of floors the building has
    #[arg(long, help = "Number of floors in the building")]
    pub floors: Option<u32>,

    /// Number of rooms to synthesize per floor
    #[arg(long, help = "Rooms synthesized per floor")]
    pub rooms_per_floor: Option<usize>,

    /// Layout style used by the synthesizer
    #[arg(
        long,
        help = "Layout style (open-spiral or atrium-ring)",
        long_help = "Layout style used by the grid synthesizer. Supported: open-spiral, atrium-ring. Default: atrium-ring"
    )]
    pub layout: Option<String>,

    /// Authoritative grid file (JSON), with local synthesis as fallback
    #[arg(
        long,
        help = "Authoritative grid JSON file",
        long_help = "Path to a JSON file holding a 10x10 grid of cell tags, or an object mapping floor numbers to grids. If the file is missing, malformed, or fails validation, the grid is synthesized locally instead."
    )]
    pub grid_file: Option<String>,

    /// Output format for the computed route
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the computed route. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// List the available floors and exit
    #[arg(long, help = "List available floors and exit")]
    pub list_floors: bool,

    /// List the rooms on the selected floor and exit
    #[arg(long, help = "List rooms on the selected floor and exit")]
    pub list_rooms: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without routing
    #[arg(long, help = "Validate configuration without computing a route")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of floors the building has
    pub floors: Option<u32>,

    /// Number of rooms to synthesize per floor
    pub rooms_per_floor: Option<usize>,

    /// Layout style used by the synthesizer
    pub layout: Option<String>,

    /// Authoritative grid file path
    pub grid_file: Option<String>,

    /// Output format for the computed route
    pub output_format: Option<String>,
}

impl ConfigFile {
    /// Load a partial configuration from a JSON file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Resolved configuration for the wayfinding front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayfinderConfig {
    /// Number of floors the building has
    pub floors: u32,

    /// Number of rooms to synthesize per floor
    pub rooms_per_floor: usize,

    /// Layout style used by the synthesizer
    pub layout: LayoutStyle,

    /// Authoritative grid file path, if any
    pub grid_file: Option<String>,

    /// Output format for the computed route
    pub output_format: OutputFormat,
}

impl Default for WayfinderConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            rooms_per_floor: DEFAULT_ROOMS_PER_FLOOR,
            layout: LayoutStyle::AtriumRing,
            grid_file: None,
            output_format: OutputFormat::Text,
        }
    }
}

impl WayfinderConfig {
    /// Resolve the configuration from CLI arguments and an optional file
    ///
    /// CLI arguments override file settings, which override defaults.
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let defaults = Self::default();
        let layout = parse_field("layout", args.layout.as_deref().or(file.layout.as_deref()))?
            .unwrap_or(defaults.layout);
        let output_format = parse_field(
            "output_format",
            args.output_format.as_deref().or(file.output_format.as_deref()),
        )?
        .unwrap_or(defaults.output_format);

        Ok(Self {
            floors: args.floors.or(file.floors).unwrap_or(defaults.floors),
            rooms_per_floor: args
                .rooms_per_floor
                .or(file.rooms_per_floor)
                .unwrap_or(defaults.rooms_per_floor),
            layout,
            grid_file: args.grid_file.clone().or(file.grid_file),
            output_format,
        })
    }

    /// Validate the resolved configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.floors == 0 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floors));
        }
        if self.rooms_per_floor == 0 {
            return Err(ConfigValidationError::InvalidRoomCount(self.rooms_per_floor));
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn parse_field<T>(field: &str, value: Option<&str>) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = String>,
{
    match value {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|reason| ConfigError::InvalidValue { field: field.to_string(), reason }),
        None => Ok(None),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field holds a value that cannot be parsed
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Validation errors for the resolved configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Floor count is invalid
    #[error("Floor count must be greater than 0, got {0}")]
    InvalidFloorCount(u32),

    /// Rooms-per-floor count is invalid
    #[error("Rooms per floor must be greater than 0, got {0}")]
    InvalidRoomCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs::parse_from(["wayfinder"])
    }

    #[test]
    fn test_default_config() {
        let config = WayfinderConfig::default();
        assert_eq!(config.floors, DEFAULT_FLOORS);
        assert_eq!(config.rooms_per_floor, DEFAULT_ROOMS_PER_FLOOR);
        assert_eq!(config.layout, LayoutStyle::AtriumRing);
        assert!(config.grid_file.is_none());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let args = CliArgs::parse_from([
            "wayfinder",
            "--floors",
            "4",
            "--rooms-per-floor",
            "12",
            "--layout",
            "open-spiral",
            "--output-format",
            "json",
        ]);
        let config = WayfinderConfig::from_cli_args(&args).unwrap();
        assert_eq!(config.floors, 4);
        assert_eq!(config.rooms_per_floor, 12);
        assert_eq!(config.layout, LayoutStyle::OpenSpiral);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let args = CliArgs::parse_from(["wayfinder", "--layout", "hexagonal"]);
        let err = WayfinderConfig::from_cli_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "layout"));
    }

    #[test]
    fn test_validation_rejects_zero_counts() {
        let mut config = WayfinderConfig::default();
        config.floors = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidFloorCount(0)));

        let mut config = WayfinderConfig::default();
        config.rooms_per_floor = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidRoomCount(0)));
    }

    #[test]
    fn test_missing_config_file() {
        let mut args = base_args();
        args.config = Some("/definitely/not/here.json".to_string());
        let err = WayfinderConfig::from_cli_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_print_json_round_trip() {
        let config = WayfinderConfig::default();
        let json = config.print_json().unwrap();
        let back: WayfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
