//! Core types, identifiers, and configuration
//!
//! This module contains the shared vocabulary of the wayfinding engine:
//! room identifiers, layout/output enumerations, and the configuration
//! structures used by the command line front end.

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::{CliArgs, ConfigError, ConfigFile, ConfigValidationError, WayfinderConfig};
pub use enums::{LayoutStyle, OutputFormat};
pub use identifiers::RoomId;
