//! Top-level error type
//!
//! Aggregates the per-domain error types so the front end can propagate a
//! single error through its setup and routing phases.

use crate::grid::GridValidationError;
use crate::routing::RouteError;
use crate::source::SourceError;
use crate::types::config::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors surfaced by the wayfinder front end
#[derive(Debug, Error)]
pub enum WayfinderError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    ConfigValidation(#[from] ConfigValidationError),

    /// A grid source failed to produce a grid
    #[error("Grid source error: {0}")]
    Source(#[from] SourceError),

    /// A grid failed structural validation
    #[error("Invalid floor grid: {0}")]
    GridValidation(#[from] GridValidationError),

    /// Route search failed
    #[error("Routing failed: {0}")]
    Route(#[from] RouteError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for WayfinderError {
    fn from(error: anyhow::Error) -> Self {
        WayfinderError::Other(error.to_string())
    }
}

/// Result type for wayfinder front-end operations
pub type WayfinderResult<T> = Result<T, WayfinderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    #[test]
    fn test_route_error_conversion() {
        let err: WayfinderError =
            RouteError::NotFound { start: Coord::new(1, 1), goal: Coord::new(2, 2) }.into();
        assert!(matches!(err, WayfinderError::Route(_)));
        assert_eq!(err.to_string(), "Routing failed: No route exists from (1, 1) to (2, 2)");
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: WayfinderError = anyhow::anyhow!("backend unreachable").into();
        assert!(matches!(err, WayfinderError::Other(_)));
        assert_eq!(err.to_string(), "backend unreachable");
    }

    #[test]
    fn test_config_validation_conversion() {
        let err: WayfinderError = ConfigValidationError::InvalidFloorCount(0).into();
        assert!(matches!(err, WayfinderError::ConfigValidation(_)));
    }
}
