//! Detection configuration.
//!
//! Options are supplied by the caller per invocation. They deserialize from
//! the editor's camelCase JSON (`detectionRadius`, `allowCycles`, ...) and
//! fall back to the defaults below for absent fields.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default search radius, in canvas units.
pub const DEFAULT_DETECTION_RADIUS: f64 = 350.0;

/// A `right` neighbour closer than this is a horizontal candidate.
pub const DEFAULT_HORIZONTAL_ZONE: f64 = 250.0;

/// A `below` neighbour closer than this is a vertical candidate.
pub const DEFAULT_VERTICAL_ZONE: f64 = 150.0;

/// In mixed mode, any neighbour closer than this is a candidate.
pub const DEFAULT_DIAGONAL_ZONE: f64 = 300.0;

/// Which directional rule governs eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    /// Left-to-right flows only.
    Horizontal,
    /// Top-to-bottom flows only.
    Vertical,
    /// Either flow, plus any sufficiently close pair.
    #[default]
    Mixed,
    /// A mode string this crate does not know. Never connects anything.
    /// The original string is not kept: it serializes back as `"unrecognized"`.
    #[serde(other)]
    Unrecognized,
}

impl std::str::FromStr for ConnectionMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            "mixed" => Self::Mixed,
            _ => Self::Unrecognized,
        })
    }
}

/// Mode-specific maximum distances (strict upper bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneThresholds {
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_HORIZONTAL_ZONE,
            vertical: DEFAULT_VERTICAL_ZONE,
            diagonal: DEFAULT_DIAGONAL_ZONE,
        }
    }
}

/// Caller-supplied detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionOptions {
    pub detection_radius: f64,
    pub mode: ConnectionMode,
    pub allow_cycles: bool,
    pub zones: ZoneThresholds,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            detection_radius: DEFAULT_DETECTION_RADIUS,
            mode: ConnectionMode::default(),
            allow_cycles: false,
            zones: ZoneThresholds::default(),
        }
    }
}

impl DetectionOptions {
    pub fn new(detection_radius: f64, mode: ConnectionMode) -> Self {
        Self { detection_radius, mode, ..Self::default() }
    }

    pub fn with_allow_cycles(mut self, allow: bool) -> Self {
        self.allow_cycles = allow;
        self
    }

    pub fn with_zones(mut self, zones: ZoneThresholds) -> Self {
        self.zones = zones;
        self
    }

    /// Parse options from the editor's JSON form and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject radii and zones that are not positive finite numbers.
    pub fn validate(&self) -> Result<()> {
        check_positive("detectionRadius", self.detection_radius)?;
        check_positive("zones.horizontal", self.zones.horizontal)?;
        check_positive("zones.vertical", self.zones.vertical)?;
        check_positive("zones.diagonal", self.zones.diagonal)?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOptions(format!("{field} must be a positive finite number, got {value}")))
    }
}
