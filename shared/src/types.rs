//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The location a weather query is issued for
///
/// Exactly one variant is active at a time. Switching between a profile
/// city and device coordinates is an explicit mode change, never a merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationQuery {
    /// Query by city name (already normalized)
    City(String),
    /// Query by device GPS coordinates
    Coordinates(GpsCoordinates),
    /// No location available, nothing to query
    #[default]
    None,
}

impl LocationQuery {
    pub fn is_none(&self) -> bool {
        matches!(self, LocationQuery::None)
    }
}
