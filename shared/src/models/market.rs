//! Market price models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the most recent price movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    /// Trend implied by a change amount
    pub fn from_change(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            PriceTrend::Up
        } else if change < Decimal::ZERO {
            PriceTrend::Down
        } else {
            PriceTrend::Stable
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTrend::Up => write!(f, "up"),
            PriceTrend::Down => write!(f, "down"),
            PriceTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Market price entry for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropPrice {
    pub crop: String,
    /// Current price in rupees
    pub price: Decimal,
    pub unit: String,
    pub trend: PriceTrend,
    /// Recent prices, oldest first
    pub history: Vec<Decimal>,
    pub updated_at: DateTime<Utc>,
}
