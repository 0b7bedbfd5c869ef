//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display category for a weather condition
///
/// Mapped from the provider's condition group. Groups without a display
/// category pass through unchanged in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Rainy,
    Drizzle,
    Thunderstorm,
    Snowy,
    Foggy,
    Other(String),
}

impl WeatherCondition {
    /// Map an OpenWeatherMap condition group to its display category
    pub fn from_provider(condition: &str) -> Self {
        match condition {
            "Clear" => WeatherCondition::Sunny,
            "Clouds" => WeatherCondition::PartlyCloudy,
            "Rain" => WeatherCondition::Rainy,
            "Drizzle" => WeatherCondition::Drizzle,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Snow" => WeatherCondition::Snowy,
            "Mist" | "Fog" | "Haze" => WeatherCondition::Foggy,
            other => WeatherCondition::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "Sunny"),
            WeatherCondition::PartlyCloudy => write!(f, "Partly Cloudy"),
            WeatherCondition::Rainy => write!(f, "Rainy"),
            WeatherCondition::Drizzle => write!(f, "Drizzle"),
            WeatherCondition::Thunderstorm => write!(f, "Thunderstorm"),
            WeatherCondition::Snowy => write!(f, "Snowy"),
            WeatherCondition::Foggy => write!(f, "Foggy"),
            WeatherCondition::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One day of the short forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayForecast {
    /// Weekday label, e.g. "Monday"
    pub day: String,
    pub temperature_celsius: i32,
    pub condition: WeatherCondition,
}

/// A complete weather reading for the widget
///
/// Replaced wholesale on every successful fetch, never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Place name as resolved by the provider
    pub location_name: String,
    pub temperature_celsius: i32,
    pub condition: WeatherCondition,
    pub humidity_percent: i32,
    /// Rain over the last three hours in millimetres
    pub rainfall_3h_mm: Decimal,
    /// Two-day outlook
    pub forecast: Vec<DayForecast>,
    pub fetched_at: DateTime<Utc>,
}
