//! Crop calendar models

use serde::{Deserialize, Serialize};

/// Indian cropping season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif"),
            Season::Rabi => write!(f, "Rabi"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

/// Sowing and harvest window for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropWindow {
    pub crop: String,
    /// e.g. "June-July"
    pub sowing: String,
    /// e.g. "November-December"
    pub harvest: String,
}

/// Calendar entry for one season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCalendar {
    pub season: Season,
    /// Months the season spans, e.g. "June-October"
    pub months: String,
    pub crops: Vec<CropWindow>,
}
