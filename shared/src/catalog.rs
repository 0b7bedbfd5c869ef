//! Static catalogs: government schemes, crop seasons and market seed data
//!
//! Loaded once at startup and never mutated at runtime. Scheme criteria
//! mirror the published programme rules.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{
    CropPrice, CropWindow, EligibilityCriteria, PriceTrend, Scheme, Season, SeasonCalendar,
};

/// The central government schemes the portal evaluates
pub fn scheme_catalog() -> Vec<Scheme> {
    vec![
        Scheme {
            id: "pm-kisan".to_string(),
            name: "PM-KISAN".to_string(),
            description: "Direct income support of ₹6,000 per year to farmer families".to_string(),
            criteria: EligibilityCriteria {
                max_annual_income: Some(Decimal::from(100_000)),
                min_land_size: Some(Decimal::new(1, 2)),
                ..Default::default()
            },
            benefits: vec![
                "Direct income support of ₹6,000 per year".to_string(),
                "Amount released in three installments".to_string(),
                "Direct transfer to bank accounts".to_string(),
            ],
            documents: vec![
                "Aadhaar Card".to_string(),
                "Land Records".to_string(),
                "Bank Account Details".to_string(),
            ],
            application_process:
                "Apply through the PM-KISAN portal or visit your local agriculture office"
                    .to_string(),
            website_url: "https://pmkisan.gov.in/".to_string(),
        },
        Scheme {
            id: "pmfby".to_string(),
            name: "Pradhan Mantri Fasal Bima Yojana".to_string(),
            description: "Crop insurance scheme to protect farmers from crop failure".to_string(),
            criteria: EligibilityCriteria {
                min_land_size: Some(Decimal::new(1, 1)),
                ..Default::default()
            },
            benefits: vec![
                "Comprehensive risk coverage".to_string(),
                "Low premium rates".to_string(),
                "Use of technology for quick claim settlement".to_string(),
            ],
            documents: vec![
                "Land Records".to_string(),
                "Bank Account Details".to_string(),
                "Sowing Certificate".to_string(),
            ],
            application_process:
                "Register through banks or insurance companies during crop season".to_string(),
            website_url: "https://pmfby.gov.in/".to_string(),
        },
        Scheme {
            id: "kcc".to_string(),
            name: "Kisan Credit Card".to_string(),
            description: "Provides farmers with timely access to credit".to_string(),
            criteria: EligibilityCriteria {
                min_age: Some(18),
                max_age: Some(75),
                ..Default::default()
            },
            benefits: vec![
                "Short-term credit for cultivation".to_string(),
                "Post-harvest expenses".to_string(),
                "Maintenance of farm assets".to_string(),
                "Insurance coverage".to_string(),
            ],
            documents: vec![
                "Identity Proof".to_string(),
                "Address Proof".to_string(),
                "Land Records".to_string(),
                "Passport Size Photographs".to_string(),
                "Bank Account Details".to_string(),
            ],
            application_process:
                "Apply through your nearest bank branch or online banking portal".to_string(),
            website_url: "https://www.india.gov.in/spotlight/kisan-credit-card".to_string(),
        },
        Scheme {
            id: "pkvy".to_string(),
            name: "Paramparagat Krishi Vikas Yojana".to_string(),
            description: "Promotes organic farming practices".to_string(),
            criteria: EligibilityCriteria {
                min_land_size: Some(Decimal::new(5, 1)),
                ..Default::default()
            },
            benefits: vec![
                "Financial assistance for organic farming".to_string(),
                "Training on organic farming".to_string(),
                "Certification support".to_string(),
                "Marketing assistance".to_string(),
            ],
            documents: vec![
                "Land Records".to_string(),
                "Bank Account Details".to_string(),
                "Farmer ID".to_string(),
                "Soil Test Reports".to_string(),
            ],
            application_process:
                "Apply through your local agriculture department or PKVY portal".to_string(),
            website_url: "https://pgsindia-ncof.gov.in/pkvy/index.aspx".to_string(),
        },
        Scheme {
            id: "nmsa".to_string(),
            name: "National Mission for Sustainable Agriculture".to_string(),
            description: "Promotes sustainable agriculture practices".to_string(),
            criteria: EligibilityCriteria {
                min_land_size: Some(Decimal::new(2, 1)),
                ..Default::default()
            },
            benefits: vec![
                "Water conservation support".to_string(),
                "Soil health management".to_string(),
                "Climate change adaptation measures".to_string(),
                "Market development assistance".to_string(),
            ],
            documents: vec![
                "Land Records".to_string(),
                "Bank Account Details".to_string(),
                "Soil Health Card".to_string(),
                "Identity Proof".to_string(),
            ],
            application_process:
                "Apply through state agriculture department or NMSA portal".to_string(),
            website_url: "https://nmsa.dac.gov.in/".to_string(),
        },
        Scheme {
            id: "smam".to_string(),
            name: "Sub-Mission on Agricultural Mechanization".to_string(),
            description: "Promotes farm mechanization and modern agriculture equipment".to_string(),
            criteria: EligibilityCriteria {
                max_annual_income: Some(Decimal::from(250_000)),
                min_land_size: Some(Decimal::from(1)),
                ..Default::default()
            },
            benefits: vec![
                "Subsidies on purchase of agricultural machinery".to_string(),
                "Custom hiring facilities".to_string(),
                "Training and demonstration of equipment".to_string(),
                "Establishment of farm machinery banks".to_string(),
            ],
            documents: vec![
                "Land Records".to_string(),
                "Income Certificate".to_string(),
                "Bank Account Details".to_string(),
                "Identity Proof".to_string(),
            ],
            application_process:
                "Apply through state agriculture department or authorized dealers".to_string(),
            website_url: "https://farmech.dac.gov.in/".to_string(),
        },
        Scheme {
            id: "midh".to_string(),
            name: "Mission for Integrated Development of Horticulture".to_string(),
            description: "Promotes holistic growth of horticulture sector".to_string(),
            criteria: EligibilityCriteria {
                min_land_size: Some(Decimal::new(2, 1)),
                ..Default::default()
            },
            benefits: vec![
                "Assistance for nursery development".to_string(),
                "Support for protected cultivation".to_string(),
                "Post-harvest management support".to_string(),
                "Market development assistance".to_string(),
            ],
            documents: vec![
                "Land Records".to_string(),
                "Bank Account Details".to_string(),
                "Project Proposal".to_string(),
                "Identity Proof".to_string(),
            ],
            application_process: "Apply through state horticulture department".to_string(),
            website_url: "https://midh.gov.in/".to_string(),
        },
    ]
}

/// Sowing and harvest windows for the three Indian cropping seasons
pub fn crop_calendar() -> Vec<SeasonCalendar> {
    vec![
        SeasonCalendar {
            season: Season::Kharif,
            months: "June-October".to_string(),
            crops: vec![
                CropWindow {
                    crop: "Rice".to_string(),
                    sowing: "June-July".to_string(),
                    harvest: "November-December".to_string(),
                },
                CropWindow {
                    crop: "Cotton".to_string(),
                    sowing: "May-June".to_string(),
                    harvest: "November-December".to_string(),
                },
                CropWindow {
                    crop: "Sugarcane".to_string(),
                    sowing: "June-July".to_string(),
                    harvest: "January-March".to_string(),
                },
            ],
        },
        SeasonCalendar {
            season: Season::Rabi,
            months: "October-March".to_string(),
            crops: vec![
                CropWindow {
                    crop: "Wheat".to_string(),
                    sowing: "October-November".to_string(),
                    harvest: "March-April".to_string(),
                },
                CropWindow {
                    crop: "Mustard".to_string(),
                    sowing: "September-October".to_string(),
                    harvest: "February-March".to_string(),
                },
                CropWindow {
                    crop: "Gram".to_string(),
                    sowing: "October-November".to_string(),
                    harvest: "February-March".to_string(),
                },
            ],
        },
        SeasonCalendar {
            season: Season::Zaid,
            months: "March-June".to_string(),
            crops: vec![
                CropWindow {
                    crop: "Watermelon".to_string(),
                    sowing: "March".to_string(),
                    harvest: "June".to_string(),
                },
                CropWindow {
                    crop: "Muskmelon".to_string(),
                    sowing: "March".to_string(),
                    harvest: "June".to_string(),
                },
                CropWindow {
                    crop: "Cucumber".to_string(),
                    sowing: "March".to_string(),
                    harvest: "June".to_string(),
                },
            ],
        },
    ]
}

/// Baseline mandi prices the market simulation starts from
pub fn market_seed() -> Vec<CropPrice> {
    let now = Utc::now();
    vec![
        CropPrice {
            crop: "Rice".to_string(),
            price: Decimal::from(2000),
            unit: "per quintal".to_string(),
            trend: PriceTrend::Up,
            history: [1950, 1980, 2000, 2050, 1990]
                .iter()
                .map(|p| Decimal::from(*p))
                .collect(),
            updated_at: now,
        },
        CropPrice {
            crop: "Wheat".to_string(),
            price: Decimal::from(2200),
            unit: "per quintal".to_string(),
            trend: PriceTrend::Stable,
            history: [2100, 2150, 2200, 2180, 2220]
                .iter()
                .map(|p| Decimal::from(*p))
                .collect(),
            updated_at: now,
        },
        CropPrice {
            crop: "Cotton".to_string(),
            price: Decimal::from(6500),
            unit: "per quintal".to_string(),
            trend: PriceTrend::Up,
            history: [6200, 6300, 6400, 6500, 6450]
                .iter()
                .map(|p| Decimal::from(*p))
                .collect(),
            updated_at: now,
        },
        CropPrice {
            crop: "Sugarcane".to_string(),
            price: Decimal::from(350),
            unit: "per quintal".to_string(),
            trend: PriceTrend::Up,
            history: [320, 330, 340, 350, 355]
                .iter()
                .map(|p| Decimal::from(*p))
                .collect(),
            updated_at: now,
        },
    ]
}
