//! Government scheme and eligibility models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A government assistance scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub criteria: EligibilityCriteria,
    pub benefits: Vec<String>,
    pub documents: Vec<String>,
    pub application_process: String,
    pub website_url: String,
}

/// Eligibility constraints for a scheme
///
/// Every field is optional. An absent criterion is unconstrained and is
/// always considered satisfied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EligibilityCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_annual_income: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_land_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_land_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Allowed states, satisfied by exact membership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    /// Satisfied when the profile grows at least one of these crops
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_crops: Option<Vec<String>>,
}

impl EligibilityCriteria {
    /// True when the scheme places no constraints at all
    pub fn is_unconstrained(&self) -> bool {
        self.max_annual_income.is_none()
            && self.min_land_size.is_none()
            && self.max_land_size.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.states.is_none()
            && self.required_crops.is_none()
    }
}

/// The individual criteria a scheme can constrain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    MaxAnnualIncome,
    MinLandSize,
    MaxLandSize,
    MinAge,
    MaxAge,
    States,
    RequiredCrops,
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::MaxAnnualIncome => write!(f, "Maximum annual income"),
            Criterion::MinLandSize => write!(f, "Minimum land size"),
            Criterion::MaxLandSize => write!(f, "Maximum land size"),
            Criterion::MinAge => write!(f, "Minimum age"),
            Criterion::MaxAge => write!(f, "Maximum age"),
            Criterion::States => write!(f, "Eligible states"),
            Criterion::RequiredCrops => write!(f, "Required crops"),
        }
    }
}

/// Outcome of checking one criterion against a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriterionMatch {
    pub criterion: Criterion,
    pub matched: bool,
}

/// Eligibility outcome for one scheme
///
/// `matched` lists only the criteria the scheme actually defines, in a
/// fixed order, so the caller can explain which constraints passed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub matched: Vec<CriterionMatch>,
}

impl EligibilityResult {
    /// Look up the outcome for a single criterion, if the scheme defines it
    pub fn criterion(&self, criterion: Criterion) -> Option<bool> {
        self.matched
            .iter()
            .find(|m| m.criterion == criterion)
            .map(|m| m.matched)
    }
}
