//! Farmer profile models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The farmer profile
///
/// Exactly one profile exists per installation. It is replaced wholesale on
/// every save, never patched field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerProfile {
    pub id: Uuid,
    pub name: String,
    /// Age in years, unset when the farmer has not filled it in
    pub age: Option<u32>,
    pub state: String,
    pub district: String,
    pub city: String,
    /// Land holding in acres
    pub land_size_acres: Option<Decimal>,
    pub crops: Vec<String>,
    /// Annual income in rupees
    pub annual_income: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields as submitted by the farmer
///
/// Numeric fields stay `None` when left blank. A blank field is not zero:
/// zero income is a valid, present value that participates in eligibility
/// bounds, while an unset field never matches a bound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: Option<u32>,
    pub state: String,
    pub district: String,
    pub city: String,
    pub land_size_acres: Option<Decimal>,
    pub crops: Vec<String>,
    pub annual_income: Option<Decimal>,
}

impl FarmerProfile {
    /// Create a fresh profile from submitted fields
    pub fn new(draft: ProfileDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            age: draft.age,
            state: draft.state,
            district: draft.district,
            city: draft.city,
            land_size_acres: draft.land_size_acres,
            crops: draft.crops,
            annual_income: draft.annual_income,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all fields from a new submission, keeping the identity
    pub fn apply(&mut self, draft: ProfileDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.state = draft.state;
        self.district = draft.district;
        self.city = draft.city;
        self.land_size_acres = draft.land_size_acres;
        self.crops = draft.crops;
        self.annual_income = draft.annual_income;
        self.updated_at = Utc::now();
    }
}
