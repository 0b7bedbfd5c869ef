//! Validation utilities for the AgriGuide farmer assistance platform
//!
//! Includes India-specific validations for farmer profile data.

use rust_decimal::Decimal;

// ============================================================================
// Farmer Profile Validations
// ============================================================================

/// Validate farmer name is non-empty
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    Ok(())
}

/// Validate farmer age is in the supported range (18-120)
pub fn validate_age(age: u32) -> Result<(), &'static str> {
    if age < 18 {
        return Err("Age must be at least 18");
    }
    if age > 120 {
        return Err("Age must be at most 120");
    }
    Ok(())
}

/// Validate land holding size is non-negative
pub fn validate_land_size(land_size_acres: Decimal) -> Result<(), &'static str> {
    if land_size_acres < Decimal::ZERO {
        return Err("Land size cannot be negative");
    }
    Ok(())
}

/// Validate annual income is non-negative
pub fn validate_annual_income(annual_income: Decimal) -> Result<(), &'static str> {
    if annual_income < Decimal::ZERO {
        return Err("Annual income cannot be negative");
    }
    Ok(())
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// Indian states and union territories
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Validate state is a recognized Indian state or union territory
pub fn validate_state(state: &str) -> Result<(), &'static str> {
    let state_lower = state.to_lowercase();

    if INDIAN_STATES.iter().any(|s| s.to_lowercase() == state_lower) {
        return Ok(());
    }

    Err("State is not a recognized Indian state or union territory")
}

/// Crops covered by assistance programmes and market tracking
pub const ASSISTED_CROPS: &[&str] = &["Rice", "Wheat", "Cotton", "Sugarcane", "Pulses"];

/// Check if a crop is covered by assistance programmes
pub fn is_assisted_crop(crop: &str) -> bool {
    let crop_lower = crop.to_lowercase();
    ASSISTED_CROPS.iter().any(|c| c.to_lowercase() == crop_lower)
}
