//! Shared types and logic for the AgriGuide farmer assistance platform
//!
//! This crate contains types and pure domain logic shared between the
//! backend, frontend (via WASM), and other components of the system.

pub mod catalog;
pub mod eligibility;
pub mod location;
pub mod models;
pub mod types;
pub mod validation;
pub mod weather_machine;

pub use models::*;
pub use types::*;
pub use validation::*;
pub use weather_machine::*;
