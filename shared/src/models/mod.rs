//! Domain models for the AgriGuide farmer assistance platform

mod calendar;
mod farmer;
mod market;
mod scheme;
mod weather;

pub use calendar::*;
pub use farmer::*;
pub use market::*;
pub use scheme::*;
pub use weather::*;
