//! HTTP request handlers

pub mod calendar;
pub mod health;
pub mod market;
pub mod profile;
pub mod schemes;
pub mod weather;

pub use calendar::*;
pub use health::*;
pub use market::*;
pub use profile::*;
pub use schemes::*;
pub use weather::*;
