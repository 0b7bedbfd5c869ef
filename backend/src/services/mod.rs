//! Business logic services for the AgriGuide Farmer Assistance Platform

pub mod market;
pub mod schemes;
pub mod weather;

pub use market::MarketService;
pub use schemes::SchemeService;
pub use weather::WeatherService;
