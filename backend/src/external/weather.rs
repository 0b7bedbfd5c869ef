//! Weather API client for fetching forecast data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::types::{GpsCoordinates, LocationQuery};
use shared::{DayForecast, WeatherCondition, WeatherSnapshot};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    country_code: String,
    base_url: String,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    rain: Option<OWMForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OWMForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, country_code: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            country_code,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, country_code: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            country_code,
            base_url,
        }
    }

    /// Fetch a weather snapshot for the given location query
    pub async fn fetch(&self, query: &LocationQuery) -> AppResult<WeatherSnapshot> {
        match query {
            LocationQuery::City(city) => self.fetch_by_city(city).await,
            LocationQuery::Coordinates(coords) => self.fetch_by_coordinates(coords).await,
            LocationQuery::None => Err(AppError::Internal(
                "No location to fetch weather for".to_string(),
            )),
        }
    }

    /// Fetch the forecast for a city name
    pub async fn fetch_by_city(&self, city: &str) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/forecast?q={},{}&units=metric&appid={}",
            self.base_url, city, self.country_code, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))?;

        convert_forecast_response(data)
    }

    /// Fetch the forecast for GPS coordinates
    pub async fn fetch_by_coordinates(
        &self,
        coords: &GpsCoordinates,
    ) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coords.latitude, coords.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))?;

        convert_forecast_response(data)
    }
}

/// Convert an OpenWeatherMap forecast response to a weather snapshot
///
/// The first list entry is the current reading. The outlook picks the
/// entries 24 and 48 hours ahead (the list carries one entry per 3 hours).
fn convert_forecast_response(data: OWMForecastResponse) -> AppResult<WeatherSnapshot> {
    let current = data
        .list
        .first()
        .ok_or_else(|| AppError::Internal("Weather API returned an empty forecast".to_string()))?;

    let forecast = data
        .list
        .iter()
        .step_by(8)
        .skip(1)
        .take(2)
        .map(|item| DayForecast {
            day: DateTime::from_timestamp(item.dt, 0)
                .unwrap_or_else(Utc::now)
                .format("%A")
                .to_string(),
            temperature_celsius: item.main.temp.round() as i32,
            condition: condition_of(item),
        })
        .collect();

    Ok(WeatherSnapshot {
        location_name: data.city.name.clone(),
        temperature_celsius: current.main.temp.round() as i32,
        condition: condition_of(current),
        humidity_percent: current.main.humidity,
        rainfall_3h_mm: current
            .rain
            .as_ref()
            .and_then(|r| r.three_hour)
            .map(|v| Decimal::from_f64_retain(v).unwrap_or_default())
            .unwrap_or(Decimal::ZERO),
        forecast,
        fetched_at: Utc::now(),
    })
}

fn condition_of(item: &OWMForecastItem) -> WeatherCondition {
    WeatherCondition::from_provider(item.weather.first().map(|w| w.main.as_str()).unwrap_or(""))
}
