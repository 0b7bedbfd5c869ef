//! Market price board
//!
//! Serves the sample mandi price data and drifts it on a fixed interval
//! the way a live feed would.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use shared::catalog;
use shared::{CropPrice, PriceTrend};
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};

const UPDATE_INTERVAL: Duration = Duration::from_secs(30);

/// Lowest simulated price in rupees per quintal
const PRICE_FLOOR: i64 = 1000;

/// Market price board handle, cheap to clone
#[derive(Clone)]
pub struct MarketService {
    inner: Arc<MarketInner>,
}

struct MarketInner {
    entries: Mutex<Vec<PriceEntry>>,
}

struct PriceEntry {
    /// Opening price the random drift stays anchored to
    seed: Decimal,
    current: CropPrice,
}

impl MarketService {
    /// Create the board from the seed catalog
    pub fn new() -> Self {
        let entries = catalog::market_seed()
            .into_iter()
            .map(|price| PriceEntry {
                seed: price.price,
                current: price,
            })
            .collect();

        Self {
            inner: Arc::new(MarketInner {
                entries: Mutex::new(entries),
            }),
        }
    }

    /// Start the periodic price drift
    pub fn spawn_price_updates(&self) {
        let service = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(UPDATE_INTERVAL);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                service.apply_drift().await;
            }
        });
    }

    /// Current board, in catalog order
    pub async fn prices(&self) -> Vec<CropPrice> {
        self.inner
            .entries
            .lock()
            .await
            .iter()
            .map(|entry| entry.current.clone())
            .collect()
    }

    /// Current price for one crop, by name
    pub async fn price(&self, crop: &str) -> AppResult<CropPrice> {
        let entries = self.inner.entries.lock().await;
        entries
            .iter()
            .map(|entry| &entry.current)
            .find(|price| price.crop.eq_ignore_ascii_case(crop))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Market price for {}", crop)))
    }

    /// One drift tick: a bounded random change against each crop's seed
    /// price, clamped at the floor, with trend and history recomputed.
    async fn apply_drift(&self) {
        let mut entries = self.inner.entries.lock().await;
        let mut rng = rand::thread_rng();

        for entry in entries.iter_mut() {
            let change = Decimal::from(rng.gen_range(-20..80));
            let mut next = entry.seed + change;
            if next < Decimal::from(PRICE_FLOOR) {
                next = Decimal::from(PRICE_FLOOR);
            }

            entry.current.trend = PriceTrend::from_change(next - entry.current.price);
            entry.current.history.remove(0);
            entry.current.history.push(next);
            entry.current.price = next;
            entry.current.updated_at = Utc::now();
        }
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}
