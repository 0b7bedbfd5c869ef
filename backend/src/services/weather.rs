//! Weather acquisition driver
//!
//! Runs the pure weather machine against real timers and the forecast API.
//! Events are applied to the machine one at a time under a lock; the
//! commands each event produces are executed in order by a background task
//! that owns the timer handles.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use shared::types::LocationQuery;
use shared::{
    FarmerProfile, WeatherCommand, WeatherEvent, WeatherMachine, WeatherPhase, WeatherSnapshot,
};
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;

use crate::config::WeatherConfig;
use crate::external::WeatherClient;
use crate::store::ProfileStore;

/// Widget state as served to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub visible: bool,
    pub status: WidgetStatus,
    /// Display label for the place being shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    pub expanded: bool,
    pub awaiting_geolocation: bool,
}

/// Widget phase over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetStatus {
    Idle,
    Loading,
    Ready,
    ErrorShown,
    ErrorHidden,
}

/// Weather driver handle, cheap to clone
#[derive(Clone)]
pub struct WeatherService {
    inner: Arc<WeatherInner>,
}

struct WeatherInner {
    machine: Mutex<WeatherMachine>,
    commands: mpsc::UnboundedSender<Vec<WeatherCommand>>,
    client: WeatherClient,
    refresh_interval: Duration,
    error_hold: Duration,
}

impl WeatherService {
    /// Start the driver for the configured forecast endpoint.
    ///
    /// Spawns the command executor and the profile city watcher, so this
    /// must be called inside a Tokio runtime.
    pub fn new(config: &WeatherConfig, profiles: &ProfileStore) -> Self {
        let client = WeatherClient::with_base_url(
            config.api_key.clone(),
            config.country_code.clone(),
            config.api_endpoint.clone(),
        );

        Self::with_client(
            client,
            Duration::from_secs(config.refresh_interval_secs),
            Duration::from_secs(config.error_hold_secs),
            profiles,
        )
    }

    /// Start the driver with a custom client and timings (for testing)
    pub fn with_client(
        client: WeatherClient,
        refresh_interval: Duration,
        error_hold: Duration,
        profiles: &ProfileStore,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let service = Self {
            inner: Arc::new(WeatherInner {
                machine: Mutex::new(WeatherMachine::new()),
                commands: tx,
                client,
                refresh_interval,
                error_hold,
            }),
        };

        tokio::spawn(run_executor(service.clone(), rx));
        tokio::spawn(watch_profile_city(service.clone(), profiles.subscribe()));

        service
    }

    /// Apply one event and queue its commands for execution
    pub async fn dispatch(&self, event: WeatherEvent) {
        let mut machine = self.inner.machine.lock().await;
        let commands = machine.handle(event);
        if !commands.is_empty() {
            // Sent while the machine is still locked, so command batches
            // reach the executor in event order.
            let _ = self.inner.commands.send(commands);
        }
    }

    /// Current widget state for the API
    pub async fn view(&self) -> WidgetView {
        let machine = self.inner.machine.lock().await;

        let status = match machine.phase() {
            WeatherPhase::Idle => WidgetStatus::Idle,
            WeatherPhase::Loading => WidgetStatus::Loading,
            WeatherPhase::Ready(_) => WidgetStatus::Ready,
            WeatherPhase::ErrorShown => WidgetStatus::ErrorShown,
            WeatherPhase::ErrorHiddenAwaitingFallback => WidgetStatus::ErrorHidden,
        };

        // By city the label is the city itself; by coordinates it is the
        // place name the provider resolved.
        let location = match machine.mode() {
            LocationQuery::City(city) => Some(city.clone()),
            LocationQuery::Coordinates(_) => machine.snapshot().map(|s| s.location_name.clone()),
            LocationQuery::None => None,
        };

        WidgetView {
            visible: machine.is_visible(),
            status,
            location,
            weather: machine.snapshot().cloned(),
            expanded: machine.expanded(),
            awaiting_geolocation: machine.awaiting_geolocation(),
        }
    }
}

/// Execute command batches in order, owning the timer tasks
async fn run_executor(
    service: WeatherService,
    mut commands: mpsc::UnboundedReceiver<Vec<WeatherCommand>>,
) {
    let mut refresh_timer: Option<JoinHandle<()>> = None;
    let mut hold_timer: Option<JoinHandle<()>> = None;

    while let Some(batch) = commands.recv().await {
        for command in batch {
            match command {
                WeatherCommand::Fetch { query, generation } => {
                    let service = service.clone();
                    tokio::spawn(async move {
                        let event = match service.inner.client.fetch(&query).await {
                            Ok(snapshot) => WeatherEvent::FetchSucceeded {
                                generation,
                                snapshot,
                            },
                            Err(e) => {
                                tracing::warn!("Weather fetch failed: {}", e);
                                WeatherEvent::FetchFailed { generation }
                            }
                        };
                        service.dispatch(event).await;
                    });
                }
                WeatherCommand::RequestGeolocation => {
                    // Surfaced to the frontend through the widget view; the
                    // position comes back as a GeolocationResolved event.
                    tracing::debug!("Awaiting device geolocation");
                }
                WeatherCommand::StartRefreshTimer => {
                    if let Some(timer) = refresh_timer.take() {
                        timer.abort();
                    }
                    let service = service.clone();
                    refresh_timer = Some(tokio::spawn(async move {
                        let mut interval = tokio::time::interval(service.inner.refresh_interval);
                        // The first tick completes immediately
                        interval.tick().await;
                        loop {
                            interval.tick().await;
                            service.dispatch(WeatherEvent::RefreshTick).await;
                        }
                    }));
                }
                WeatherCommand::CancelRefreshTimer => {
                    if let Some(timer) = refresh_timer.take() {
                        timer.abort();
                    }
                }
                WeatherCommand::StartErrorHold => {
                    if let Some(timer) = hold_timer.take() {
                        timer.abort();
                    }
                    let service = service.clone();
                    hold_timer = Some(tokio::spawn(async move {
                        tokio::time::sleep(service.inner.error_hold).await;
                        service.dispatch(WeatherEvent::ErrorHoldExpired).await;
                    }));
                }
                WeatherCommand::CancelErrorHold => {
                    if let Some(timer) = hold_timer.take() {
                        timer.abort();
                    }
                }
            }
        }
    }

    // Channel closed: stop the timers so none outlives the service
    if let Some(timer) = refresh_timer.take() {
        timer.abort();
    }
    if let Some(timer) = hold_timer.take() {
        timer.abort();
    }
}

/// Feed profile city changes into the machine.
///
/// Dispatches once for the stored city at startup, then again whenever the
/// saved city actually differs from the last one seen.
async fn watch_profile_city(
    service: WeatherService,
    mut profiles: watch::Receiver<Option<FarmerProfile>>,
) {
    let mut city = city_of(&profiles.borrow());
    service
        .dispatch(WeatherEvent::CityChanged(city.clone()))
        .await;

    while profiles.changed().await.is_ok() {
        let next = city_of(&profiles.borrow());
        if next != city {
            city = next.clone();
            service.dispatch(WeatherEvent::CityChanged(next)).await;
        }
    }
}

fn city_of(profile: &Option<FarmerProfile>) -> String {
    profile.as_ref().map(|p| p.city.clone()).unwrap_or_default()
}
