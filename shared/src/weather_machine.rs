//! Weather acquisition state machine
//!
//! Pure, synchronous core of the weather widget. The machine consumes
//! [`WeatherEvent`]s one at a time and returns the side effects to run as
//! [`WeatherCommand`]s. Timers and network calls live in the backend
//! driver; nothing here blocks or performs I/O.

use crate::location;
use crate::models::WeatherSnapshot;
use crate::types::{GpsCoordinates, LocationQuery};

/// Display phase of the weather widget
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPhase {
    /// No location to pursue
    Idle,
    /// A fetch for the current generation is in flight
    Loading,
    /// Latest fetch succeeded
    Ready(WeatherSnapshot),
    /// Latest fetch failed, error surface shown until the hold expires
    ErrorShown,
    /// Error hold expired, device-location fallback pending or exhausted
    ErrorHiddenAwaitingFallback,
}

/// Everything that can happen to the weather widget
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherEvent {
    /// Profile city changed, raw and unnormalized
    CityChanged(String),
    /// Device reported its position
    GeolocationResolved(GpsCoordinates),
    /// Device location unavailable or permission denied
    GeolocationDenied,
    /// A forecast query finished successfully
    FetchSucceeded {
        generation: u64,
        snapshot: WeatherSnapshot,
    },
    /// A forecast query failed. Network errors, non-success responses and
    /// malformed payloads all collapse to this one signal.
    FetchFailed { generation: u64 },
    /// Periodic refresh timer fired
    RefreshTick,
    /// Error hold timer expired
    ErrorHoldExpired,
    /// User interacted with the error surface
    ErrorDismissed,
    /// User expanded or collapsed the widget
    ToggleExpanded,
}

/// Side effects for the driver to execute, in order
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherCommand {
    /// Issue a forecast query and report back with the same generation
    Fetch {
        query: LocationQuery,
        generation: u64,
    },
    /// Ask the device for its position
    RequestGeolocation,
    /// Start the periodic refresh timer, replacing any running one
    StartRefreshTimer,
    /// Stop the periodic refresh timer
    CancelRefreshTimer,
    /// Start the error hold timer, replacing any running one
    StartErrorHold,
    /// Stop the error hold timer
    CancelErrorHold,
}

/// State machine behind the weather widget.
///
/// Every in-flight fetch carries the generation current when it was
/// issued; responses whose generation is stale are discarded, so a slow
/// response can never overwrite the result of a newer pursuit.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherMachine {
    phase: WeatherPhase,
    mode: LocationQuery,
    device_coords: Option<GpsCoordinates>,
    geolocation_denied: bool,
    awaiting_geolocation: bool,
    expanded: bool,
    generation: u64,
}

impl Default for WeatherMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherMachine {
    pub fn new() -> Self {
        Self {
            phase: WeatherPhase::Idle,
            mode: LocationQuery::None,
            device_coords: None,
            geolocation_denied: false,
            awaiting_geolocation: false,
            expanded: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &WeatherPhase {
        &self.phase
    }

    /// The location the current pursuit queries
    pub fn mode(&self) -> &LocationQuery {
        &self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// True while a geolocation request is outstanding
    pub fn awaiting_geolocation(&self) -> bool {
        self.awaiting_geolocation
    }

    pub fn geolocation_denied(&self) -> bool {
        self.geolocation_denied
    }

    /// Latest successful snapshot, when showing one
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.phase {
            WeatherPhase::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Whether the widget surface should be shown at all.
    ///
    /// Visible while a location is being pursued, a snapshot is showing or
    /// an error is still held; hidden when there is nothing to show and
    /// nothing being sought.
    pub fn is_visible(&self) -> bool {
        match &self.phase {
            WeatherPhase::Loading | WeatherPhase::Ready(_) | WeatherPhase::ErrorShown => true,
            WeatherPhase::Idle | WeatherPhase::ErrorHiddenAwaitingFallback => {
                self.awaiting_geolocation
            }
        }
    }

    /// Apply one event and return the commands to execute.
    ///
    /// Run-to-completion: the caller must finish executing (or scheduling)
    /// the returned commands before feeding the next event.
    pub fn handle(&mut self, event: WeatherEvent) -> Vec<WeatherCommand> {
        match event {
            WeatherEvent::CityChanged(raw) => self.on_city_changed(&raw),
            WeatherEvent::GeolocationResolved(coords) => self.on_geolocation_resolved(coords),
            WeatherEvent::GeolocationDenied => self.on_geolocation_denied(),
            WeatherEvent::FetchSucceeded {
                generation,
                snapshot,
            } => self.on_fetch_succeeded(generation, snapshot),
            WeatherEvent::FetchFailed { generation } => self.on_fetch_failed(generation),
            WeatherEvent::RefreshTick => self.on_refresh_tick(),
            WeatherEvent::ErrorHoldExpired => self.on_error_hold_expired(),
            WeatherEvent::ErrorDismissed => self.on_error_dismissed(),
            WeatherEvent::ToggleExpanded => {
                self.expanded = !self.expanded;
                Vec::new()
            }
        }
    }

    fn on_city_changed(&mut self, raw: &str) -> Vec<WeatherCommand> {
        let city = location::normalize(raw);
        if !city.is_empty() {
            self.awaiting_geolocation = false;
            return self.start_pursuit(LocationQuery::City(city));
        }

        // City cleared. Degrade to device coordinates when already known.
        if let Some(coords) = self.device_coords.clone() {
            self.awaiting_geolocation = false;
            return self.start_pursuit(LocationQuery::Coordinates(coords));
        }

        self.mode = LocationQuery::None;
        self.phase = WeatherPhase::Idle;
        if self.geolocation_denied {
            self.awaiting_geolocation = false;
            vec![
                WeatherCommand::CancelErrorHold,
                WeatherCommand::CancelRefreshTimer,
            ]
        } else {
            self.awaiting_geolocation = true;
            vec![
                WeatherCommand::CancelErrorHold,
                WeatherCommand::CancelRefreshTimer,
                WeatherCommand::RequestGeolocation,
            ]
        }
    }

    fn on_geolocation_resolved(&mut self, coords: GpsCoordinates) -> Vec<WeatherCommand> {
        self.device_coords = Some(coords.clone());
        self.geolocation_denied = false;
        self.awaiting_geolocation = false;

        // An explicit city always wins over device location
        if matches!(self.mode, LocationQuery::City(_)) {
            return Vec::new();
        }

        // Initial acquisition or error fallback: start the coordinate pursuit
        if matches!(
            self.phase,
            WeatherPhase::Idle | WeatherPhase::ErrorHiddenAwaitingFallback
        ) {
            return self.start_pursuit(LocationQuery::Coordinates(coords));
        }

        // Already pursuing coordinates: remember the newer position
        if matches!(self.mode, LocationQuery::Coordinates(_)) {
            self.mode = LocationQuery::Coordinates(coords);
        }
        Vec::new()
    }

    fn on_geolocation_denied(&mut self) -> Vec<WeatherCommand> {
        self.geolocation_denied = true;
        self.awaiting_geolocation = false;
        Vec::new()
    }

    fn on_fetch_succeeded(
        &mut self,
        generation: u64,
        snapshot: WeatherSnapshot,
    ) -> Vec<WeatherCommand> {
        if generation != self.generation {
            // Response from a superseded pursuit
            return Vec::new();
        }
        self.phase = WeatherPhase::Ready(snapshot);
        vec![WeatherCommand::CancelErrorHold]
    }

    fn on_fetch_failed(&mut self, generation: u64) -> Vec<WeatherCommand> {
        if generation != self.generation {
            return Vec::new();
        }
        self.phase = WeatherPhase::ErrorShown;
        vec![WeatherCommand::StartErrorHold]
    }

    fn on_refresh_tick(&mut self) -> Vec<WeatherCommand> {
        // A tick can race the cancel that retired its pursuit
        if self.mode.is_none()
            || matches!(
                self.phase,
                WeatherPhase::Idle | WeatherPhase::ErrorHiddenAwaitingFallback
            )
        {
            return Vec::new();
        }
        let query = self.mode.clone();
        self.refetch(query)
    }

    fn on_error_hold_expired(&mut self) -> Vec<WeatherCommand> {
        if !matches!(self.phase, WeatherPhase::ErrorShown) {
            return Vec::new();
        }

        // Degrade to device location once rather than retrying the query
        if let Some(coords) = self.device_coords.clone() {
            return self.start_pursuit(LocationQuery::Coordinates(coords));
        }

        self.phase = WeatherPhase::ErrorHiddenAwaitingFallback;
        if self.geolocation_denied {
            vec![WeatherCommand::CancelRefreshTimer]
        } else {
            self.awaiting_geolocation = true;
            vec![
                WeatherCommand::CancelRefreshTimer,
                WeatherCommand::RequestGeolocation,
            ]
        }
    }

    fn on_error_dismissed(&mut self) -> Vec<WeatherCommand> {
        if matches!(self.phase, WeatherPhase::ErrorShown) {
            // Interaction extends the hold without changing state
            return vec![WeatherCommand::StartErrorHold];
        }
        Vec::new()
    }

    /// Begin pursuing `query`: new generation, fresh refresh schedule
    fn start_pursuit(&mut self, query: LocationQuery) -> Vec<WeatherCommand> {
        let mut commands = self.refetch(query);
        commands.push(WeatherCommand::StartRefreshTimer);
        commands
    }

    /// Re-enter `Loading` for `query`, invalidating in-flight responses
    fn refetch(&mut self, query: LocationQuery) -> Vec<WeatherCommand> {
        self.generation += 1;
        self.mode = query.clone();
        self.phase = WeatherPhase::Loading;
        vec![
            WeatherCommand::CancelErrorHold,
            WeatherCommand::Fetch {
                query,
                generation: self.generation,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherCondition;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn coords() -> GpsCoordinates {
        GpsCoordinates::new(
            Decimal::from_str("13.0827").unwrap(),
            Decimal::from_str("80.2707").unwrap(),
        )
    }

    fn snapshot(location: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: location.to_string(),
            temperature_celsius: 31,
            condition: WeatherCondition::Sunny,
            humidity_percent: 60,
            rainfall_3h_mm: Decimal::ZERO,
            forecast: vec![],
            fetched_at: chrono::Utc::now(),
        }
    }

    fn fetch_query(commands: &[WeatherCommand]) -> Option<(&LocationQuery, u64)> {
        commands.iter().find_map(|c| match c {
            WeatherCommand::Fetch { query, generation } => Some((query, *generation)),
            _ => None,
        })
    }

    // ========================================================================
    // City Pursuit Tests
    // ========================================================================

    #[test]
    fn test_new_machine_is_hidden_and_idle() {
        let machine = WeatherMachine::new();
        assert_eq!(machine.phase(), &WeatherPhase::Idle);
        assert!(machine.mode().is_none());
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_city_change_starts_loading_then_ready() {
        let mut machine = WeatherMachine::new();

        let commands = machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        assert_eq!(
            commands,
            vec![
                WeatherCommand::CancelErrorHold,
                WeatherCommand::Fetch {
                    query: LocationQuery::City("Chennai".to_string()),
                    generation: 1,
                },
                WeatherCommand::StartRefreshTimer,
            ]
        );
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        assert!(machine.is_visible());

        let commands = machine.handle(WeatherEvent::FetchSucceeded {
            generation: 1,
            snapshot: snapshot("Chennai"),
        });
        assert_eq!(commands, vec![WeatherCommand::CancelErrorHold]);
        assert_eq!(machine.snapshot().map(|s| s.location_name.as_str()), Some("Chennai"));
        assert!(machine.is_visible());
    }

    #[test]
    fn test_city_change_normalizes_the_name() {
        let mut machine = WeatherMachine::new();
        let commands = machine.handle(WeatherEvent::CityChanged("  banglore ".to_string()));
        let (query, _) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::City("Bangalore".to_string()));
    }

    #[test]
    fn test_city_change_replaces_previous_pursuit() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        let commands = machine.handle(WeatherEvent::CityChanged("mumbai".to_string()));

        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::City("Mumbai".to_string()));
        assert_eq!(generation, 2);
    }

    // ========================================================================
    // Geolocation Tests
    // ========================================================================

    #[test]
    fn test_empty_city_without_coordinates_requests_geolocation() {
        let mut machine = WeatherMachine::new();
        let commands = machine.handle(WeatherEvent::CityChanged("".to_string()));

        assert!(commands.contains(&WeatherCommand::RequestGeolocation));
        assert_eq!(machine.phase(), &WeatherPhase::Idle);
        assert!(machine.awaiting_geolocation());
        // The pending request counts as an active pursuit
        assert!(machine.is_visible());
    }

    #[test]
    fn test_geolocation_resolved_starts_coordinate_pursuit() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("".to_string()));

        let commands = machine.handle(WeatherEvent::GeolocationResolved(coords()));
        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::Coordinates(coords()));
        assert_eq!(generation, 1);
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        assert!(!machine.awaiting_geolocation());
    }

    #[test]
    fn test_geolocation_denied_hides_the_widget() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("".to_string()));
        assert!(machine.is_visible());

        let commands = machine.handle(WeatherEvent::GeolocationDenied);
        assert!(commands.is_empty());
        assert_eq!(machine.phase(), &WeatherPhase::Idle);
        assert!(!machine.is_visible());

        // Once denied, clearing the city again does not re-request
        let commands = machine.handle(WeatherEvent::CityChanged("".to_string()));
        assert!(!commands.contains(&WeatherCommand::RequestGeolocation));
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_empty_city_with_known_coordinates_switches_mode() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::GeolocationResolved(coords()));

        let commands = machine.handle(WeatherEvent::CityChanged("".to_string()));
        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::Coordinates(coords()));
        assert_eq!(generation, 2);
    }

    #[test]
    fn test_explicit_city_wins_over_geolocation() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));

        // Coordinates arriving mid-pursuit are recorded but not fetched
        let commands = machine.handle(WeatherEvent::GeolocationResolved(coords()));
        assert!(commands.is_empty());
        assert_eq!(machine.mode(), &LocationQuery::City("Chennai".to_string()));
        assert_eq!(machine.generation(), 1);
    }

    // ========================================================================
    // Failure and Fallback Tests
    // ========================================================================

    #[test]
    fn test_fetch_failure_shows_error_and_holds() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));

        let commands = machine.handle(WeatherEvent::FetchFailed { generation: 1 });
        assert_eq!(commands, vec![WeatherCommand::StartErrorHold]);
        assert_eq!(machine.phase(), &WeatherPhase::ErrorShown);
        assert!(machine.is_visible());
    }

    #[test]
    fn test_dismiss_extends_the_hold_without_state_change() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });

        let commands = machine.handle(WeatherEvent::ErrorDismissed);
        assert_eq!(commands, vec![WeatherCommand::StartErrorHold]);
        assert_eq!(machine.phase(), &WeatherPhase::ErrorShown);
    }

    #[test]
    fn test_hold_expiry_with_known_coordinates_degrades_immediately() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::GeolocationResolved(coords()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });

        let commands = machine.handle(WeatherEvent::ErrorHoldExpired);
        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::Coordinates(coords()));
        assert_eq!(generation, 2);
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        assert!(commands.contains(&WeatherCommand::StartRefreshTimer));

        let commands = machine.handle(WeatherEvent::FetchSucceeded {
            generation: 2,
            snapshot: snapshot("Chennai"),
        });
        assert_eq!(commands, vec![WeatherCommand::CancelErrorHold]);
        assert!(matches!(machine.phase(), WeatherPhase::Ready(_)));
    }

    #[test]
    fn test_hold_expiry_without_coordinates_requests_geolocation() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });

        let commands = machine.handle(WeatherEvent::ErrorHoldExpired);
        assert_eq!(
            commands,
            vec![
                WeatherCommand::CancelRefreshTimer,
                WeatherCommand::RequestGeolocation,
            ]
        );
        assert_eq!(machine.phase(), &WeatherPhase::ErrorHiddenAwaitingFallback);
        assert!(machine.is_visible());

        // Fallback engages once the device answers
        let commands = machine.handle(WeatherEvent::GeolocationResolved(coords()));
        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::Coordinates(coords()));
        assert_eq!(generation, 2);
    }

    #[test]
    fn test_hold_expiry_after_denial_goes_dark() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("".to_string()));
        machine.handle(WeatherEvent::GeolocationDenied);
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });

        let commands = machine.handle(WeatherEvent::ErrorHoldExpired);
        assert_eq!(commands, vec![WeatherCommand::CancelRefreshTimer]);
        assert_eq!(machine.phase(), &WeatherPhase::ErrorHiddenAwaitingFallback);
        assert!(!machine.is_visible());

        // A new city recovers the widget
        let commands = machine.handle(WeatherEvent::CityChanged("mumbai".to_string()));
        assert!(fetch_query(&commands).is_some());
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        assert!(machine.is_visible());
    }

    #[test]
    fn test_hold_expiry_outside_error_phase_is_ignored() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchSucceeded {
            generation: 1,
            snapshot: snapshot("Chennai"),
        });

        let commands = machine.handle(WeatherEvent::ErrorHoldExpired);
        assert!(commands.is_empty());
        assert!(matches!(machine.phase(), WeatherPhase::Ready(_)));
    }

    // ========================================================================
    // Generation Ordering Tests
    // ========================================================================

    #[test]
    fn test_stale_success_is_discarded() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::CityChanged("mumbai".to_string()));

        // The Chennai response arrives after Mumbai became the pursuit
        let commands = machine.handle(WeatherEvent::FetchSucceeded {
            generation: 1,
            snapshot: snapshot("Chennai"),
        });
        assert!(commands.is_empty());
        assert_eq!(machine.phase(), &WeatherPhase::Loading);

        machine.handle(WeatherEvent::FetchSucceeded {
            generation: 2,
            snapshot: snapshot("Mumbai"),
        });
        assert_eq!(machine.snapshot().map(|s| s.location_name.as_str()), Some("Mumbai"));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::CityChanged("mumbai".to_string()));
        machine.handle(WeatherEvent::FetchSucceeded {
            generation: 2,
            snapshot: snapshot("Mumbai"),
        });

        let commands = machine.handle(WeatherEvent::FetchFailed { generation: 1 });
        assert!(commands.is_empty());
        assert!(matches!(machine.phase(), WeatherPhase::Ready(_)));
    }

    // ========================================================================
    // Refresh Tests
    // ========================================================================

    #[test]
    fn test_refresh_tick_refetches_current_mode() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchSucceeded {
            generation: 1,
            snapshot: snapshot("Chennai"),
        });

        let commands = machine.handle(WeatherEvent::RefreshTick);
        let (query, generation) = fetch_query(&commands).unwrap();
        assert_eq!(query, &LocationQuery::City("Chennai".to_string()));
        assert_eq!(generation, 2);
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        // The interval keeps running on its own
        assert!(!commands.contains(&WeatherCommand::StartRefreshTimer));
    }

    #[test]
    fn test_refresh_tick_during_error_cancels_the_hold() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });

        let commands = machine.handle(WeatherEvent::RefreshTick);
        assert!(commands.contains(&WeatherCommand::CancelErrorHold));
        assert!(fetch_query(&commands).is_some());
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
    }

    #[test]
    fn test_refresh_tick_without_a_pursuit_is_ignored() {
        let mut machine = WeatherMachine::new();
        assert!(machine.handle(WeatherEvent::RefreshTick).is_empty());

        // Tick racing the cancel that retired its pursuit
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        machine.handle(WeatherEvent::FetchFailed { generation: 1 });
        machine.handle(WeatherEvent::ErrorHoldExpired);
        assert_eq!(machine.phase(), &WeatherPhase::ErrorHiddenAwaitingFallback);
        assert!(machine.handle(WeatherEvent::RefreshTick).is_empty());
    }

    // ========================================================================
    // View Interaction Tests
    // ========================================================================

    #[test]
    fn test_toggle_expanded_is_view_only() {
        let mut machine = WeatherMachine::new();
        machine.handle(WeatherEvent::CityChanged("chennai".to_string()));
        assert!(!machine.expanded());

        let commands = machine.handle(WeatherEvent::ToggleExpanded);
        assert!(commands.is_empty());
        assert!(machine.expanded());
        assert_eq!(machine.phase(), &WeatherPhase::Loading);
        assert_eq!(machine.generation(), 1);

        machine.handle(WeatherEvent::ToggleExpanded);
        assert!(!machine.expanded());
    }
}
