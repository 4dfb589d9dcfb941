//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use met_core::filter::Filter;
use met_core::generation::RequestGeneration;
use met_core::series::Series;

/// Shared application state for the portal chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected field code
    pub field: Signal<String>,
    /// Currently selected area code
    pub area: Signal<String>,
    /// Currently selected grid resolution
    pub resolution: Signal<String>,
    /// Selected model run reference time, RFC 3339 (empty until runs load)
    pub run: Signal<String>,
    /// Available run reference times, newest first, RFC 3339
    pub runs: Signal<Vec<String>>,
    /// Start date for time-range filtering ("YYYY-MM-DD")
    pub start_date: Signal<String>,
    /// End date for time-range filtering ("YYYY-MM-DD")
    pub end_date: Signal<String>,
    /// Series currently plotted
    pub series: Signal<Vec<Series>>,
    /// Advanced on every filter change; fetch completions carrying an older
    /// stamp are dropped instead of applied
    pub generation: Signal<RequestGeneration>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            field: Signal::new("temp2m".to_string()),
            area: Signal::new("iberia".to_string()),
            resolution: Signal::new("0.05deg".to_string()),
            run: Signal::new(String::new()),
            runs: Signal::new(Vec::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            series: Signal::new(Vec::new()),
            generation: Signal::new(RequestGeneration::new()),
        }
    }

    /// Snapshot the current selections as an immutable fetch filter.
    ///
    /// None until a model run has been selected. Reading this inside an
    /// effect subscribes the effect to every filter signal.
    pub fn filter(&self) -> Option<Filter> {
        let run: DateTime<Utc> = DateTime::parse_from_rfc3339(&(self.run)())
            .ok()?
            .with_timezone(&Utc);
        Some(Filter::new(
            (self.field)(),
            run,
            (self.resolution)(),
            (self.area)(),
        ))
    }

    /// Start a new fetch round, invalidating in-flight fetches for the
    /// previous filter. Returns the stamp for this round's requests.
    pub fn next_generation(&mut self) -> u64 {
        self.generation.write().begin()
    }

    /// Whether a completion stamped with `stamp` is still the newest round.
    pub fn is_current(&self, stamp: u64) -> bool {
        self.generation.peek().is_current(stamp)
    }
}
