//! Per-run configuration for tour optimization.

use std::time::Duration;

/// Default wall-clock budget for one solve call.
const DEFAULT_TIME_LIMIT_SECS: u64 = 300;

/// Default ceiling on the number of locations accepted for exact solving.
///
/// Model size grows as O(n²), so the ceiling is a first-class knob rather
/// than an internal constant.
const DEFAULT_MAX_LOCATIONS: usize = 50;

/// Tuning knobs for one optimization run.
///
/// Passed explicitly into each call; the library keeps no process-wide
/// solver state.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use geotour::config::TourConfig;
///
/// let config = TourConfig::default()
///     .with_time_limit(Duration::from_secs(60))
///     .with_max_locations(30);
/// assert_eq!(config.max_locations(), 30);
/// assert_eq!(config.time_limit(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct TourConfig {
    time_limit: Duration,
    max_locations: usize,
}

impl TourConfig {
    /// Creates a configuration with the default budget and size ceiling.
    pub fn new() -> Self {
        Self {
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            max_locations: DEFAULT_MAX_LOCATIONS,
        }
    }

    /// Sets the wall-clock budget for the solve call.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the maximum number of locations accepted per run.
    pub fn with_max_locations(mut self, max_locations: usize) -> Self {
        self.max_locations = max_locations;
        self
    }

    /// Wall-clock budget for the solve call.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Maximum number of locations accepted per run.
    pub fn max_locations(&self) -> usize {
        self.max_locations
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self::new()
    }
}
