//! Travel-time model configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// Parameters of the region-penalty travel-time model.
///
/// Distances are in metres and travel times in hours. Missing fields take
/// their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_depot::config::TravelTimeConfig;
///
/// let config = TravelTimeConfig::default();
/// assert_eq!(config.speed, 4.75);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelTimeConfig {
    /// Travel speed in metres per second.
    pub speed: f64,
    /// Divisor applied to the destination-region size when crossing regions.
    pub region_penalty_divisor: f64,
    /// Seconds per reported time unit.
    pub seconds_per_hour: f64,
}

impl Default for TravelTimeConfig {
    fn default() -> Self {
        Self {
            speed: 4.75,
            region_penalty_divisor: 10.0,
            seconds_per_hour: 3600.0,
        }
    }
}

impl TravelTimeConfig {
    /// Checks that every field is finite and strictly positive.
    pub fn validate(&self) -> RoutingResult<()> {
        let fields = [
            ("speed", self.speed),
            ("region_penalty_divisor", self.region_penalty_divisor),
            ("seconds_per_hour", self.seconds_per_hour),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(RoutingError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    /// Converts a distance in metres into hours at the configured speed.
    pub fn hours_for(&self, distance: f64) -> f64 {
        distance / self.speed / self.seconds_per_hour
    }
}
