//! Travel-time providers.
//!
//! Derived costs computed from positions and a dense lookup matrix for
//! externally supplied travel times.

mod matrix;
mod provider;

pub use matrix::TravelTimeMatrix;
pub use provider::{Euclidean, RegionPenalty, TravelTimeProvider};
