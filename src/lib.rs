//! # u-depot
//!
//! Depot placement analysis over networks of named locations: a
//! deterministic fastest-trip query, the nearest-neighbour tour built on
//! it, and synthetic network generators for measuring how tour
//! construction scales.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Position, Network, Tour)
//! - [`distance`] — Travel-time providers (Euclidean, region penalty, matrix)
//! - [`constructive`] — Fastest-trip selection, nearest-neighbour tours, depot choice
//! - [`generator`] — Regular polygon and seeded scatter networks
//! - [`scaling`] — Elapsed-time measurements over growing networks
//! - [`config`] — Travel-time model parameters
//! - [`error`] — Error type shared by every module
//!
//! ## Example
//!
//! ```
//! use u_depot::constructive::build_tour;
//! use u_depot::generator::regular_polygon_network;
//!
//! let network = regular_polygon_network(8, 100.0)?;
//! let tour = build_tour(&network, &network.settlements()[0])?;
//! assert_eq!(tour.len(), 8);
//! # Ok::<(), u_depot::error::RoutingError>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod generator;
pub mod models;
pub mod scaling;
