//! # geotour
//!
//! Exact closed-tour optimization over geographic locations: computes the
//! minimum-distance tour that visits every location exactly once and returns
//! to a caller-chosen start, via an integer-programming formulation of the
//! Traveling Salesman Problem solved by a pluggable MILP backend.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Tour)
//! - [`distance`] — Geodesic pairwise distance matrix
//! - [`milp`] — Backend-agnostic MILP model and solver interface
//! - [`tour`] — TSP formulation, solving pipeline, route extraction
//! - [`select`] — Raw record filtering into validated locations
//! - `road` — Road-geometry overlay client (feature `road-geometry`)
//! - [`config`] — Per-run tuning knobs
//! - [`error`] — Error taxonomy

pub mod config;
pub mod distance;
pub mod error;
pub mod milp;
pub mod models;
#[cfg(feature = "road-geometry")]
pub mod road;
pub mod select;
pub mod tour;
