//! Domain model types for tour optimization.
//!
//! Provides the fixed-shape location record consumed by the optimizer and
//! the closed-tour artifact it produces.

mod location;
mod tour;

pub use location::Location;
pub use tour::{Tour, TourStatus};
