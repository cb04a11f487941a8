//! Address-space model for the replay
//!
//! This module provides the pieces that turn an event list into per-unit state:
//! - [`bounds`]: smallest and largest offset touched by the events
//! - [`layout`]: grid width/height, padding and pixel magnification
//! - [`occupancy`]: running allocation counters and their classification
//!
//! # Units
//!
//! Offsets and sizes are in abstract address units (whatever the allocator
//! logged, usually bytes). Unit `i` of the occupancy buffer is address
//! `min_offset + i`, and cell `i` of the grid is row `i / width`, column
//! `i % width`.

pub mod bounds;
pub mod layout;
pub mod occupancy;

pub use bounds::{compute_bounds, Bounds};
pub use layout::GridLayout;
pub use occupancy::{Occupancy, UnitState};
