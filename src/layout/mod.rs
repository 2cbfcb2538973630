//! Masonry layout core.
//!
//! Pure functions only: no I/O, no state carried between calls. A caller re-runs
//! the layout whenever the item list or column count changes.

pub mod breakpoints;
pub mod distributor;

pub use breakpoints::Breakpoints;
pub use distributor::{distribute_by, Column, ColumnDistributor, Distribution, Placement};
