//! Core decomposition engine
//!
//! Statistics feed scoring, scoring feeds the priority queue, and the
//! scheduler drives one pop-split-rebuild cycle per external step.

/// Quad records, priorities, and the scoring factory
pub mod quad;
/// Priority-driven iteration scheduling
pub mod scheduler;
/// Quadrant splitting of rectangular regions
pub mod split;
/// Per-channel region statistics
pub mod stats;

pub use quad::{Priority, Quad};
pub use scheduler::{Decomposer, DecomposerConfig};
