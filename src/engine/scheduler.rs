//! Priority-driven iteration scheduling
//!
//! The scheduler owns the flat frontier of pending quads. Each external
//! step pops the worst-scoring quad, splits its region, rebuilds a quad per
//! quadrant, and re-enqueues the children. Popped quads are discarded; no
//! parent/child graph is retained.

use crate::engine::quad::{Quad, build_quad};
use crate::engine::split::split_quadrants;
use crate::io::configuration::{DEFAULT_AREA_EXPONENT, DEFAULT_MIN_DIMENSION, DEFAULT_STEP_BUDGET};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pixels::PixelBuffer;
use std::collections::BinaryHeap;

/// Engine parameters, fixed at construction
#[derive(Clone, Copy, Debug)]
pub struct DecomposerConfig {
    /// Number of refinement steps before the run stops accepting work
    pub step_budget: usize,
    /// Regions with width or height at or below this are terminal
    pub minimum_dimension: i32,
    /// Exponent applied to region area when scoring
    pub area_exponent: f64,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            minimum_dimension: DEFAULT_MIN_DIMENSION,
            area_exponent: DEFAULT_AREA_EXPONENT,
        }
    }
}

impl DecomposerConfig {
    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if the minimum
    /// dimension would allow degenerate splits or the area exponent is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_dimension < 1 {
            return Err(invalid_parameter(
                "minimum_dimension",
                &self.minimum_dimension,
                &"must be at least 1 so single-pixel regions are never split",
            ));
        }
        if !self.area_exponent.is_finite() || self.area_exponent < 0.0 {
            return Err(invalid_parameter(
                "area_exponent",
                &self.area_exponent,
                &"must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Externally clocked decomposition scheduler
///
/// Performs no internal concurrency and never blocks; between [`step`]
/// invocations the frontier and step counter are quiescent and safe to
/// inspect. The pixel buffer is only ever read.
///
/// [`step`]: Decomposer::step
#[derive(Debug)]
pub struct Decomposer<'a> {
    pixels: &'a PixelBuffer,
    config: DecomposerConfig,
    frontier: BinaryHeap<Quad>,
    steps_taken: usize,
    done: bool,
    root: Quad,
}

impl<'a> Decomposer<'a> {
    /// Build the root quad over the whole image and enqueue it
    ///
    /// The root quad is immediately available through [`Decomposer::root`]
    /// so the caller can paint the initial frame.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if the configuration
    /// fails validation.
    pub fn new(pixels: &'a PixelBuffer, config: DecomposerConfig) -> Result<Self> {
        config.validate()?;

        let root = build_quad(pixels, pixels.bounds(), &config);
        let mut frontier = BinaryHeap::new();
        frontier.push(root);

        Ok(Self {
            pixels,
            config,
            frontier,
            steps_taken: 0,
            done: config.step_budget == 0,
            root,
        })
    }

    /// The quad covering the whole image, emitted at initialization
    pub const fn root(&self) -> Quad {
        self.root
    }

    /// Perform one pop-split-rebuild-enqueue cycle
    ///
    /// Returns the newly created quads so the caller can paint them, or an
    /// empty vector once the run is done. The run ends when the step budget
    /// is exhausted, the frontier empties, or the best remaining quad is
    /// terminal — in the last case every pending region is already at the
    /// minimum dimension and further splitting could only produce empty
    /// regions.
    pub fn step(&mut self) -> Vec<Quad> {
        if self.done {
            return Vec::new();
        }

        let Some(quad) = self.frontier.pop() else {
            self.done = true;
            return Vec::new();
        };

        if quad.priority.is_terminal() {
            self.done = true;
            return Vec::new();
        }

        let children: Vec<Quad> = split_quadrants(quad.region)
            .into_iter()
            .map(|region| build_quad(self.pixels, region, &self.config))
            .collect();

        for child in &children {
            self.frontier.push(*child);
        }

        self.steps_taken += 1;
        if self.steps_taken >= self.config.step_budget {
            self.done = true;
        }

        children
    }

    /// Whether the run has stopped accepting further steps
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Number of successful steps performed so far
    pub const fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Number of quads currently pending in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}
