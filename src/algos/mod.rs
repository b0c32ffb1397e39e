//! Instrumented algorithm implementations
//!
//! Each variant of each algorithm is a [`TraceGenerator`]: a pure function
//! from validated parameters to a complete [`Trace`]. Generators run the real
//! algorithm step by step and clone the working state into a snapshot at
//! every narrated transition, so scrubbing backward is just indexing.
//!
//! - [`two_pointer`] — array family: trapping rain water and container with
//!   most water, each in a brute-force and a two-pointer variant
//! - [`graph`] — traversal family: breadth-first and depth-first search
//! - [`queue`] — queue-operation replay

pub mod graph;
pub mod queue;
pub mod two_pointer;

use crate::trace::{GenerationError, Trace};

/// One algorithm variant.
///
/// All variants registered in one session share `Params` and `State`, so the
/// renderer sees the same snapshot shape whichever variant is active.
/// `generate` must be deterministic: identical parameters yield identical
/// traces, field for field.
pub trait TraceGenerator {
    type Params;
    type State: Clone;

    /// Display name of the variant ("two pointers", "brute force", ...)
    fn name(&self) -> &'static str;

    /// Reference pseudocode shown beside the visualization; snapshot
    /// `source_line` values index into this listing.
    fn listing(&self) -> &'static [&'static str];

    /// Run the algorithm once and narrate it. Never returns a partial trace.
    fn generate(&self, params: &Self::Params) -> Result<Trace<Self::State>, GenerationError>;
}
