//! Render-agnostic view contract between snapshots and the UI
//!
//! A snapshot state describes itself as a row of [`Cell`]s with stable
//! identifiers plus [`Marker`]s that point at cells by id. The rendering
//! layer decides where each cell lands on screen and aligns markers to it;
//! the core never computes coordinates.

/// Visual weight of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Ordinary element
    Normal,
    /// Element under the algorithm's attention right now
    Active,
    /// Element already counted, visited, or part of the best answer so far
    Accent,
}

/// One displayable element with a stable identity.
///
/// Ids are stable across every snapshot of a trace (array slot `v3` is `v3`
/// in all of them), so an overlay facility can track elements while scrubbing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: String,
    pub label: String,
    pub emphasis: Emphasis,
}

/// A pointer label attached to a cell (e.g. `L` on `v0`, `front` on `e2`).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub cell_id: String,
}

/// Implemented by every algorithm-family state record.
pub trait DisplayState: Clone {
    /// The elements to draw, in display order.
    fn cells(&self) -> Vec<Cell>;

    /// Pointer markers; each `cell_id` names a cell returned by [`cells`].
    ///
    /// [`cells`]: DisplayState::cells
    fn markers(&self) -> Vec<Marker>;

    /// Per-cell magnitudes for a bar rendering, when the family has one.
    fn bars(&self) -> Option<Vec<u64>> {
        None
    }

    /// One-line readout of the running result ("trapped = 4").
    fn summary(&self) -> String;
}
