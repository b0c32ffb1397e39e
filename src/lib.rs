//! # Introduction
//!
//! Algotty replays classic teaching algorithms. Each algorithm runs exactly
//! once, recording an append-only trace of immutable snapshots; a playback
//! head then scrubs over that trace — forward, backward, timed autoplay,
//! variant switching — inside a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Replay pipeline
//!
//! ```text
//! Raw text → Validator → Params → TraceGenerator → Trace → Playback → TUI
//! ```
//!
//! 1. [`input`] — validates raw text into typed parameters, naming the
//!    violated constraint on failure.
//! 2. [`algos`] — instrumented algorithm variants; each runs the real
//!    algorithm and narrates every step into value-copied snapshots.
//! 3. [`trace`] — the snapshot/trace model and the [`trace::view`] contract
//!    the renderer consumes (stable element ids, no coordinates).
//! 4. [`playback`] — the playback state machine and the cancellable
//!    autoplay timer.
//! 5. [`session`] — one visualizer instance: validator + variants + playback
//!    + timer, with all-or-nothing variant switching.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Shipped algorithms
//!
//! Trapping rain water and container with most water (brute-force and
//! two-pointer variants each), breadth-first and depth-first graph
//! traversal, and a FIFO queue replay.

pub mod algos;
pub mod input;
pub mod playback;
pub mod session;
pub mod trace;
pub mod ui;
