//! Playback controller: the replay state machine
//!
//! One [`Playback`] owns one trace and one cursor. Every transition — from
//! keyboard handlers and from the autoplay timer alike — goes through the
//! methods here, so the invariants hold by construction:
//!
//! - a loaded controller always holds a non-empty trace with the cursor in
//!   `[0, N-1]`
//! - boundary steps saturate instead of erroring
//! - a tick that lands on the last snapshot pauses playback; autoplay never
//!   loops

pub mod autoplay;

use crate::trace::{Snapshot, Trace};

/// Externally visible playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No trace loaded
    Idle,
    /// Trace loaded, cursor parked
    Paused,
    /// Trace loaded, timer-driven ticks advancing the cursor
    Playing,
}

/// What a tick accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Cursor advanced and playback continues
    Advanced,
    /// Cursor reached the last snapshot; playback paused itself
    Finished,
    /// Not playing; nothing happened
    Ignored,
}

// Loaded always holds a non-empty trace and an in-bounds cursor; there is no
// way to express anything else.
#[derive(Debug)]
enum Inner<S> {
    Idle,
    Loaded {
        trace: Trace<S>,
        cursor: usize,
        playing: bool,
    },
}

/// Owns the trace and the playback head for one visualizer instance.
#[derive(Debug)]
pub struct Playback<S> {
    inner: Inner<S>,
}

impl<S> Playback<S> {
    pub fn new() -> Self {
        Playback { inner: Inner::Idle }
    }

    pub fn state(&self) -> PlaybackState {
        match &self.inner {
            Inner::Idle => PlaybackState::Idle,
            Inner::Loaded { playing: false, .. } => PlaybackState::Paused,
            Inner::Loaded { playing: true, .. } => PlaybackState::Playing,
        }
    }

    /// Cursor position, or -1 when no trace is loaded.
    pub fn cursor(&self) -> isize {
        match &self.inner {
            Inner::Idle => -1,
            Inner::Loaded { cursor, .. } => *cursor as isize,
        }
    }

    /// Number of snapshots in the loaded trace, 0 when idle.
    pub fn trace_len(&self) -> usize {
        match &self.inner {
            Inner::Idle => 0,
            Inner::Loaded { trace, .. } => trace.len(),
        }
    }

    pub fn trace(&self) -> Option<&Trace<S>> {
        match &self.inner {
            Inner::Idle => None,
            Inner::Loaded { trace, .. } => Some(trace),
        }
    }

    /// The snapshot under the cursor.
    pub fn snapshot(&self) -> Option<&Snapshot<S>> {
        match &self.inner {
            Inner::Idle => None,
            Inner::Loaded { trace, cursor, .. } => trace.get(*cursor),
        }
    }

    /// Install a freshly generated trace: paused, cursor at 0. Replaces any
    /// previous trace wholesale.
    pub fn load(&mut self, trace: Trace<S>) {
        self.inner = Inner::Loaded {
            trace,
            cursor: 0,
            playing: false,
        };
    }

    /// Advance one snapshot. No-op at the last snapshot and when idle;
    /// returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        match &mut self.inner {
            Inner::Idle => false,
            Inner::Loaded { trace, cursor, .. } => {
                if *cursor + 1 < trace.len() {
                    *cursor += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Move back one snapshot. No-op at 0 and when idle.
    pub fn step_backward(&mut self) -> bool {
        match &mut self.inner {
            Inner::Idle => false,
            Inner::Loaded { cursor, .. } => {
                if *cursor > 0 {
                    *cursor -= 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn jump_to_start(&mut self) {
        if let Inner::Loaded { cursor, .. } = &mut self.inner {
            *cursor = 0;
        }
    }

    pub fn jump_to_end(&mut self) {
        if let Inner::Loaded { trace, cursor, .. } = &mut self.inner {
            *cursor = trace.len() - 1;
        }
    }

    /// Enter playing. From the last snapshot this rewinds to 0 first, so
    /// pressing play at the end replays from the top. Returns false when
    /// idle.
    pub fn play(&mut self) -> bool {
        match &mut self.inner {
            Inner::Idle => false,
            Inner::Loaded {
                trace,
                cursor,
                playing,
            } => {
                if *cursor + 1 == trace.len() {
                    *cursor = 0;
                }
                *playing = true;
                true
            }
        }
    }

    /// Leave playing; the cursor stays where it is.
    pub fn pause(&mut self) {
        if let Inner::Loaded { playing, .. } = &mut self.inner {
            *playing = false;
        }
    }

    /// One timer-driven advance. Pauses automatically once the cursor sits
    /// on the last snapshot; never wraps around.
    pub fn tick(&mut self) -> Tick {
        match &mut self.inner {
            Inner::Loaded {
                trace,
                cursor,
                playing,
            } if *playing => {
                if *cursor + 1 < trace.len() {
                    *cursor += 1;
                }
                if *cursor + 1 == trace.len() {
                    *playing = false;
                    Tick::Finished
                } else {
                    Tick::Advanced
                }
            }
            _ => Tick::Ignored,
        }
    }

    /// Discard the trace and return to idle. Legal from any state; calling
    /// it twice is the same as calling it once.
    pub fn reset(&mut self) {
        self.inner = Inner::Idle;
    }
}

impl<S> Default for Playback<S> {
    fn default() -> Self {
        Self::new()
    }
}
