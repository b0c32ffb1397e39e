//! Session: one visualizer instance
//!
//! A [`Session`] ties together everything one visualizer needs: the input
//! validator, the registered algorithm variants, the last-accepted raw
//! input, the playback controller, and the autoplay timer. It is the facade
//! the rendering layer talks to, and the coordinator for variant switches:
//! a switch re-validates the stored input and regenerates the trace, and on
//! any failure the previous trace and cursor survive untouched.
//!
//! Keyboard handlers and the timer both come through here, so there is only
//! one path that moves the cursor.

use crate::algos::TraceGenerator;
use crate::input::ValidationError;
use crate::playback::autoplay::{AutoplayTimer, Speed};
use crate::playback::{Playback, PlaybackState, Tick};
use crate::trace::{GenerationError, Snapshot};
use std::fmt;
use std::time::Instant;

/// Anything a load or variant switch can fail with.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Input rejected by the validator; recoverable, nothing changed
    Validation(ValidationError),

    /// Generator defect; the attempt is aborted, nothing changed
    Generation(GenerationError),

    /// Variant index outside the registered set
    UnknownVariant { index: usize, count: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Validation(e) => write!(f, "invalid input: {}", e),
            SessionError::Generation(e) => write!(f, "trace generation failed: {}", e),
            SessionError::UnknownVariant { index, count } => {
                write!(f, "no variant {} (have {})", index, count)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(e: ValidationError) -> Self {
        SessionError::Validation(e)
    }
}

impl From<GenerationError> for SessionError {
    fn from(e: GenerationError) -> Self {
        SessionError::Generation(e)
    }
}

type Validator<P> = Box<dyn Fn(&str) -> Result<P, ValidationError>>;
type Generator<P, S> = Box<dyn TraceGenerator<Params = P, State = S>>;

/// One visualizer: validator + variants + playback + timer.
///
/// All variants share the same parameter and state types, so the renderer
/// sees one snapshot shape regardless of which variant is active.
pub struct Session<P, S: Clone> {
    validator: Validator<P>,
    variants: Vec<Generator<P, S>>,
    active: usize,
    last_input: Option<String>,
    playback: Playback<S>,
    timer: AutoplayTimer,
}

impl<P, S: Clone> Session<P, S> {
    /// `variants` must be non-empty; the first one is the default.
    pub fn new(
        validator: impl Fn(&str) -> Result<P, ValidationError> + 'static,
        variants: Vec<Generator<P, S>>,
        speed: Speed,
    ) -> Self {
        assert!(!variants.is_empty(), "a session needs at least one variant");
        Session {
            validator: Box::new(validator),
            variants,
            active: 0,
            last_input: None,
            playback: Playback::new(),
            timer: AutoplayTimer::new(speed),
        }
    }

    // ---- read side, consumed by the rendering layer ----

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn cursor(&self) -> isize {
        self.playback.cursor()
    }

    pub fn trace_len(&self) -> usize {
        self.playback.trace_len()
    }

    pub fn snapshot(&self) -> Option<&Snapshot<S>> {
        self.playback.snapshot()
    }

    pub fn speed(&self) -> Speed {
        self.timer.speed()
    }

    pub fn active_variant(&self) -> usize {
        self.active
    }

    pub fn variant_name(&self) -> &'static str {
        self.variants[self.active].name()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Reference listing of the active variant.
    pub fn listing(&self) -> &'static [&'static str] {
        self.variants[self.active].listing()
    }

    /// The raw input behind the current trace, if any.
    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    // ---- transitions ----

    /// Validate `raw`, generate a trace with the active variant, and load it
    /// (paused, cursor 0). On failure nothing changes and the input is not
    /// remembered.
    pub fn load(&mut self, raw: &str) -> Result<(), SessionError> {
        let params = (self.validator)(raw)?;
        let trace = self.variants[self.active].generate(&params)?;
        self.timer.cancel();
        self.playback.load(trace);
        self.last_input = Some(raw.to_string());
        Ok(())
    }

    /// Switch to variant `index`.
    ///
    /// When idle this only records the pending default variant. When loaded
    /// it cancels any pending tick, re-validates the stored raw input, and
    /// regenerates; the replacement is all-or-nothing, so a failure leaves
    /// the old trace and cursor exactly as they were (paused).
    pub fn switch_variant(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.variants.len() {
            return Err(SessionError::UnknownVariant {
                index,
                count: self.variants.len(),
            });
        }

        let raw = match (self.playback.state(), &self.last_input) {
            (PlaybackState::Idle, _) | (_, None) => {
                self.active = index;
                return Ok(());
            }
            (_, Some(raw)) => raw.clone(),
        };

        self.timer.cancel();
        self.playback.pause();

        let params = (self.validator)(&raw)?;
        let trace = self.variants[index].generate(&params)?;
        self.active = index;
        self.playback.load(trace);
        Ok(())
    }

    /// Cycle to the next registered variant (the `v` key).
    pub fn next_variant(&mut self) -> Result<usize, SessionError> {
        let next = (self.active + 1) % self.variants.len();
        self.switch_variant(next)?;
        Ok(next)
    }

    /// Manual step. Cancels autoplay first so keyboard and timer never fight
    /// over the cursor.
    pub fn step_forward(&mut self) -> bool {
        self.timer.cancel();
        self.playback.pause();
        self.playback.step_forward()
    }

    pub fn step_backward(&mut self) -> bool {
        self.timer.cancel();
        self.playback.pause();
        self.playback.step_backward()
    }

    pub fn jump_to_start(&mut self) {
        self.timer.cancel();
        self.playback.pause();
        self.playback.jump_to_start();
    }

    pub fn jump_to_end(&mut self) {
        self.timer.cancel();
        self.playback.pause();
        self.playback.jump_to_end();
    }

    /// Start autoplay; the first tick is due one interval after `now`.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.playback.play() {
            self.timer.cancel();
            self.timer.arm(now);
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self) {
        self.timer.cancel();
        self.playback.pause();
    }

    /// Toggle between playing and paused (the space key).
    pub fn toggle_play(&mut self, now: Instant) -> PlaybackState {
        match self.playback.state() {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => {
                self.play(now);
            }
            PlaybackState::Idle => {}
        }
        self.playback.state()
    }

    /// Called by the event loop every iteration. Advances the cursor only
    /// when playing and the timer is due; cancels the timer when the trace
    /// end pauses playback.
    pub fn on_tick(&mut self, now: Instant) -> Tick {
        if !self.timer.poll(now) {
            return Tick::Ignored;
        }
        let tick = self.playback.tick();
        match tick {
            Tick::Finished | Tick::Ignored => self.timer.cancel(),
            Tick::Advanced => {}
        }
        tick
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.timer.set_speed(speed);
    }

    /// Discard the trace and go idle (cursor -1). The last input is kept so
    /// the viewer can edit or reload it. Idempotent.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.playback.reset();
    }
}
