// Snapshot and trace model for algorithm replay

pub mod view;

use std::fmt;

/// One immutable moment of an algorithm run.
///
/// Every field the renderer needs at step `index` is present right here; there
/// is no carry-over from the previous snapshot. The `state` payload is a value
/// copy taken at record time, never a reference into the generator's working
/// storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<S> {
    /// Position of this snapshot within its trace
    pub index: usize,
    /// Algorithm-family state record (array, graph, queue, ...)
    pub state: S,
    /// One-sentence narration of what just happened and why
    pub explanation: String,
    /// Index into the generator's reference listing, if a line applies
    pub source_line: Option<usize>,
    /// True only for the final snapshot, which carries the run's result
    pub terminal: bool,
}

/// The full ordered history of one algorithm run.
///
/// Invariants enforced at construction: at least one snapshot, and the last
/// snapshot is terminal. A `Trace` is never mutated after `TraceBuilder::finish`;
/// loading new input produces a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> Trace<S> {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept so callers can treat a trace like a slice.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot<S>> {
        self.snapshots.get(index)
    }

    /// The terminal snapshot.
    pub fn last(&self) -> &Snapshot<S> {
        // Non-empty by construction
        self.snapshots.last().unwrap()
    }

    pub fn snapshots(&self) -> &[Snapshot<S>] {
        &self.snapshots
    }
}

/// Append-only accumulator used by trace generators.
///
/// `record` narrates an intermediate step; `record_terminal` narrates the
/// final one. `finish` checks the trace invariants and hands back an
/// immutable [`Trace`].
#[derive(Debug)]
pub struct TraceBuilder<S> {
    algorithm: &'static str,
    snapshots: Vec<Snapshot<S>>,
}

impl<S> TraceBuilder<S> {
    pub fn new(algorithm: &'static str) -> Self {
        TraceBuilder {
            algorithm,
            snapshots: Vec::new(),
        }
    }

    /// Append an intermediate snapshot. `state` must be a value copy of the
    /// generator's working storage.
    pub fn record(&mut self, state: S, explanation: impl Into<String>, source_line: Option<usize>) {
        let index = self.snapshots.len();
        self.snapshots.push(Snapshot {
            index,
            state,
            explanation: explanation.into(),
            source_line,
            terminal: false,
        });
    }

    /// Append the terminal snapshot carrying the algorithm's final result.
    pub fn record_terminal(
        &mut self,
        state: S,
        explanation: impl Into<String>,
        source_line: Option<usize>,
    ) {
        let index = self.snapshots.len();
        self.snapshots.push(Snapshot {
            index,
            state,
            explanation: explanation.into(),
            source_line,
            terminal: true,
        });
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Seal the trace. Fails if no snapshot was recorded or the last one is
    /// not terminal; a partial trace must never reach the playback controller.
    pub fn finish(self) -> Result<Trace<S>, GenerationError> {
        if self.snapshots.is_empty() {
            return Err(GenerationError::EmptyTrace {
                algorithm: self.algorithm,
            });
        }
        if !self.snapshots.last().is_some_and(|s| s.terminal) {
            return Err(GenerationError::NotTerminal {
                algorithm: self.algorithm,
            });
        }
        Ok(Trace {
            snapshots: self.snapshots,
        })
    }
}

/// Defects inside a trace generator.
///
/// These indicate a precondition the input validator should have rejected, or
/// a generator that stopped narrating early. They abort the current load or
/// variant switch without touching a previously loaded trace.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Generator produced no snapshots at all
    EmptyTrace { algorithm: &'static str },

    /// Generator's last snapshot was not marked terminal
    NotTerminal { algorithm: &'static str },

    /// Parameters passed validation but broke an internal precondition
    InconsistentParams {
        algorithm: &'static str,
        message: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::EmptyTrace { algorithm } => {
                write!(f, "{}: generator produced an empty trace", algorithm)
            }
            GenerationError::NotTerminal { algorithm } => {
                write!(
                    f,
                    "{}: last snapshot of the trace is not terminal",
                    algorithm
                )
            }
            GenerationError::InconsistentParams { algorithm, message } => {
                write!(f, "{}: inconsistent parameters: {}", algorithm, message)
            }
        }
    }
}

impl std::error::Error for GenerationError {}
