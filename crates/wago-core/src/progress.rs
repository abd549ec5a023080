//! Progress reporting seam between the pipeline and the console.

use std::fmt;

/// Number of index passes reported during [`Phase::Indexing`].
pub const INDEX_STEPS: u64 = 4;

/// Pipeline phases surfaced to a [`ProgressReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Building lookup maps from the auxiliary tables.
    Indexing,
    /// Streaming the primary table through the matcher.
    Filtering,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Indexing => "Indexing tables",
            Phase::Filtering => "Filtering items",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives progress events from the extraction pipeline.
pub trait ProgressReporter {
    /// A phase begins. `total` is the expected number of units, when known.
    fn phase_started(&mut self, phase: Phase, total: Option<u64>);

    /// `delta` more units of the current phase are done.
    fn advance(&mut self, delta: u64);

    fn phase_finished(&mut self, phase: Phase);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn phase_started(&mut self, _phase: Phase, _total: Option<u64>) {}

    fn advance(&mut self, _delta: u64) {}

    fn phase_finished(&mut self, _phase: Phase) {}
}
