//! Per-call propagation statistics.

/// What one propagation run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Number of full sweeps executed, including the final confirming one.
    pub passes: usize,
    /// Total number of cell values lowered across all passes.
    pub updates: usize,
    /// `true` if a pass finished without a change above tolerance;
    /// `false` if the pass cap was hit first.
    pub converged: bool,
    /// Number of foreground cells with a finite distance.
    pub reached: usize,
}
