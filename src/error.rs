//! Error types for polygon clipping operations.

use thiserror::Error;

/// Errors surfaced by the sweep drivers.
///
/// The sweep either converges on finite output or, on pathological input that
/// defeats the robustness layer, would loop forever. A hard event budget
/// converts the latter into an error carrying the offending geometry so the
/// case can be reproduced and reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// The boolean sweep exceeded its event budget.
    #[error(
        "sweep did not converge after {events} events; \
         subject: {subject}, clipping: {clipping}"
    )]
    SweepDiverged {
        /// Number of events processed before giving up.
        events: usize,
        /// Printable subject geometry for reproduction.
        subject: String,
        /// Printable clipping geometry for reproduction.
        clipping: String,
    },

    /// The simplify sweep exceeded its event budget.
    #[error("simplify did not converge after {events} events; polygon: {polygon}")]
    SimplifyDiverged {
        /// Number of events processed before giving up.
        events: usize,
        /// Printable input geometry for reproduction.
        polygon: String,
    },
}
