//! Error taxonomy for the transcoding engine.
//!
//! Every variant is detected synchronously and reported as a single terminal
//! failure of the whole import/export operation; there is no partial-success
//! state. Snapping is total over finite inputs and never appears here.

use crate::axis::Axis;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TranscodeError {
    /// The requested forward/up axis pair is degenerate. Surfaced before any
    /// track processing begins.
    #[error("invalid axis configuration: forward {forward:?} and up {up:?} are colinear")]
    InvalidAxisConfiguration { forward: Axis, up: Axis },

    /// The converter process exited non-zero, could not be started, or the
    /// expected intermediate document could not be read back.
    #[error("converter tool failure: {reason}")]
    ExternalToolFailure { reason: String },

    /// Destination rig count does not match the animations in the document.
    #[error("document holds {animations} animation(s) but {rigs} rig(s) were supplied")]
    StructuralMismatch { animations: usize, rigs: usize },

    /// Nothing to export: no rigs, or no bones selected in any rig.
    #[error("nothing to export: no bones selected")]
    EmptySelection,

    /// The sample interval has zero length.
    #[error("frame interval [{start}, {end}] is empty")]
    EmptyInterval { start: u32, end: u32 },
}

impl From<std::io::Error> for TranscodeError {
    fn from(err: std::io::Error) -> Self {
        Self::ExternalToolFailure {
            reason: err.to_string(),
        }
    }
}
