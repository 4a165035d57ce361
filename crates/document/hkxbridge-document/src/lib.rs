//! hkxbridge-document: the intermediate document exchanged with the native
//! HKX converter tool.
//!
//! The document is an ordered collection of skeletons (bones with rest
//! transforms, float-slot declarations) and animations (transform tracks,
//! float tracks, annotations) plus the global sampling settings. The core
//! transcoder treats it purely as an ordered-keyed data sink/source; the
//! converter tool owns the binary container format.

pub mod animation;
pub mod document;
pub mod error;
pub mod skeleton;
pub mod transform;

pub use animation::{Animation, Annotation, FloatTrack, Key, ReferenceFrame, TransformTrack};
pub use document::{Document, DEFAULT_FRAME_RATE};
pub use error::DocumentError;
pub use skeleton::{Bone, FloatSlot, Skeleton};
pub use transform::TransformData;
