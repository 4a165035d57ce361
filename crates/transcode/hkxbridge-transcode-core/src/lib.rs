//! hkxbridge-transcode-core (host-agnostic)
//!
//! Coordinate-frame reconciliation and keyframe-track transcoding between a
//! host application's bone animation and the intermediate document consumed
//! by the native HKX converter. The engine is single-threaded and purely
//! synchronous: axis conversion, snapping, and track transcoding are
//! referentially transparent given their inputs. The host is reached only
//! through the capability traits in `host`.

pub mod axis;
pub mod error;
pub mod host;
pub mod names;
pub mod sampling;
pub mod skeleton;
pub mod snap;
pub mod tool;
pub mod transcoder;
pub mod transform;

// Re-exports for adapters
pub use axis::{Axis, AxisFrame};
pub use error::TranscodeError;
pub use host::{
    location_path, property_path, rotation_path, scale_path, ChannelHandle, ChannelSink, Marker,
    PoseSource,
};
pub use names::NameOverrides;
pub use sampling::{SampleClock, SAMPLING_RATE};
pub use skeleton::{connected_child, RestBone, CHAIN_EPSILON};
pub use snap::SnapConfig;
pub use tool::{ConverterTool, OutputFormat};
pub use transcoder::{ExportRig, ImportRig, Transcoder, HOST_FORWARD, HOST_UP};
pub use transform::{condition, Transform};
