//! Host capability traits.
//!
//! The core never branches on host-API generation (flat channel lists,
//! slotted actions, layered strips): a concrete adapter implements whichever
//! storage exists behind `find_channel`/`create_channel`, and pose
//! evaluation at a possibly-fractional frame stays host-internal.

use glam::Mat4;

/// Opaque channel handle minted by the host adapter (small string key).
pub type ChannelHandle = String;

/// Canonical channel path for a bone's translation components (indices 0..3).
pub fn location_path(bone: &str) -> String {
    format!("bone/{bone}.location")
}

/// Canonical channel path for a bone's rotation quaternion. Component order
/// is (w, x, y, z), indices 0..4.
pub fn rotation_path(bone: &str) -> String {
    format!("bone/{bone}.rotation_quaternion")
}

/// Canonical channel path for a bone's scale components (indices 0..3).
pub fn scale_path(bone: &str) -> String {
    format!("bone/{bone}.scale")
}

/// Canonical channel path for a scalar custom property (index 0).
pub fn property_path(name: &str) -> String {
    format!("props/{name}")
}

/// Destination for imported keyframes: named per-component animated channels
/// plus frame-stamped markers.
pub trait ChannelSink {
    fn find_channel(&mut self, path: &str, index: u32) -> Option<ChannelHandle>;
    fn create_channel(&mut self, path: &str, index: u32, group: &str) -> ChannelHandle;
    fn insert_sample(&mut self, channel: &ChannelHandle, frame: f32, value: f32);
    fn add_marker(&mut self, frame: f32, text: &str);
}

/// Host pose marker as read back on export.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub frame: f32,
    pub text: String,
}

/// Source of host-space poses sampled on export. `set_frame` accepts a
/// fractional frame; interpolation between stored keys is a host capability
/// and is never reimplemented here.
pub trait PoseSource {
    fn set_frame(&mut self, frame: f32);
    /// Object-space pose matrix for a bone at the current frame.
    fn bone_pose(&self, bone: &str) -> Option<Mat4>;
    /// Current value of a scalar custom property.
    fn property(&self, name: &str) -> Option<f32>;
    /// Custom properties with at least one recorded change.
    fn keyed_properties(&self) -> Vec<String>;
    fn markers(&self) -> Vec<Marker>;
}
