//! Plain-array transform value carried by document tracks and rest poses.

use serde::{Deserialize, Serialize};

/// Decomposed transform as stored in the document: translation, rotation
/// quaternion (x, y, z, w) and per-axis scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransformData {
    pub pos: [f32; 3],
    /// Quaternion components in (x, y, z, w) order.
    pub rot: [f32; 4],
    pub scale: [f32; 3],
}

impl TransformData {
    pub const IDENTITY: Self = Self {
        pos: [0.0, 0.0, 0.0],
        rot: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };
}

impl Default for TransformData {
    fn default() -> Self {
        Self::IDENTITY
    }
}
