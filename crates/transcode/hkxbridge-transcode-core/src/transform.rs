//! Decomposed transform and the shared conditioning primitive.

use glam::{Mat4, Quat, Vec3};
use hkxbridge_document::TransformData;

use crate::snap::SnapConfig;

/// Translation, unit rotation quaternion, and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Rebuild the 4x4 matrix.
    #[inline]
    pub fn compose(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Split a matrix into translation, rotation, and scale.
    #[inline]
    pub fn decompose(m: Mat4) -> Self {
        let (scale, rotation, translation) = m.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<TransformData> for Transform {
    fn from(data: TransformData) -> Self {
        Self {
            translation: Vec3::from_array(data.pos),
            rotation: Quat::from_array(data.rot),
            scale: Vec3::from_array(data.scale),
        }
    }
}

impl From<Transform> for TransformData {
    fn from(t: Transform) -> Self {
        Self {
            pos: t.translation.to_array(),
            rot: t.rotation.to_array(),
            scale: t.scale.to_array(),
        }
    }
}

/// Decompose-then-snap pipeline shared by rest-bone import, key import, and
/// key export (the same conditioning at different cardinalities).
#[inline]
pub fn condition(m: Mat4, snap: &SnapConfig) -> Transform {
    snap.apply(Transform::decompose(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_decompose_round_trip() {
        let t = Transform::new(
            Vec3::new(1.0, -2.0, 3.0),
            Quat::from_rotation_z(0.7),
            Vec3::new(2.0, 2.0, 2.0),
        );
        let back = Transform::decompose(t.compose());
        assert!((t.translation - back.translation).length() < 1e-5);
        assert!(t.rotation.abs_diff_eq(back.rotation, 1e-5));
        assert!((t.scale - back.scale).length() < 1e-5);
    }
}
