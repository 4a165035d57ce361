//! Snap-to-canonical quantization of decomposed transforms.
//!
//! Accumulated floating-point noise is collapsed to exact canonical values:
//! 0 for translation and rotation axis components, 1 for scale components
//! and the rotation w component. Thresholds differ per call site, so they
//! are carried as configuration rather than a single constant.

use glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::transform::Transform;

/// Per-field epsilon thresholds for one snap pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SnapConfig {
    pub translation: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl SnapConfig {
    /// Bone rest transforms on skeleton import.
    pub const REST_IMPORT: Self = Self {
        translation: 1e-5,
        rotation: 1e-5,
        scale: 1e-5,
    };

    /// Per-frame transform keys on animation import.
    pub const KEY_IMPORT: Self = Self {
        translation: 1e-4,
        rotation: 1e-3,
        scale: 1e-4,
    };

    /// Per-frame pose samples on animation export.
    pub const KEY_EXPORT: Self = Self {
        translation: 1e-5,
        rotation: 1e-3,
        scale: 1e-5,
    };

    /// Snap a transform against these thresholds. Idempotent and total over
    /// finite inputs; never fails.
    pub fn apply(&self, t: Transform) -> Transform {
        let translation = Vec3::new(
            snap_zero(t.translation.x, self.translation),
            snap_zero(t.translation.y, self.translation),
            snap_zero(t.translation.z, self.translation),
        );

        // Renormalize before snapping, then again after: zeroing small
        // components shifts the norm, and the second pass keeps the result
        // a unit quaternion instead of letting the rounding accumulate.
        let q = normalized(t.rotation);
        let q = Quat::from_xyzw(
            snap_zero(q.x, self.rotation),
            snap_zero(q.y, self.rotation),
            snap_zero(q.z, self.rotation),
            snap_one(q.w, self.rotation),
        );
        let rotation = normalized(q);

        let scale = Vec3::new(
            snap_one(t.scale.x, self.scale),
            snap_one(t.scale.y, self.scale),
            snap_one(t.scale.z, self.scale),
        );

        Transform {
            translation,
            rotation,
            scale,
        }
    }
}

#[inline]
fn snap_zero(v: f32, eps: f32) -> f32 {
    if v.abs() < eps {
        0.0
    } else {
        v
    }
}

#[inline]
fn snap_one(v: f32, eps: f32) -> f32 {
    if (v - 1.0).abs() < eps {
        1.0
    } else {
        v
    }
}

#[inline]
fn normalized(q: Quat) -> Quat {
    Vec4::from(q)
        .try_normalize()
        .map_or(Quat::IDENTITY, Quat::from_vec4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_identity_collapses_to_exact_identity() {
        let noisy = Transform {
            translation: Vec3::new(4e-6, -8e-6, 0.0),
            rotation: Quat::from_xyzw(3e-6, -2e-6, 1e-6, 1.0 - 4e-6),
            scale: Vec3::new(1.0 + 5e-6, 1.0 - 5e-6, 1.0),
        };
        let snapped = SnapConfig::REST_IMPORT.apply(noisy);
        assert_eq!(snapped, Transform::IDENTITY);
    }

    #[test]
    fn snap_is_idempotent() {
        let t = Transform {
            translation: Vec3::new(0.25, 2e-6, -3.5),
            rotation: Quat::from_xyzw(0.5, 1e-6, 0.0, 0.8660254),
            scale: Vec3::new(2.0, 1.0 + 1e-7, 1.0),
        };
        let once = SnapConfig::REST_IMPORT.apply(t);
        let twice = SnapConfig::REST_IMPORT.apply(once);
        assert!((once.translation - twice.translation).length() < 1e-7);
        assert!(once.rotation.abs_diff_eq(twice.rotation, 1e-7));
        assert!((once.scale - twice.scale).length() < 1e-7);
    }

    #[test]
    fn components_above_threshold_pass_through() {
        let t = Transform {
            translation: Vec3::new(0.01, -0.02, 0.03),
            rotation: Quat::from_xyzw(0.0, 0.0, 0.0, 1.0),
            scale: Vec3::new(1.5, 0.5, 2.0),
        };
        let snapped = SnapConfig::KEY_IMPORT.apply(t);
        assert_eq!(snapped.translation, t.translation);
        assert_eq!(snapped.scale, t.scale);
    }
}
