//! Signed axis labels and the basis-change rotation between two axis
//! conventions (which world axis is "forward" and which is "up").

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::TranscodeError;

/// One of the six signed world axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "X")]
    PosX,
    #[serde(rename = "-X")]
    NegX,
    #[serde(rename = "Y")]
    PosY,
    #[serde(rename = "-Y")]
    NegY,
    #[serde(rename = "Z")]
    PosZ,
    #[serde(rename = "-Z")]
    NegZ,
}

impl Axis {
    /// Signed unit vector for this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::PosX => Vec3::X,
            Axis::NegX => Vec3::NEG_X,
            Axis::PosY => Vec3::Y,
            Axis::NegY => Vec3::NEG_Y,
            Axis::PosZ => Vec3::Z,
            Axis::NegZ => Vec3::NEG_Z,
        }
    }

    /// True when both labels lie on the same world axis, either sign.
    #[inline]
    pub fn is_parallel_to(self, other: Axis) -> bool {
        self.world_index() == other.world_index()
    }

    #[inline]
    fn world_index(self) -> u8 {
        match self {
            Axis::PosX | Axis::NegX => 0,
            Axis::PosY | Axis::NegY => 1,
            Axis::PosZ | Axis::NegZ => 2,
        }
    }
}

/// Rotation between two axis conventions, held as a 4x4 matrix pair.
///
/// Invariants: `forward` is orthonormal (pure rotation, no scale or shear)
/// and `inverse` is its exact transpose. Both are the identity when the two
/// conventions match.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisFrame {
    forward: Mat4,
    inverse: Mat4,
}

impl AxisFrame {
    /// Build the rotation mapping the source convention onto the destination
    /// convention. Fails when either (forward, up) pair is colinear,
    /// including opposite signs of the same axis.
    pub fn new(
        from_forward: Axis,
        from_up: Axis,
        to_forward: Axis,
        to_up: Axis,
    ) -> Result<Self, TranscodeError> {
        let from = basis(from_forward, from_up)?;
        let to = basis(to_forward, to_up)?;
        let forward = Mat4::from_mat3(to * from.transpose());
        Ok(Self {
            forward,
            inverse: forward.transpose(),
        })
    }

    #[inline]
    pub fn forward(&self) -> Mat4 {
        self.forward
    }

    #[inline]
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }
}

/// Orthonormal basis [right, forward, up] for one convention.
fn basis(forward: Axis, up: Axis) -> Result<Mat3, TranscodeError> {
    if forward.is_parallel_to(up) {
        return Err(TranscodeError::InvalidAxisConfiguration { forward, up });
    }
    let f = forward.unit();
    let u = up.unit();
    Ok(Mat3::from_cols(f.cross(u), f, u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_conventions_give_identity() {
        let frame = AxisFrame::new(Axis::PosY, Axis::PosZ, Axis::PosY, Axis::PosZ).unwrap();
        assert_eq!(frame.forward(), Mat4::IDENTITY);
        assert_eq!(frame.inverse(), Mat4::IDENTITY);
    }

    #[test]
    fn forward_maps_source_axes_onto_destination_axes() {
        let frame = AxisFrame::new(Axis::PosX, Axis::PosZ, Axis::PosY, Axis::PosZ).unwrap();
        let mapped_forward = frame.forward().transform_vector3(Vec3::X);
        let mapped_up = frame.forward().transform_vector3(Vec3::Z);
        assert!((mapped_forward - Vec3::Y).length() < 1e-6);
        assert!((mapped_up - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn inverse_is_transpose_and_orthonormal() {
        let frame = AxisFrame::new(Axis::NegX, Axis::PosY, Axis::PosZ, Axis::NegY).unwrap();
        assert_eq!(frame.inverse(), frame.forward().transpose());
        let product = frame.forward() * frame.inverse();
        for (a, b) in product
            .to_cols_array()
            .iter()
            .zip(Mat4::IDENTITY.to_cols_array())
        {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn colinear_axes_are_rejected() {
        assert!(matches!(
            AxisFrame::new(Axis::PosY, Axis::PosY, Axis::PosY, Axis::PosZ),
            Err(TranscodeError::InvalidAxisConfiguration { .. })
        ));
        // Opposite signs of the same axis are still colinear.
        assert!(matches!(
            AxisFrame::new(Axis::PosY, Axis::PosZ, Axis::PosZ, Axis::NegZ),
            Err(TranscodeError::InvalidAxisConfiguration { .. })
        ));
    }
}
