//! Imported rest skeleton and bone-chain length inference.

use crate::transform::Transform;

/// Distance threshold for chain connectivity checks.
pub const CHAIN_EPSILON: f32 = 1e-5;

/// One imported bone: conditioned object-space rest transform in the host
/// convention, the inferred visual chain length, and nested children. The
/// host glue realizes these into its own armature structures.
#[derive(Clone, Debug, PartialEq)]
pub struct RestBone {
    pub name: String,
    pub transform: Transform,
    pub length: f32,
    pub children: Vec<RestBone>,
}

/// Find the child (if any) that continues this bone's visual chain, and the
/// distance to it.
///
/// A connected child sits on the bone's positive local Y axis to within
/// roundoff: the origin separation must be longer than `CHAIN_EPSILON`, its
/// projection onto local Y non-negative, and the rejection from local Y
/// shorter than `CHAIN_EPSILON`. The first match by iteration order wins.
pub fn connected_child(rest: &Transform, children: &[RestBone]) -> Option<(usize, f32)> {
    let y_axis = rest.rotation * glam::Vec3::Y;
    for (index, child) in children.iter().enumerate() {
        let separation = child.transform.translation - rest.translation;
        // Reject children that are too close to us.
        if separation.length() > CHAIN_EPSILON {
            let projection = separation.dot(y_axis);
            // Reject children on the negative side.
            if projection >= 0.0 {
                let rejection = separation - projection * y_axis;
                if rejection.length() < CHAIN_EPSILON {
                    return Some((index, projection));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn leaf(name: &str, at: Vec3) -> RestBone {
        RestBone {
            name: name.into(),
            transform: Transform {
                translation: at,
                ..Transform::IDENTITY
            },
            length: 1.0,
            children: Vec::new(),
        }
    }

    #[test]
    fn selects_the_child_ahead_on_the_local_y_axis() {
        let rest = Transform::IDENTITY;
        let children = vec![
            leaf("behind", Vec3::new(0.0, -1.0, 0.0)),
            leaf("off_axis", Vec3::new(0.1, 1.0, 0.0)),
            leaf("ahead", Vec3::new(0.0, 1.0, 0.0)),
        ];
        let (index, length) = connected_child(&rest, &children).expect("connected child");
        assert_eq!(index, 2);
        assert!((length - 1.0).abs() < 1e-6);
    }

    #[test]
    fn no_connected_child_when_all_candidates_are_rejected() {
        let rest = Transform::IDENTITY;
        let children = vec![
            leaf("coincident", Vec3::new(0.0, 5e-6, 0.0)),
            leaf("behind", Vec3::new(0.0, -2.0, 0.0)),
        ];
        assert_eq!(connected_child(&rest, &children), None);
    }
}
