//! Rest-skeleton conditioning and chain-length inference.

use glam::{Quat, Vec3};
use hkxbridge_document::{Bone, Skeleton, TransformData};
use hkxbridge_transcode_core::{Axis, Transcoder, Transform};

fn bone_at(name: &str, pos: [f32; 3]) -> Bone {
    Bone::new(
        name,
        TransformData {
            pos,
            ..TransformData::IDENTITY
        },
    )
}

#[test]
fn chained_bones_get_their_projected_length() {
    let mut root = bone_at("Root", [0.0, 0.0, 0.0]);
    root.bones.push(bone_at("Behind", [0.0, -1.0, 0.0]));
    root.bones.push(bone_at("Spine", [0.0, 2.0, 0.0]));
    let skeleton = Skeleton {
        name: "biped".into(),
        bones: vec![root],
        floats: vec![],
    };

    let importer = Transcoder::importer(Axis::PosY, Axis::PosZ, 1.0).unwrap();
    let rest = importer.import_skeleton(&skeleton);

    assert_eq!(rest.len(), 1);
    let root = &rest[0];
    assert_eq!(root.children.len(), 2);
    // Spine continues the chain along +Y at distance 2; Behind does not.
    assert!((root.length - 2.0).abs() < 1e-5);
    // Leaves keep the default unit length.
    assert_eq!(root.children[1].length, 1.0);
}

#[test]
fn rest_transforms_are_length_scaled_and_snapped() {
    let skeleton = Skeleton {
        name: "biped".into(),
        bones: vec![Bone::new(
            "Root",
            TransformData {
                pos: [10.0, 20.0, 4e-5],
                rot: [0.0, 0.0, 3e-6, 1.0 - 1e-6],
                scale: [1.0 + 4e-6, 1.0, 1.0],
            },
        )],
        floats: vec![],
    };

    let importer = Transcoder::importer(Axis::PosY, Axis::PosZ, 10.0).unwrap();
    let rest = importer.import_skeleton(&skeleton);
    let expected = Transform::new(Vec3::new(1.0, 2.0, 0.0), Quat::IDENTITY, Vec3::ONE);

    assert!((rest[0].transform.translation - expected.translation).length() < 1e-6);
    assert_eq!(rest[0].transform.rotation, Quat::IDENTITY);
    assert_eq!(rest[0].transform.scale, Vec3::ONE);
}

#[test]
fn rest_import_applies_the_axis_frame_single_sided() {
    // File convention X-forward/Z-up: the rest pose is rotated into the host
    // convention, so a bone pointing along file X ends up along host Y.
    let skeleton = Skeleton {
        name: "biped".into(),
        bones: vec![Bone::new("Root", TransformData::IDENTITY)],
        floats: vec![],
    };

    let importer = Transcoder::importer(Axis::PosX, Axis::PosZ, 1.0).unwrap();
    let rest = importer.import_skeleton(&skeleton);
    let forward = importer.axis_frame().forward();
    let local_y = rest[0].transform.rotation * Vec3::Y;
    let expected = forward.transform_vector3(Vec3::Y);
    assert!((local_y - expected).length() < 1e-5);
}
