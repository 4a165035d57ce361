//! Transcoding orchestration between the document boundary and the host.
//!
//! Import conditions file-space keys into host tracks; export samples host
//! poses at the canonical cadence and appends keys to document tracks. Both
//! directions share the condition (decompose, snap, recompose) primitive;
//! structural checks run before any write, so a failed request commits
//! nothing.

use glam::Mat4;

use hkxbridge_document::{Animation, Bone, Document, FloatTrack, Skeleton, TransformData};

use crate::axis::{Axis, AxisFrame};
use crate::error::TranscodeError;
use crate::host::{
    location_path, property_path, rotation_path, scale_path, ChannelHandle, ChannelSink,
    PoseSource,
};
use crate::names::NameOverrides;
use crate::sampling::{SampleClock, SAMPLING_RATE};
use crate::skeleton::{connected_child, RestBone};
use crate::snap::SnapConfig;
use crate::transform::{condition, Transform};

/// The host's fixed bone convention: bones point along +Y with +Z up.
pub const HOST_FORWARD: Axis = Axis::PosY;
pub const HOST_UP: Axis = Axis::PosZ;

/// One destination rig on import: a channel sink plus the override table
/// built from its bone metadata.
pub struct ImportRig<'a> {
    pub sink: &'a mut dyn ChannelSink,
    pub overrides: &'a NameOverrides,
}

/// One source rig on export: a pose source, its override table, the bones
/// selected for export, and the skeleton name used for cross-file pairing.
pub struct ExportRig<'a> {
    pub source: &'a mut dyn PoseSource,
    pub overrides: &'a NameOverrides,
    pub skeleton_name: String,
    pub bones: Vec<String>,
}

/// Coordinate-frame and keyframe transcoder for one conversion request.
#[derive(Clone, Copy, Debug)]
pub struct Transcoder {
    frame: AxisFrame,
    length_scale: f32,
}

impl Transcoder {
    /// Transcoder conditioning file-space data into the host convention.
    pub fn importer(
        file_forward: Axis,
        file_up: Axis,
        length_scale: f32,
    ) -> Result<Self, TranscodeError> {
        Ok(Self {
            frame: AxisFrame::new(file_forward, file_up, HOST_FORWARD, HOST_UP)?,
            length_scale,
        })
    }

    /// Transcoder conditioning host-space data into the file convention.
    pub fn exporter(
        file_forward: Axis,
        file_up: Axis,
        length_scale: f32,
    ) -> Result<Self, TranscodeError> {
        Ok(Self {
            frame: AxisFrame::new(HOST_FORWARD, HOST_UP, file_forward, file_up)?,
            length_scale,
        })
    }

    pub fn axis_frame(&self) -> &AxisFrame {
        &self.frame
    }

    // ---- import ----------------------------------------------------------

    /// Transcode every animation in the document into the matching rig.
    /// Rig count must equal animation count; the check precedes all channel
    /// writes so a mismatch commits no tracks.
    pub fn import_document(
        &self,
        doc: &Document,
        rigs: &mut [ImportRig<'_>],
    ) -> Result<(), TranscodeError> {
        if rigs.len() != doc.animations.len() {
            return Err(TranscodeError::StructuralMismatch {
                animations: doc.animations.len(),
                rigs: rigs.len(),
            });
        }
        if doc.frame_rate != SAMPLING_RATE {
            // Recoverable: key frames are kept as-is, the host timeline is
            // expected to run at the canonical rate.
            log::warn!(
                "document frame rate {} fps differs from the canonical {SAMPLING_RATE} fps",
                doc.frame_rate
            );
        }
        for (anim, rig) in doc.animations.iter().zip(rigs.iter_mut()) {
            self.import_animation(anim, rig.overrides, rig.sink);
        }
        Ok(())
    }

    /// Transcode one animation's tracks and annotations into host channels.
    pub fn import_animation(
        &self,
        anim: &Animation,
        overrides: &NameOverrides,
        sink: &mut dyn ChannelSink,
    ) {
        for track in &anim.transform_tracks {
            let name = overrides.to_host(&track.name);
            self.import_transform_track(track, name, sink);
        }
        for track in &anim.float_tracks {
            import_float_track(track, sink);
        }
        for annotation in &anim.annotations {
            sink.add_marker(annotation.frame, &annotation.text);
        }
    }

    fn import_transform_track(
        &self,
        track: &hkxbridge_document::TransformTrack,
        name: &str,
        sink: &mut dyn ChannelSink,
    ) {
        let loc = ensure_channels(sink, &location_path(name), 3, name);
        let rot = ensure_channels(sink, &rotation_path(name), 4, name);
        let scl = ensure_channels(sink, &scale_path(name), 3, name);

        for key in &track.keys {
            let out = self.import_key(&key.value);
            let frame = key.frame as f32;

            for (i, channel) in loc.iter().enumerate() {
                sink.insert_sample(channel, frame, out.translation[i]);
            }
            // Host quaternion channels are ordered (w, x, y, z).
            sink.insert_sample(&rot[0], frame, out.rotation.w);
            sink.insert_sample(&rot[1], frame, out.rotation.x);
            sink.insert_sample(&rot[2], frame, out.rotation.y);
            sink.insert_sample(&rot[3], frame, out.rotation.z);
            for (i, channel) in scl.iter().enumerate() {
                sink.insert_sample(channel, frame, out.scale[i]);
            }
        }
    }

    /// Condition one file-space key into the host convention: length-scale
    /// divide, then conjugation by the axis frame (sandwiching reorients the
    /// translation and the local basis together), then snap.
    pub fn import_key(&self, value: &TransformData) -> Transform {
        let mut t = Transform::from(*value);
        t.translation /= self.length_scale;
        condition(
            self.frame.inverse() * t.compose() * self.frame.forward(),
            &SnapConfig::KEY_IMPORT,
        )
    }

    /// Condition a skeleton's rest bones into the host convention, inferring
    /// chain lengths. Rest poses are written in the destination convention
    /// directly, so the axis frame applies single-sided.
    pub fn import_skeleton(&self, skeleton: &Skeleton) -> Vec<RestBone> {
        skeleton.bones.iter().map(|b| self.import_bone(b)).collect()
    }

    fn import_bone(&self, bone: &Bone) -> RestBone {
        let mut t = Transform::from(bone.reference);
        t.translation /= self.length_scale;
        let rest = condition(t.compose() * self.frame.forward(), &SnapConfig::REST_IMPORT);

        let children: Vec<RestBone> = bone.bones.iter().map(|b| self.import_bone(b)).collect();
        let length = connected_child(&rest, &children)
            .map(|(_, length)| length)
            .unwrap_or(1.0);

        RestBone {
            name: bone.name.clone(),
            transform: rest,
            length,
            children,
        }
    }

    // ---- export ----------------------------------------------------------

    /// Sample every rig over the clock interval and assemble the document.
    /// Rigs with no selected bones are skipped with a warning; the request
    /// fails with `EmptySelection` only when nothing at all was exported.
    pub fn export_document(
        &self,
        clock: SampleClock,
        additive: bool,
        rigs: &mut [ExportRig<'_>],
    ) -> Result<Document, TranscodeError> {
        if rigs.is_empty() {
            return Err(TranscodeError::EmptySelection);
        }

        let mut doc = Document::new();
        doc.frames = clock.count();
        doc.frame_rate = SAMPLING_RATE;
        doc.additive = additive;

        for rig in rigs.iter_mut() {
            if rig.bones.is_empty() {
                log::warn!("no bones selected in {}, ignoring", rig.skeleton_name);
                continue;
            }
            let name = doc.animations.len().to_string();
            let anim = self.export_animation(name, rig, clock);
            doc.animations.push(anim);
        }

        if doc.animations.is_empty() {
            return Err(TranscodeError::EmptySelection);
        }
        Ok(doc)
    }

    /// Sample one rig into an animation: transform keys per selected bone,
    /// float keys per keyed custom property, annotations from pose markers.
    pub fn export_animation(
        &self,
        name: String,
        rig: &mut ExportRig<'_>,
        clock: SampleClock,
    ) -> Animation {
        let mut anim = Animation::new(name, rig.skeleton_name.clone());

        // Drop bones the rig does not know before sampling starts, so every
        // surviving track receives a key at every sample index.
        rig.source.set_frame(clock.frame_at(0));
        let bones: Vec<String> = rig
            .bones
            .iter()
            .filter(|bone| {
                let known = rig.source.bone_pose(bone).is_some();
                if !known {
                    log::warn!("bone {bone} not found in {}, ignoring", rig.skeleton_name);
                }
                known
            })
            .cloned()
            .collect();

        for bone in &bones {
            anim.add_transform_track(rig.overrides.to_hkx(bone));
        }

        let properties = rig.source.keyed_properties();
        for prop in &properties {
            let reference = rig.source.property(prop).unwrap_or(0.0);
            anim.add_float_track(prop.clone(), reference);
        }

        for i in 0..clock.count() {
            rig.source.set_frame(clock.frame_at(i));
            for (track, bone) in anim.transform_tracks.iter_mut().zip(&bones) {
                if let Some(pose) = rig.source.bone_pose(bone) {
                    track.add_key(i, self.export_key(pose).into());
                }
            }
            for (track, prop) in anim.float_tracks.iter_mut().zip(&properties) {
                // Raw value, no axis or scale conversion.
                track.add_key(i, rig.source.property(prop).unwrap_or(0.0));
            }
        }

        for marker in rig.source.markers() {
            if let Some(index) = clock.remap_marker(marker.frame) {
                anim.add_annotation(index, marker.text);
            }
        }

        anim
    }

    /// Condition one host pose into the file convention: snap host rounding
    /// noise first, rotate into the destination frame (single-sided, the
    /// source side is already the host convention), then length-scale.
    pub fn export_key(&self, pose: Mat4) -> Transform {
        let conditioned = condition(pose, &SnapConfig::KEY_EXPORT);
        let mut out = Transform::decompose(conditioned.compose() * self.frame.forward());
        out.translation *= self.length_scale;
        out
    }
}

fn import_float_track(track: &FloatTrack, sink: &mut dyn ChannelSink) {
    let path = property_path(&track.name);
    let channel = ensure_channel(sink, &path, 0, "");
    for key in &track.keys {
        sink.insert_sample(&channel, key.frame as f32, key.value);
    }
}

fn ensure_channel(sink: &mut dyn ChannelSink, path: &str, index: u32, group: &str) -> ChannelHandle {
    sink.find_channel(path, index)
        .unwrap_or_else(|| sink.create_channel(path, index, group))
}

fn ensure_channels(
    sink: &mut dyn ChannelSink,
    path: &str,
    count: u32,
    group: &str,
) -> Vec<ChannelHandle> {
    (0..count)
        .map(|index| ensure_channel(sink, path, index, group))
        .collect()
}
