//! Animation track model: transform tracks, float tracks, and annotations.
//!
//! Tracks are append-only. Callers guarantee strictly increasing key frames
//! per track (the model does not re-sort); `Document::validate_basic`
//! re-checks that contract when a document crosses the tool boundary.

use serde::{Deserialize, Serialize};

use crate::transform::TransformData;

/// Space in which track transforms are expressed. Only object
/// (skeleton-root-relative) is currently supported.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceFrame {
    #[default]
    Object,
}

/// A single keyframe. Frames are non-negative and need not be contiguous.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Key<T> {
    pub frame: u32,
    pub value: T,
}

/// Per-bone transform keys. `name` is the canonical bone identifier used for
/// cross-referencing with the host's name-override table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransformTrack {
    pub name: String,
    #[serde(default)]
    pub reference: TransformData,
    #[serde(default)]
    pub keys: Vec<Key<TransformData>>,
}

impl TransformTrack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: TransformData::IDENTITY,
            keys: Vec::new(),
        }
    }

    /// Append a key. Caller guarantees monotonically increasing frames.
    pub fn add_key(&mut self, frame: u32, value: TransformData) {
        self.keys.push(Key { frame, value });
    }
}

/// A scalar custom property animated over time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FloatTrack {
    pub name: String,
    #[serde(default)]
    pub reference: f32,
    #[serde(default)]
    pub keys: Vec<Key<f32>>,
}

impl FloatTrack {
    pub fn new(name: impl Into<String>, reference: f32) -> Self {
        Self {
            name: name.into(),
            reference,
            keys: Vec::new(),
        }
    }

    /// Append a key. Caller guarantees monotonically increasing frames.
    pub fn add_key(&mut self, frame: u32, value: f32) {
        self.keys.push(Key { frame, value });
    }
}

/// Frame-stamped text marker, independent of any track. The frame may be
/// fractional when the host timeline was resampled.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    pub frame: f32,
    pub text: String,
}

/// One animation: ordered tracks and annotations plus the skeleton-name
/// string used for cross-file pairing. Built empty on export, parsed fully
/// populated on import; immutable once handed to the document boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animation {
    pub name: String,
    pub skeleton_name: String,
    #[serde(default)]
    pub reference_frame: ReferenceFrame,
    #[serde(default)]
    pub transform_tracks: Vec<TransformTrack>,
    #[serde(default)]
    pub float_tracks: Vec<FloatTrack>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Animation {
    pub fn new(name: impl Into<String>, skeleton_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skeleton_name: skeleton_name.into(),
            reference_frame: ReferenceFrame::Object,
            transform_tracks: Vec::new(),
            float_tracks: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn add_transform_track(&mut self, name: impl Into<String>) -> &mut TransformTrack {
        self.transform_tracks.push(TransformTrack::new(name));
        self.transform_tracks.last_mut().unwrap()
    }

    pub fn add_float_track(&mut self, name: impl Into<String>, reference: f32) -> &mut FloatTrack {
        self.float_tracks.push(FloatTrack::new(name, reference));
        self.float_tracks.last_mut().unwrap()
    }

    /// Append an annotation. No uniqueness requirement on frame or text.
    pub fn add_annotation(&mut self, frame: f32, text: impl Into<String>) {
        self.annotations.push(Annotation {
            frame,
            text: text.into(),
        });
    }
}
