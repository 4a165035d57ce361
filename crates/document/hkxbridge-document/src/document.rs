//! Root document type and its JSON boundary.

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::error::DocumentError;
use crate::skeleton::Skeleton;

/// Default canonical sampling rate written by the exporting side.
pub const DEFAULT_FRAME_RATE: f32 = 30.0;

/// The full document exchanged with the converter tool: ordered skeletons,
/// ordered animations, and global sampling settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub skeletons: Vec<Skeleton>,
    #[serde(default)]
    pub animations: Vec<Animation>,
    /// Total sampled frame count shared by every animation.
    #[serde(default)]
    pub frames: u32,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    /// Store offsets instead of poses (additive blending).
    #[serde(default)]
    pub additive: bool,
}

fn default_frame_rate() -> f32 {
    DEFAULT_FRAME_RATE
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            skeletons: Vec::new(),
            animations: Vec::new(),
            frames: 0,
            frame_rate: DEFAULT_FRAME_RATE,
            additive: false,
        }
    }

    /// Parse a document from JSON and validate basic invariants.
    pub fn from_json_str(s: &str) -> Result<Self, DocumentError> {
        let doc: Document =
            serde_json::from_str(s).map_err(|e| DocumentError::Parse(e.to_string()))?;
        doc.validate_basic()?;
        Ok(doc)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Validate basic invariants: positive frame rate, a frame count when
    /// animations are present, and strictly increasing key frames per track.
    pub fn validate_basic(&self) -> Result<(), DocumentError> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(DocumentError::Invalid {
                reason: format!("frame_rate must be positive, got {}", self.frame_rate),
            });
        }
        if !self.animations.is_empty() && self.frames == 0 {
            return Err(DocumentError::Invalid {
                reason: "document holds animations but frames is 0".into(),
            });
        }
        for anim in &self.animations {
            for track in &anim.transform_tracks {
                validate_increasing(
                    track.keys.iter().map(|k| k.frame),
                    &anim.name,
                    &track.name,
                )?;
            }
            for track in &anim.float_tracks {
                validate_increasing(
                    track.keys.iter().map(|k| k.frame),
                    &anim.name,
                    &track.name,
                )?;
            }
        }
        Ok(())
    }
}

fn validate_increasing(
    frames: impl Iterator<Item = u32>,
    anim: &str,
    track: &str,
) -> Result<(), DocumentError> {
    let mut last: Option<u32> = None;
    for frame in frames {
        if let Some(prev) = last {
            if frame <= prev {
                return Err(DocumentError::Invalid {
                    reason: format!(
                        "key frames must be strictly increasing in track '{track}' of animation '{anim}'"
                    ),
                });
            }
        }
        last = Some(frame);
    }
    Ok(())
}
