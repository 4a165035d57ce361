//! Skeleton side of the document: nested bones with object-space rest
//! transforms, and float-slot declarations.

use serde::{Deserialize, Serialize};

use crate::transform::TransformData;

/// One bone with its object-space rest transform and nested children.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bone {
    pub name: String,
    #[serde(default)]
    pub reference: TransformData,
    #[serde(default)]
    pub bones: Vec<Bone>,
}

impl Bone {
    pub fn new(name: impl Into<String>, reference: TransformData) -> Self {
        Self {
            name: name.into(),
            reference,
            bones: Vec::new(),
        }
    }
}

/// Declaration of a scalar slot with its rest value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FloatSlot {
    pub name: String,
    #[serde(default)]
    pub reference: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    pub name: String,
    #[serde(default)]
    pub bones: Vec<Bone>,
    #[serde(default)]
    pub floats: Vec<FloatSlot>,
}
