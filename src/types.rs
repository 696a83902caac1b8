use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Pixel dimensions of a frame or cut-out image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };
}

// Attribute values attached to a label: free text, or the selected options
// of a multi-choice attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// True when the value carries no content; empty values are dropped from
    /// encoded records.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::List(v) => v.is_empty(),
        }
    }
}

/// Geometry of an object label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LabelGeometry {
    Boundbox {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
    Polyline {
        points: Vec<(f64, f64)>,
    },
    Contour {
        points: Vec<(f64, f64)>,
    },
}

/// A single object label on a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub class_id: u64,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
    pub geometry: LabelGeometry,
}

/// An entry in the label-class registry owned by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelClass {
    pub id: u64,
    pub name: String,
}

/// One frame of the project with its object labels and scene tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub scene: BTreeMap<String, Value>,
}

/// Capture channel of the source camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraChannel {
    Low,
    Medium,
    High,
}

impl CameraChannel {
    /// Channel name as it appears in cut-out image names.
    pub fn channel_name(self) -> &'static str {
        match self {
            CameraChannel::Low => "CAMERALow",
            CameraChannel::Medium => "CAMERAMedium",
            CameraChannel::High => "CAMERAHigh",
        }
    }
}

/// Project-level options relevant to encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub label_classes: Vec<LabelClass>,
    #[serde(default)]
    pub channel: Option<CameraChannel>,
}

impl ProjectOptions {
    /// Look up a label class by id.
    pub fn label_class(&self, id: u64) -> Option<&LabelClass> {
        self.label_classes.iter().find(|cl| cl.id == id)
    }
}

/// The labeling project as owned by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub frames: Vec<Frame>,
    pub options: ProjectOptions,
}
