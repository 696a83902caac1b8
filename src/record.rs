//! ADAS output record structures
//!
//! Field names and declaration order match the downstream JSON schema
//! exactly; serde serializes struct fields in declaration order, so the
//! order below is load-bearing.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::types::AttrValue;

/// `TimeStamp` of a frame document. The per-geometry encoders stamp the wall
/// clock; the combined encoder stamps the frame-name segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    NameParts(Vec<String>),
}

/// Per-frame document holding the encoded object labels.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectFrameRecord {
    #[serde(rename = "FrameNumber")]
    pub frame_number: usize,
    #[serde(rename = "TimeStamp")]
    pub timestamp: Timestamp,
    #[serde(rename = "FrameObjectLabels")]
    pub labels: Vec<ObjectLabelRecord>,
}

/// Per-frame document holding the scene-level tags.
#[derive(Debug, Clone, Serialize)]
pub struct SceneFrameRecord {
    #[serde(rename = "FrameNumber")]
    pub frame_number: usize,
    #[serde(rename = "TimeStamp")]
    pub timestamp: Timestamp,
    #[serde(rename = "FrameSceneLabels")]
    pub labels: SceneLabels,
}

/// Scene tag map: plain values for the per-geometry encoders, tagged spans
/// for the combined encoder.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SceneLabels {
    Plain(BTreeMap<String, Value>),
    Spans(BTreeMap<String, SceneSpan>),
}

/// Scene tag value annotated with the frame span it covers. Single-frame
/// encoding sets both ends to the same frame stem.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSpan {
    pub endtimestamp: String,
    pub starttimestamp: String,
    pub value: Value,
}

/// One encoded object label.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectLabelRecord {
    pub baseimage: String,
    pub roll: i32,
    pub pitch: i32,
    pub width: f64,
    pub height: f64,
    pub category: String,
    #[serde(rename = "Hierarchy")]
    pub hierarchy: String,
    #[serde(rename = "Trackid")]
    pub track_id: usize,
    pub attributes: BTreeMap<String, AttrValue>,
    pub imagetype: String,
    pub imagename: String,
    pub imagedata: String,
    pub imageheight: u32,
    pub imagewidth: u32,
    pub shape: ShapeRecord,
    pub keypoints: BTreeMap<String, Value>,
}

impl ObjectLabelRecord {
    /// Record with the fixed placeholder fields filled in. Geometry-dependent
    /// fields (`width`, `height`, image fields) start at their zero values
    /// and are set by the individual encoders.
    pub fn new(
        category: &str,
        track_id: usize,
        attributes: BTreeMap<String, AttrValue>,
        shape: ShapeRecord,
    ) -> Self {
        ObjectLabelRecord {
            baseimage: String::new(),
            roll: 0,
            pitch: 0,
            width: 0.0,
            height: 0.0,
            category: category.to_string(),
            hierarchy: String::new(),
            track_id,
            attributes,
            imagetype: String::new(),
            imagename: String::new(),
            imagedata: String::new(),
            imageheight: 0,
            imagewidth: 0,
            shape,
            keypoints: BTreeMap::new(),
        }
    }
}

/// Shape kind tag of an object label record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    Box,
    Pixel,
    Polyline,
}

/// Shape block of an object label.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeRecord {
    #[serde(rename = "Algo Generated")]
    pub algo_generated: String,
    #[serde(rename = "Manually Corrected")]
    pub manually_corrected: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub thickness: u32,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl ShapeRecord {
    /// Shape block with the fixed provenance flags and line thickness.
    /// Pixel-wise shapes are marked as not manually corrected, boxes and
    /// polylines as corrected.
    pub fn new(kind: ShapeKind, x: Vec<f64>, y: Vec<f64>) -> Self {
        let manually_corrected = match kind {
            ShapeKind::Pixel => "NO",
            ShapeKind::Box | ShapeKind::Polyline => "YES",
        };
        ShapeRecord {
            algo_generated: "NO".to_string(),
            manually_corrected: manually_corrected.to_string(),
            kind,
            thickness: 2,
            x,
            y,
            z: Vec::new(),
        }
    }
}
