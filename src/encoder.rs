//! Encoder seam and the mapping helpers shared by all output flavors.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::types::{AttrValue, CameraChannel, Frame, Project};
use crate::utils::is_truthy;

/// Output subfolder a generated file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subfolder {
    Annotations,
}

impl Subfolder {
    pub fn as_str(self) -> &'static str {
        match self {
            Subfolder::Annotations => "annotations",
        }
    }
}

/// A file payload produced by an encoder. The host owns file I/O;
/// [`crate::io::write_outputs`] is the bundled writer.
#[derive(Debug, Clone)]
pub struct FileWriteInfo {
    pub name: String,
    pub subdirectory: Subfolder,
    pub data: Vec<u8>,
}

/// Errors produced while encoding a frame.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("frame {0:?} is not part of the project")]
    UnknownFrame(String),
    #[error("failed to serialize annotation record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A format encoder invoked once per frame by the host application.
///
/// Encoders are pure data transformations: they never touch the filesystem
/// and never mutate the project model.
pub trait Encoder {
    /// Stable identifier, e.g. `encoders.adas.boundbox`.
    fn name(&self) -> &'static str;

    /// Human-readable title shown by the host.
    fn title(&self) -> &'static str;

    /// Encode one frame into its output files.
    fn encode(&self, frame: &Frame, project: &Project)
        -> Result<Vec<FileWriteInfo>, EncodeError>;

    /// Produce any project-level outputs after all frames were encoded.
    fn finalize(&self, _project: &Project) -> Result<Vec<FileWriteInfo>, EncodeError> {
        Ok(Vec::new())
    }
}

/// Index of `frame` within the project, matched by name.
pub fn frame_index(frame: &Frame, project: &Project) -> Result<usize, EncodeError> {
    project
        .frames
        .iter()
        .position(|f| f.name == frame.name)
        .ok_or_else(|| EncodeError::UnknownFrame(frame.name.clone()))
}

/// Dot-separated segments of a frame name, minus the extension. A name
/// without an extension is kept whole.
pub fn frame_name_parts(name: &str) -> Vec<String> {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() > 1 {
        segments[..segments.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        vec![name.to_string()]
    }
}

/// Frame name without its extension. Inner dots are kept.
pub fn frame_stem(name: &str) -> String {
    frame_name_parts(name).join(".")
}

/// Attributes with trimmed keys; empty values are dropped.
pub fn filter_attributes(attributes: &BTreeMap<String, AttrValue>) -> BTreeMap<String, AttrValue> {
    attributes
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.trim().to_string(), value.clone()))
        .collect()
}

/// Scene tags with trimmed keys; falsy values are dropped.
pub fn scene_labels(frame: &Frame) -> BTreeMap<String, Value> {
    frame
        .scene
        .iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, value)| (key.trim().to_string(), value.clone()))
        .collect()
}

/// Channel component of cut-out image names; `none` when the project has no
/// channel configured.
pub fn channel_name(project: &Project) -> &'static str {
    project
        .options
        .channel
        .map(CameraChannel::channel_name)
        .unwrap_or("none")
}
