//! ADAS annotation format encoders
//!
//! This library converts in-memory frame and label data (bounding boxes,
//! polylines, pixel-wise contours) plus project metadata into the fixed
//! ADAS JSON schema consumed downstream, one object/scene file pair per
//! frame.

pub mod boundbox;
pub mod encoder;
pub mod export;
pub mod io;
pub mod json;
pub mod pixelwise;
pub mod polyline;
pub mod record;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use boundbox::BoundboxEncoder;
pub use encoder::{EncodeError, Encoder, FileWriteInfo, Subfolder};
pub use export::{export_project, ExportStats};
pub use io::{setup_output_directory, write_outputs};
pub use json::JsonEncoder;
pub use pixelwise::PixelwiseEncoder;
pub use polyline::PolylineEncoder;
pub use types::{
    AttrValue, CameraChannel, Frame, Label, LabelClass, LabelGeometry, Project, ProjectOptions,
    Size,
};
