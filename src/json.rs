//! Combined JSON encoder
//!
//! Encodes bounding boxes, polylines and contours into a single record
//! stream per frame. Track ids run across the whole project: the id of a
//! label is the number of labels in all preceding frames plus its index
//! within the frame, so ids stay unique over a clip.

use log::warn;

use crate::encoder::{
    channel_name, filter_attributes, frame_index, frame_name_parts, frame_stem, scene_labels,
    EncodeError, Encoder, FileWriteInfo, Subfolder,
};
use crate::record::{
    ObjectFrameRecord, ObjectLabelRecord, SceneFrameRecord, SceneLabels, SceneSpan, ShapeKind,
    ShapeRecord, Timestamp,
};
use crate::types::{Frame, LabelGeometry, Project, Size};
use crate::utils::to_json_pretty;

pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn name(&self) -> &'static str {
        "encoders.adas.json"
    }

    fn title(&self) -> &'static str {
        "ADAS JSON"
    }

    fn encode(
        &self,
        frame: &Frame,
        project: &Project,
    ) -> Result<Vec<FileWriteInfo>, EncodeError> {
        let frame_num = frame_index(frame, project)?;
        let stem = frame_stem(&frame.name);

        let object_doc = encode_object_labels(frame, project, frame_num);
        let scene_doc = encode_scene_labels(frame, frame_num);

        Ok(vec![
            FileWriteInfo {
                name: format!("{}_{}_object.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: to_json_pretty(&object_doc)?,
            },
            FileWriteInfo {
                name: format!("{}_{}_scene.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: to_json_pretty(&scene_doc)?,
            },
        ])
    }
}

fn encode_object_labels(frame: &Frame, project: &Project, frame_num: usize) -> ObjectFrameRecord {
    let channel = channel_name(project);
    let stem = frame_stem(&frame.name);
    let size = frame.size.unwrap_or(Size::ZERO);

    // Track ids continue where the previous frames left off.
    let start: usize = project.frames[..frame_num]
        .iter()
        .map(|f| f.labels.len())
        .sum();

    let mut labels = Vec::new();

    for (index, label) in frame.labels.iter().enumerate() {
        let Some(class) = project.options.label_class(label.class_id) else {
            warn!(
                "Skipping label {} with unknown class id {}",
                label.id, label.class_id
            );
            continue;
        };

        let track_id = start + index;
        let imagename = format!("{}_{}_{}_{}.png", channel, stem, class.name, label.id);

        let shape = match label.geometry {
            LabelGeometry::Boundbox {
                xmin,
                ymin,
                xmax,
                ymax,
            } => ShapeRecord::new(
                ShapeKind::Box,
                vec![xmin, xmax, xmax, xmin],
                vec![ymin, ymin, ymax, ymax],
            ),
            LabelGeometry::Polyline { ref points } => ShapeRecord::new(
                ShapeKind::Polyline,
                points.iter().map(|&(x, _)| x).collect(),
                points.iter().map(|&(_, y)| y).collect(),
            ),
            LabelGeometry::Contour { ref points } => ShapeRecord::new(
                ShapeKind::Pixel,
                points.iter().map(|&(x, _)| x).collect(),
                points.iter().map(|&(_, y)| y).collect(),
            ),
        };

        let mut record = ObjectLabelRecord::new(
            &class.name,
            track_id,
            filter_attributes(&label.attributes),
            shape,
        );
        record.imagename = imagename;
        record.imageheight = size.height;
        record.imagewidth = size.width;

        match label.geometry {
            LabelGeometry::Boundbox {
                xmin,
                ymin,
                xmax,
                ymax,
            } => {
                record.width = xmax - xmin;
                record.height = ymax - ymin;
            }
            LabelGeometry::Contour { .. } => {
                record.width = f64::from(size.width);
                record.height = f64::from(size.height);
            }
            LabelGeometry::Polyline { .. } => {}
        }

        labels.push(record);
    }

    ObjectFrameRecord {
        frame_number: frame_num,
        timestamp: Timestamp::NameParts(frame_name_parts(&frame.name)),
        labels,
    }
}

fn encode_scene_labels(frame: &Frame, frame_num: usize) -> SceneFrameRecord {
    let stem = frame_stem(&frame.name);

    let spans = scene_labels(frame)
        .into_iter()
        .map(|(key, value)| {
            (
                key,
                SceneSpan {
                    endtimestamp: stem.clone(),
                    starttimestamp: stem.clone(),
                    value,
                },
            )
        })
        .collect();

    SceneFrameRecord {
        frame_number: frame_num,
        timestamp: Timestamp::NameParts(frame_name_parts(&frame.name)),
        labels: SceneLabels::Spans(spans),
    }
}
