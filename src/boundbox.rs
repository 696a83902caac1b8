//! Bounding-box encoder
//!
//! Emits one compact object/scene JSON pair per frame, encoding only the
//! bounding-box labels. Track ids are local to the frame offset:
//! `frame_num * labels_in_frame + index`.

use log::warn;

use crate::encoder::{
    filter_attributes, frame_index, frame_stem, scene_labels, EncodeError, Encoder, FileWriteInfo,
    Subfolder,
};
use crate::record::{
    ObjectFrameRecord, ObjectLabelRecord, SceneFrameRecord, SceneLabels, ShapeKind, ShapeRecord,
    Timestamp,
};
use crate::types::{Frame, LabelGeometry, Project};
use crate::utils::now_millis;

pub struct BoundboxEncoder;

impl Encoder for BoundboxEncoder {
    fn name(&self) -> &'static str {
        "encoders.adas.boundbox"
    }

    fn title(&self) -> &'static str {
        "ADAS Boundbox"
    }

    fn encode(
        &self,
        frame: &Frame,
        project: &Project,
    ) -> Result<Vec<FileWriteInfo>, EncodeError> {
        let frame_num = frame_index(frame, project)?;
        let stem = frame_stem(&frame.name);

        let object_doc = encode_object_labels(frame, project, frame_num);
        let scene_doc = SceneFrameRecord {
            frame_number: frame_num,
            timestamp: Timestamp::Millis(now_millis()),
            labels: SceneLabels::Plain(scene_labels(frame)),
        };

        Ok(vec![
            FileWriteInfo {
                name: format!("{}_{}_object.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: serde_json::to_vec(&object_doc)?,
            },
            FileWriteInfo {
                name: format!("{}_{}_scene.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: serde_json::to_vec(&scene_doc)?,
            },
        ])
    }
}

fn encode_object_labels(frame: &Frame, project: &Project, frame_num: usize) -> ObjectFrameRecord {
    let num_labels = frame.labels.len();
    let mut labels = Vec::new();

    for (index, label) in frame.labels.iter().enumerate() {
        let LabelGeometry::Boundbox {
            xmin,
            ymin,
            xmax,
            ymax,
        } = label.geometry
        else {
            continue;
        };

        let Some(class) = project.options.label_class(label.class_id) else {
            warn!(
                "Skipping label {} with unknown class id {}",
                label.id, label.class_id
            );
            continue;
        };

        let track_id = frame_num * num_labels + index;

        let shape = ShapeRecord::new(
            ShapeKind::Box,
            vec![xmin, xmax, xmax, xmin],
            vec![ymin, ymin, ymax, ymax],
        );

        let mut record = ObjectLabelRecord::new(
            &class.name,
            track_id,
            filter_attributes(&label.attributes),
            shape,
        );
        record.width = xmax - xmin;
        record.height = ymax - ymin;
        labels.push(record);
    }

    ObjectFrameRecord {
        frame_number: frame_num,
        timestamp: Timestamp::Millis(now_millis()),
        labels,
    }
}
