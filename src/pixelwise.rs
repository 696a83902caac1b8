//! Pixel-wise encoder
//!
//! Emits one indented object/scene JSON pair per frame, encoding only the
//! contour labels. Each record names the cut-out mask image the downstream
//! pipeline produces for it; the mask dimensions are unknown at encode time
//! and stay zero.

use log::warn;

use crate::encoder::{
    channel_name, filter_attributes, frame_index, frame_stem, scene_labels, EncodeError, Encoder,
    FileWriteInfo, Subfolder,
};
use crate::record::{
    ObjectFrameRecord, ObjectLabelRecord, SceneFrameRecord, SceneLabels, ShapeKind, ShapeRecord,
    Timestamp,
};
use crate::types::{Frame, LabelGeometry, Project};
use crate::utils::{now_millis, to_json_pretty};

pub struct PixelwiseEncoder;

impl Encoder for PixelwiseEncoder {
    fn name(&self) -> &'static str {
        "encoders.adas.pixelwise"
    }

    fn title(&self) -> &'static str {
        "ADAS Pixelwise"
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
                name: format!("{}_Pixelwise_{}_object.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: to_json_pretty(&object_doc)?,
            },
            FileWriteInfo {
                name: format!("{}_Pixelwise_{}_scene.json", project.title, stem),
                subdirectory: Subfolder::Annotations,
                data: to_json_pretty(&scene_doc)?,
            },
        ])
    }
}

fn encode_object_labels(frame: &Frame, project: &Project, frame_num: usize) -> ObjectFrameRecord {
    let num_labels = frame.labels.len();
    let channel = channel_name(project);
    let stem = frame_stem(&frame.name);
    let mut labels = Vec::new();

    for (index, label) in frame.labels.iter().enumerate() {
        let LabelGeometry::Contour { ref points } = label.geometry else {
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
            ShapeKind::Pixel,
            points.iter().map(|&(x, _)| x).collect(),
            points.iter().map(|&(_, y)| y).collect(),
        );

        let mut record = ObjectLabelRecord::new(
            &class.name,
            track_id,
            filter_attributes(&label.attributes),
            shape,
        );
        record.imagename = format!("{}_{}_{}_{}.png", channel, stem, class.name, track_id);
        labels.push(record);
    }

    ObjectFrameRecord {
        frame_number: frame_num,
        timestamp: Timestamp::Millis(now_millis()),
        labels,
    }
}
