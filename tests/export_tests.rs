use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;

use adas_encoders::{
    export_project, setup_output_directory, write_outputs, BoundboxEncoder, EncodeError, Encoder,
    FileWriteInfo, Frame, JsonEncoder, Label, LabelClass, LabelGeometry, Project, ProjectOptions,
    Subfolder,
};

fn sample_project() -> Project {
    let frame = |name: &str, label_id: u64| Frame {
        name: name.to_string(),
        size: None,
        labels: vec![Label {
            id: label_id,
            class_id: 1,
            attributes: BTreeMap::new(),
            geometry: LabelGeometry::Boundbox {
                xmin: 0.0,
                ymin: 0.0,
                xmax: 10.0,
                ymax: 10.0,
            },
        }],
        scene: BTreeMap::new(),
    };

    Project {
        title: "Clip42".to_string(),
        frames: vec![frame("0001.png", 1), frame("0002.png", 2)],
        options: ProjectOptions {
            label_classes: vec![LabelClass {
                id: 1,
                name: "vehicle".to_string(),
            }],
            channel: None,
        },
    }
}

#[test]
fn export_writes_annotation_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    let project = sample_project();

    let stats = export_project(&JsonEncoder, &project, root).unwrap();

    assert_eq!(stats.frames_processed, 2);
    assert_eq!(stats.files_written, 4);
    assert_eq!(stats.failed_frames, 0);

    let annotations_dir = root.join("annotations");
    for name in [
        "Clip42_0001_object.json",
        "Clip42_0001_scene.json",
        "Clip42_0002_object.json",
        "Clip42_0002_scene.json",
    ] {
        let path = annotations_dir.join(name);
        assert!(path.exists(), "missing {}", path.display());

        let content = fs::read(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&content).unwrap();
        assert!(doc["FrameNumber"].is_number());
    }
}

#[test]
fn export_runs_every_encoder() {
    let temp_dir = tempfile::tempdir().unwrap();
    let project = sample_project();

    let stats = export_project(&BoundboxEncoder, &project, temp_dir.path()).unwrap();

    assert_eq!(stats.frames_processed, 2);
    assert!(temp_dir
        .path()
        .join("annotations/Clip42_0001_object.json")
        .exists());
}

// Encoder that rejects every frame, to exercise the log-and-continue path.
struct FailingEncoder;

impl Encoder for FailingEncoder {
    fn name(&self) -> &'static str {
        "encoders.test.failing"
    }

    fn title(&self) -> &'static str {
        "Failing"
    }

    fn encode(
        &self,
        frame: &Frame,
        _project: &Project,
    ) -> Result<Vec<FileWriteInfo>, EncodeError> {
        Err(EncodeError::UnknownFrame(frame.name.clone()))
    }
}

#[test]
fn export_counts_failed_frames() {
    let temp_dir = tempfile::tempdir().unwrap();
    let project = sample_project();

    let stats = export_project(&FailingEncoder, &project, temp_dir.path()).unwrap();

    assert_eq!(stats.frames_processed, 0);
    assert_eq!(stats.files_written, 0);
    assert_eq!(stats.failed_frames, 2);
}

#[test]
fn setup_output_directory_replaces_existing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("export");

    fs::create_dir_all(&root).unwrap();
    let stale = root.join("stale.json");
    File::create(&stale)
        .unwrap()
        .write_all(b"{}")
        .unwrap();

    let created = setup_output_directory(&root).unwrap();

    assert_eq!(created, root);
    assert!(root.exists());
    assert!(!stale.exists());
}

#[test]
fn write_outputs_sanitizes_file_names() {
    let temp_dir = tempfile::tempdir().unwrap();

    let outputs = vec![FileWriteInfo {
        name: "bad/na:me.json".to_string(),
        subdirectory: Subfolder::Annotations,
        data: b"{}".to_vec(),
    }];

    let written = write_outputs(temp_dir.path(), &outputs).unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].exists());

    let file_name = written[0].file_name().unwrap().to_str().unwrap();
    assert!(!file_name.contains('/'));
    assert!(!file_name.contains(':'));
    assert_eq!(written[0].parent().unwrap(), temp_dir.path().join("annotations"));
}
