//! Batch export driver
//!
//! Runs one encoder over every frame of a project and writes the outputs.
//! Encode failures are logged and counted per frame so one bad frame does
//! not abort a long export; filesystem failures do.

use log::{error, info, warn};
use std::path::Path;

use crate::encoder::Encoder;
use crate::io::write_outputs;
use crate::types::Project;

/// Counters for one export run.
#[derive(Debug, Default, Clone)]
pub struct ExportStats {
    pub frames_processed: usize,
    pub files_written: usize,
    pub failed_frames: usize,
}

impl ExportStats {
    pub fn print_summary(&self) {
        info!("=== Export Summary ===");
        info!("Frames processed: {}", self.frames_processed);
        info!("Files written: {}", self.files_written);
        if self.failed_frames > 0 {
            warn!("Failed frames: {}", self.failed_frames);
        }
    }
}

/// Run `encoder` over every frame of `project`, write all outputs under
/// `root` and return the counters.
pub fn export_project(
    encoder: &dyn Encoder,
    project: &Project,
    root: &Path,
) -> std::io::Result<ExportStats> {
    let mut stats = ExportStats::default();

    info!("Exporting {:?} with {}", project.title, encoder.title());

    for frame in &project.frames {
        match encoder.encode(frame, project) {
            Ok(outputs) => {
                stats.files_written += write_outputs(root, &outputs)?.len();
                stats.frames_processed += 1;
            }
            Err(e) => {
                error!("Failed to encode frame {}: {}", frame.name, e);
                stats.failed_frames += 1;
            }
        }
    }

    match encoder.finalize(project) {
        Ok(outputs) => {
            stats.files_written += write_outputs(root, &outputs)?.len();
        }
        Err(e) => error!("Failed to finalize {}: {}", encoder.title(), e),
    }

    stats.print_summary();
    Ok(stats)
}
