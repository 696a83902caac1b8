use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encoder::FileWriteInfo;

/// Safely create an export root directory, replacing any previous contents.
pub fn setup_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        warn!(
            "Directory {:?} already exists. Deleting and recreating it.",
            path
        );
        fs::remove_dir_all(path).and_then(|_| fs::create_dir_all(path))?;
    } else {
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// Write encoder outputs beneath `root`, creating subfolders as needed.
/// File names are sanitized before use. Returns the written paths.
pub fn write_outputs(root: &Path, outputs: &[FileWriteInfo]) -> std::io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(outputs.len());

    for output in outputs {
        let dir = root.join(output.subdirectory.as_str());
        fs::create_dir_all(&dir)?;

        let path = dir.join(sanitize_filename::sanitize(&output.name));
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(&output.data)?;
        writer.flush()?;

        debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
