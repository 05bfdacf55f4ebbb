use crate::domain::models::AppendReport;
use crate::services::template::{render_block, PREAMBLE};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum AppendError {
    #[error("file not found: {}", .0.display())]
    TargetNotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Appends one preamble and `reps` function blocks to `path`, creating
/// the file when absent. The file only ever grows; re-running duplicates
/// content rather than replacing it.
pub fn append_fixture(path: &Path, reps: u64) -> Result<AppendReport, AppendError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppendError::TargetNotFound(path.to_path_buf()),
            _ => AppendError::Io(e),
        })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(PREAMBLE.as_bytes())?;
    let mut bytes = PREAMBLE.len() as u64;
    for index in 0..reps {
        let block = render_block(index);
        writer.write_all(block.as_bytes())?;
        bytes += block.len() as u64;
    }
    writer.flush()?;

    Ok(AppendReport {
        path: path.display().to_string(),
        reps,
        bytes_appended: bytes,
        status: "ok".to_string(),
    })
}
