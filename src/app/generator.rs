use crate::app::error::{FileOpsError, Result};
use crate::app::models::GenerationReport;
use crate::app::pattern::Pattern;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Number of files written per run, one for each index 0..=255.
pub const GENERATED_COUNT: u32 = 256;

/// Writes the source file's bytes into one file per pattern index in `output_dir`.
///
/// The source is read in full before anything is written, so an unreadable
/// source leaves the output directory untouched. Existing files are
/// overwritten; a failed write aborts the run and keeps what was written so far.
pub fn generate(source: &Path, output_dir: &Path, pattern: &Pattern) -> Result<GenerationReport> {
    let content = fs::read(source).map_err(|source_err| FileOpsError::SourceRead {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let mut written = Vec::with_capacity(GENERATED_COUNT as usize);
    for index in 0..GENERATED_COUNT {
        let path = output_dir.join(pattern.render(index));
        write_copy(&path, &content).map_err(|err| FileOpsError::DestinationWrite {
            path: path.clone(),
            source: err,
        })?;
        written.push(path);
    }

    log::debug!(
        "Wrote {} bytes to each of {} files in {}",
        content.len(),
        written.len(),
        output_dir.display()
    );

    Ok(GenerationReport {
        written,
        bytes_per_file: content.len(),
    })
}

fn write_copy(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.flush()
}
