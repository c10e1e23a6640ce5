use crate::app::error::{FileOpsError, Result};
use crate::app::models::{FileEntry, ReplicationReport};
use crate::app::pattern::Pattern;
use crate::app::scanner::Scanner;
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Overwrites every file in `dir` matching `pattern` with the content of the
/// most recently modified match.
///
/// Matches that are hard links to the newest file are left alone, since
/// copying onto them would truncate the source. Stops at the first failed
/// copy. Copies made before the failure stay on disk.
pub fn replicate(dir: &Path, pattern: &Pattern) -> Result<ReplicationReport> {
    let matches = Scanner::new(dir, pattern).scan()?;
    let newest = matches.most_recent()?.clone();
    log::debug!(
        "Most recent of {} match(es): {}",
        matches.len(),
        newest.path.display()
    );

    let mut overwritten = Vec::new();
    for entry in &matches.entries {
        if entry.is_same_file(&newest) {
            if entry.path != newest.path {
                log::warn!(
                    "Skipping {}: same file as {}",
                    entry.path.display(),
                    newest.path.display()
                );
            }
            continue;
        }
        copy_over(&newest, &entry.path)?;
        log::debug!("Replaced {}", entry.path.display());
        overwritten.push(entry.path.clone());
    }

    Ok(ReplicationReport {
        source: newest,
        overwritten,
    })
}

/// Copies content and permissions, then carries the source's modification
/// time over to the target. The time is set by path so a read-only source,
/// whose mode the target now shares, does not block it.
fn copy_over(source: &FileEntry, target: &Path) -> Result<()> {
    let to_copy_error = |err| FileOpsError::Copy {
        from: source.path.clone(),
        to: target.to_path_buf(),
        source: err,
    };

    fs::copy(&source.path, target).map_err(to_copy_error)?;
    filetime::set_file_mtime(target, FileTime::from_system_time(source.modified))
        .map_err(to_copy_error)
}
