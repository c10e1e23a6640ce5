use crate::app::error::{FileOpsError, Result};
use crate::app::pattern::Pattern;
use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

/// Represents the final configuration after merging the settings file and CLI args.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub target_directory: Option<PathBuf>,
    pub target_file: Option<PathBuf>,
    pub pattern: Pattern,
}

/// Device and inode of a file. Two paths with the same id share content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub dev: u64,
    pub ino: u64,
}

impl FileId {
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(Self {
            dev: metadata.dev(),
            ino: metadata.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn from_metadata(_metadata: &Metadata) -> Option<Self> {
        None
    }
}

/// A pattern-matching file discovered during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
    /// `None` where the platform exposes no stable file identity.
    pub id: Option<FileId>,
}

impl FileEntry {
    /// True when both entries name the same underlying file, either by path
    /// or through a hard link.
    pub fn is_same_file(&self, other: &FileEntry) -> bool {
        self.path == other.path || (self.id.is_some() && self.id == other.id)
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

/// All matches of one pattern in one directory, sorted by file name.
#[derive(Debug, Clone)]
pub struct MatchSet {
    pub dir: PathBuf,
    pub entries: Vec<FileEntry>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry with the latest modification time.
    ///
    /// On a tie the earliest entry in scan order wins, i.e. the smallest name.
    pub fn most_recent(&self) -> Result<&FileEntry> {
        let mut best: Option<&FileEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.modified <= current.modified => {}
                _ => best = Some(entry),
            }
        }
        best.ok_or_else(|| FileOpsError::NoMatchFound {
            dir: self.dir.clone(),
        })
    }
}

#[derive(Debug)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub bytes_per_file: usize,
}

#[derive(Debug)]
pub struct ReplicationReport {
    pub source: FileEntry,
    pub overwritten: Vec<PathBuf>,
}
