use crate::app::error::{FileOpsError, Result};
use crate::app::models::{FileEntry, FileId, MatchSet};
use crate::app::pattern::Pattern;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub struct Scanner<'a> {
    root: PathBuf,
    pattern: &'a Pattern,
}

impl<'a> Scanner<'a> {
    pub fn new(root: impl Into<PathBuf>, pattern: &'a Pattern) -> Self {
        Self {
            root: root.into(),
            pattern,
        }
    }

    /// Lists the top level of `root` and collects the regular files whose
    /// name matches the pattern.
    pub fn scan(&self) -> Result<MatchSet> {
        self.check_root()?;

        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|err| FileOpsError::Directory {
                path: self.root.clone(),
                reason: err.to_string(),
            })?;
            if let Some(processed) = self.process_entry(&entry) {
                entries.push(processed);
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!(
            "Found {} file(s) matching {} in {}",
            entries.len(),
            self.pattern,
            self.root.display()
        );

        Ok(MatchSet {
            dir: self.root.clone(),
            entries,
        })
    }

    fn check_root(&self) -> Result<()> {
        let metadata = fs::metadata(&self.root).map_err(|err| FileOpsError::Directory {
            path: self.root.clone(),
            reason: err.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(FileOpsError::Directory {
                path: self.root.clone(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(())
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<FileEntry> {
        // The walker yields the root itself at depth 0
        if entry.depth() == 0 {
            return None;
        }

        // Symlinks are not followed, so they report as neither file nor dir
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            return None;
        }

        let name = entry.file_name().to_str()?;
        if !self.pattern.matches(name) {
            return None;
        }

        match file_stamp(entry.path()) {
            Ok((modified, id)) => Some(FileEntry {
                path: entry.path().to_path_buf(),
                modified,
                id,
            }),
            Err(err) => {
                log::warn!("Skipping {}: {}", entry.path().display(), err);
                None
            }
        }
    }
}

fn file_stamp(path: &Path) -> std::io::Result<(SystemTime, Option<FileId>)> {
    let metadata = fs::symlink_metadata(path)?;
    Ok((metadata.modified()?, FileId::from_metadata(&metadata)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn names(matches: &MatchSet) -> Vec<String> {
        matches.entries.iter().map(FileEntry::name).collect()
    }

    #[test]
    fn test_scan_filters_by_pattern() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        for name in ["50.114.4.7", "50.114.4.3", "50.114.4.x", "notes.txt", "50.114.4.3.bak"] {
            fs::write(temp.path().join(name), name)?;
        }

        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        assert_eq!(names(&matches), vec!["50.114.4.3", "50.114.4.7"]);
        assert_eq!(matches.dir, temp.path());
        Ok(())
    }

    #[test]
    fn test_scan_is_not_recursive() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("50.114.4.1"))?;
        fs::create_dir(temp.path().join("nested"))?;
        fs::write(temp.path().join("nested").join("50.114.4.2"), "deep")?;
        fs::write(temp.path().join("50.114.4.3"), "top")?;

        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        assert_eq!(names(&matches), vec!["50.114.4.3"]);
        Ok(())
    }

    #[test]
    fn test_scan_includes_hidden_style_names_under_custom_pattern() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join(".node1"), "a")?;
        fs::write(temp.path().join(".gitignore"), ".node*\n")?;

        let pattern = Pattern::parse(".node*")?;
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        assert_eq!(names(&matches), vec![".node1"]);
        Ok(())
    }

    #[test]
    fn test_scan_records_modification_time() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("50.114.4.5");
        fs::write(&path, "x")?;
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options().write(true).open(&path)?.set_modified(stamp)?;

        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        assert_eq!(matches.entries[0].modified, stamp);
        Ok(())
    }

    #[test]
    fn test_scan_empty_directory() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;
        assert!(matches.entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let pattern = Pattern::default();
        let result = Scanner::new(temp.path().join("missing"), &pattern).scan();
        assert!(matches!(result, Err(FileOpsError::Directory { .. })));
    }

    #[test]
    fn test_scan_file_as_directory_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain");
        fs::write(&file, "x").unwrap();

        let pattern = Pattern::default();
        let result = Scanner::new(&file, &pattern).scan();
        assert!(matches!(result, Err(FileOpsError::Directory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlinks() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let real = temp.path().join("50.114.4.1");
        fs::write(&real, "real")?;
        std::os::unix::fs::symlink(&real, temp.path().join("50.114.4.2"))?;

        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        assert_eq!(names(&matches), vec!["50.114.4.1"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_records_hard_link_identity() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("50.114.4.1"), "shared")?;
        fs::hard_link(temp.path().join("50.114.4.1"), temp.path().join("50.114.4.2"))?;
        fs::write(temp.path().join("50.114.4.3"), "other")?;

        let pattern = Pattern::default();
        let matches = Scanner::new(temp.path(), &pattern).scan()?;

        let [one, two, three] = &matches.entries[..] else {
            panic!("expected three matches, got {:?}", matches.entries);
        };
        assert!(one.id.is_some());
        assert!(one.is_same_file(two));
        assert!(!one.is_same_file(three));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unlistable_directory_fails() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new()?;
        let locked = temp.path().join("locked");
        fs::create_dir(&locked)?;
        fs::write(locked.join("50.114.4.1"), "x")?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o300))?;

        // Root lists the directory regardless of its mode
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let pattern = Pattern::default();
        let result = Scanner::new(&locked, &pattern).scan();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        assert!(matches!(result, Err(FileOpsError::Directory { .. })));
        Ok(())
    }
}
