use crate::app::models::{FileEntry, GenerationReport, MatchSet, ReplicationReport};
use chrono::{DateTime, Local};
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// One line per match, newest marked with `*`.
    pub fn generate_listing(matches: &MatchSet, newest: &FileEntry) -> String {
        let mut output = String::new();

        for entry in &matches.entries {
            let marker = if entry.path == newest.path { "*" } else { " " };
            output.push_str(&format!(
                "{} {}  {}\n",
                marker,
                format_time(entry),
                entry.name()
            ));
        }

        output.trim_end().to_string()
    }

    pub fn generation_summary(report: &GenerationReport, output_dir: &Path) -> String {
        format!(
            "{} files successfully created in {} ({} bytes each)",
            report.written.len(),
            output_dir.display(),
            report.bytes_per_file
        )
    }

    pub fn replication_summary(report: &ReplicationReport, dir: &Path) -> String {
        match report.overwritten.len() {
            0 => format!(
                "{} is the only matching file in {}, nothing to replace",
                report.source.name(),
                dir.display()
            ),
            n => format!(
                "All matching files in {} have been replaced with {} ({} file(s))",
                dir.display(),
                report.source.name(),
                n
            ),
        }
    }
}

fn format_time(entry: &FileEntry) -> String {
    let local: DateTime<Local> = entry.modified.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}
