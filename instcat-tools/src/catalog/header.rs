//! Header commands and catalog summaries.
//!
//! phoSim catalogs start with `key value` command lines describing the
//! observation (`rightascension`, `declination`, `mjd`, `filter`,
//! `rotskypos`, `seeing`, ...). Commands can appear anywhere in the file;
//! every non-object line that is neither blank nor a `#` comment is read as
//! one. A repeated key keeps its last value.

use super::line::{is_object_record, CatalogLine, OBJECT_KEYWORD};
use crate::error::{FileOperation, IoResultExt, Result};
use instcat_core::SkyPosition;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub const RIGHT_ASCENSION_COMMAND: &str = "rightascension";
pub const DECLINATION_COMMAND: &str = "declination";
pub const MJD_COMMAND: &str = "mjd";

/// Header commands keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeaderCommands {
    commands: BTreeMap<String, String>,
}

impl HeaderCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `line` if it is a command. Returns `true` when it was.
    pub fn ingest(&mut self, line: &str) -> bool {
        let trimmed = line.trim_matches(is_separator);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let (key, value) = match trimmed.split_once(is_separator) {
            Some((key, value)) => (key, value.trim_start_matches(is_separator)),
            None => (trimmed, ""),
        };
        if key == OBJECT_KEYWORD {
            return false;
        }
        self.commands.insert(key.to_string(), value.to_string());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.commands.get(key).map(String::as_str)
    }

    /// The command value parsed as a number, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.parse::<f64>().ok()
    }

    /// Telescope pointing from the `rightascension` and `declination` commands.
    pub fn pointing(&self) -> Option<SkyPosition> {
        Some(SkyPosition::new(
            self.get_f64(RIGHT_ASCENSION_COMMAND)?,
            self.get_f64(DECLINATION_COMMAND)?,
        ))
    }

    pub fn mjd(&self) -> Option<f64> {
        self.get_f64(MJD_COMMAND)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Line counts and header commands of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub commands: HeaderCommands,
    pub total_lines: u64,
    pub object_lines: u64,
    pub passthrough_lines: u64,
    /// `object` lines whose identifier, RA or Dec could not be parsed.
    pub malformed_lines: u64,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total lines: {}", self.total_lines)?;
        writeln!(f, "Object lines: {}", self.object_lines)?;
        writeln!(f, "Passthrough lines: {}", self.passthrough_lines)?;
        writeln!(f, "Malformed object lines: {}", self.malformed_lines)?;
        if let Some(pointing) = self.commands.pointing() {
            writeln!(f, "Pointing: {}", pointing)?;
        }
        write!(f, "Header commands: {}", self.commands.len())?;
        for (key, value) in self.commands.iter() {
            write!(f, "\n  {:<16} {}", key, value)?;
        }
        Ok(())
    }
}

/// Reads only the header commands of a catalog.
pub fn read_header_commands(path: impl AsRef<Path>) -> Result<HeaderCommands> {
    summarize(path).map(|summary| summary.commands)
}

/// Reads the commands that precede the first `object` record.
///
/// phoSim writes its commands before the objects, so this usually yields
/// the same pointing as [`read_header_commands`] without scanning the
/// object lines.
pub fn read_header_block(path: impl AsRef<Path>) -> Result<HeaderCommands> {
    let path = path.as_ref();
    let file = File::open(path).with_file(path, FileOperation::Open)?;
    read_header_block_from(BufReader::new(file), path)
}

pub(crate) fn read_header_block_from<R: BufRead>(
    mut reader: R,
    path: &Path,
) -> Result<HeaderCommands> {
    let mut commands = HeaderCommands::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_file(path, FileOperation::Read)?;
        if n == 0 {
            break;
        }
        let content = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
        let line = String::from_utf8_lossy(content);
        if is_object_record(&line) {
            break;
        }
        commands.ingest(&line);
    }

    debug!(path = %path.display(), commands = commands.len(), "Read header block");
    Ok(commands)
}

/// Scans a catalog once, collecting commands and line counts.
///
/// Malformed object lines are counted, not rejected.
pub fn summarize(path: impl AsRef<Path>) -> Result<CatalogSummary> {
    let path = path.as_ref();
    let file = File::open(path).with_file(path, FileOperation::Open)?;
    let summary = summarize_reader(BufReader::new(file), path)?;
    debug!(
        path = %path.display(),
        objects = summary.object_lines,
        commands = summary.commands.len(),
        "Summarized catalog"
    );
    Ok(summary)
}

pub(crate) fn summarize_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
) -> Result<CatalogSummary> {
    let mut summary = CatalogSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_file(path, FileOperation::Read)?;
        if n == 0 {
            break;
        }
        summary.total_lines += 1;

        let content = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
        let line = String::from_utf8_lossy(content);
        match CatalogLine::parse(&line) {
            Ok(CatalogLine::Object(_)) => summary.object_lines += 1,
            Ok(CatalogLine::Passthrough(raw)) => {
                summary.passthrough_lines += 1;
                summary.commands.ingest(raw);
            }
            Err(_) => summary.malformed_lines += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const HEADER: &str = "\
# phoSim instance catalog
rightascension 53.0091385
declination -27.4389488
mjd 59580.0539
filter 2
rotskypos 256.7507
seeing 0.7";

    #[test]
    fn test_ingest_commands() {
        let mut commands = HeaderCommands::new();
        for line in HEADER.lines() {
            commands.ingest(line);
        }
        assert_eq!(commands.len(), 6);
        assert_eq!(commands.get("filter"), Some("2"));
        assert_eq!(commands.mjd(), Some(59580.0539));
        assert_eq!(
            commands.pointing(),
            Some(SkyPosition::new(53.0091385, -27.4389488))
        );
    }

    #[test]
    fn test_ingest_skips_non_commands() {
        let mut commands = HeaderCommands::new();
        assert!(!commands.ingest(""));
        assert!(!commands.ingest("   # comment"));
        assert!(!commands.ingest("object 1 2 3"));
        assert!(commands.ingest("nsnap"));
        assert_eq!(commands.get("nsnap"), Some(""));
    }

    #[test]
    fn test_repeated_key_keeps_last() {
        let mut commands = HeaderCommands::new();
        commands.ingest("seeing 0.7");
        commands.ingest("seeing   0.9  ");
        assert_eq!(commands.get("seeing"), Some("0.9"));
        assert_eq!(commands.get_f64("seeing"), Some(0.9));
    }

    #[test]
    fn test_pointing_requires_both() {
        let mut commands = HeaderCommands::new();
        commands.ingest("rightascension 10.0");
        assert_eq!(commands.pointing(), None);
        commands.ingest("declination abc");
        assert_eq!(commands.pointing(), None);
    }

    #[test]
    fn test_summarize_reader_counts() {
        let text = format!(
            "{}\nobject 1 53.0 -27.4 22.0\nobject 2 53.1\nobject 3 53.2 -27.5 21.0\n",
            HEADER
        );
        let summary = summarize_reader(Cursor::new(text), Path::new("mem")).unwrap();
        assert_eq!(summary.total_lines, 10);
        assert_eq!(summary.object_lines, 2);
        assert_eq!(summary.malformed_lines, 1);
        assert_eq!(summary.passthrough_lines, 7);
        assert_eq!(summary.commands.len(), 6);
    }

    #[test]
    fn test_summarize_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "object 1 53.0 -27.4").unwrap();
        file.flush().unwrap();

        let summary = summarize(file.path()).unwrap();
        assert_eq!(summary.object_lines, 1);
        let text = summary.to_string();
        assert!(text.contains("Object lines: 1"), "unexpected summary: {}", text);
        assert!(text.contains("rotskypos"), "unexpected summary: {}", text);

        let commands = read_header_commands(file.path()).unwrap();
        assert_eq!(commands, summary.commands);
    }

    #[test]
    fn test_summarize_reader_non_utf8() {
        let bytes = b"# caf\xe9\nobject 1 10.0 20.0 \xff\n".to_vec();
        let summary = summarize_reader(Cursor::new(bytes), Path::new("mem")).unwrap();
        assert_eq!(summary.total_lines, 2);
        assert_eq!(summary.object_lines, 1);
    }

    #[test]
    fn test_header_block_stops_at_first_object() {
        let mut text = format!("{}\nobject 1 53.0 -27.4 22.0\n", HEADER).into_bytes();
        // Commands after the first object are not part of the block.
        text.extend_from_slice(b"rightascension 99.0\nobject 2 53.1 -27.5\n");
        let commands = read_header_block_from(Cursor::new(text.clone()), Path::new("mem")).unwrap();
        assert_eq!(commands.len(), 6);
        assert_eq!(commands.get_f64(RIGHT_ASCENSION_COMMAND), Some(53.0091385));

        let full = summarize_reader(Cursor::new(text), Path::new("mem")).unwrap();
        assert_eq!(full.commands.get_f64(RIGHT_ASCENSION_COMMAND), Some(99.0));
    }

    #[test]
    fn test_header_block_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "object 1 53.0 -27.4").unwrap();
        file.flush().unwrap();

        let commands = read_header_block(file.path()).unwrap();
        assert_eq!(
            commands.pointing(),
            Some(SkyPosition::new(53.0091385, -27.4389488))
        );
        assert!(read_header_block("/nonexistent/instcat.txt")
            .unwrap_err()
            .is_file_access());
    }

    #[test]
    fn test_summarize_missing_file() {
        let err = summarize("/nonexistent/instcat.txt").unwrap_err();
        assert!(err.is_file_access());
    }
}
