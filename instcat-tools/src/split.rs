//! Splitting a large catalog into a header file and object chunks.
//!
//! Catalogs with millions of `object` records are easier to process in
//! pieces. [`split_catalog`] writes every non-object line to
//! `<prefix>_header.txt` and the object records, in order, to
//! `<prefix>_objects_0000.txt`, `<prefix>_objects_0001.txt`, ... with at most
//! `max_lines` records each. Concatenating the header with any chunk yields a
//! self-contained catalog.

use crate::catalog::is_object_record;
use crate::error::{FileOperation, InstcatError, IoResultExt, Result};
use crate::select::output::AtomicOutput;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default number of object records per chunk.
pub const DEFAULT_CHUNK_LINES: usize = 300_000;

/// Files produced by [`split_catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitCatalog {
    pub header: PathBuf,
    /// Chunk files in input order. Empty when the catalog has no objects.
    pub chunks: Vec<PathBuf>,
    pub header_lines: u64,
    pub object_lines: u64,
}

impl SplitCatalog {
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.header.as_path()).chain(self.chunks.iter().map(PathBuf::as_path))
    }

    /// Deletes the header and all chunk files.
    pub fn clean_up(&self) -> Result<()> {
        for path in self.files() {
            fs::remove_file(path).with_file(path, FileOperation::Remove)?;
        }
        Ok(())
    }
}

pub fn header_path(out_dir: &Path, prefix: &str) -> PathBuf {
    out_dir.join(format!("{}_header.txt", prefix))
}

pub fn chunk_path(out_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    out_dir.join(format!("{}_objects_{:04}.txt", prefix, index))
}

/// Splits `input` into a header file and object chunks inside `out_dir`.
///
/// Lines are copied byte for byte with a `\n` terminator. Object records are
/// recognised by their first token only; their fields are not parsed.
///
/// # Errors
/// [`InstcatError::InvalidArgument`] if `max_lines` is zero or `prefix` is
/// empty, [`InstcatError::FileAccess`] for any I/O failure. Files completed
/// before a failure are left in place.
pub fn split_catalog(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    prefix: &str,
    max_lines: usize,
) -> Result<SplitCatalog> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();

    if max_lines == 0 {
        return Err(InstcatError::invalid_argument(
            "chunk size must be at least one line",
        ));
    }
    if prefix.is_empty() {
        return Err(InstcatError::invalid_argument("file prefix must not be empty"));
    }

    let file = File::open(input).with_file(input, FileOperation::Open)?;
    let mut reader = BufReader::new(file);

    let header = header_path(out_dir, prefix);
    let mut header_out = AtomicOutput::create(&header)?;
    let mut chunks = Vec::new();
    let mut current: Option<(AtomicOutput, PathBuf, usize)> = None;
    let mut header_lines = 0u64;
    let mut object_lines = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_file(input, FileOperation::Read)?;
        if n == 0 {
            break;
        }
        let content = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());

        if !is_object_record(&String::from_utf8_lossy(content)) {
            header_lines += 1;
            write_line(&mut header_out, content, &header)?;
            continue;
        }

        object_lines += 1;
        let open = match current.take() {
            Some(open) if open.2 < max_lines => open,
            Some((full, path, _)) => {
                full.commit()?;
                debug!(chunk = %path.display(), "Wrote object chunk");
                chunks.push(path);
                open_chunk(out_dir, prefix, chunks.len())?
            }
            None => open_chunk(out_dir, prefix, chunks.len())?,
        };
        let (out, path, count) = current.insert(open);
        write_line(out, content, path)?;
        *count += 1;
    }

    header_out.commit()?;
    if let Some((last, path, _)) = current {
        last.commit()?;
        chunks.push(path);
    }

    info!(
        input = %input.display(),
        header_lines,
        object_lines,
        chunks = chunks.len(),
        "Split catalog"
    );

    Ok(SplitCatalog {
        header,
        chunks,
        header_lines,
        object_lines,
    })
}

fn open_chunk(
    out_dir: &Path,
    prefix: &str,
    index: usize,
) -> Result<(AtomicOutput, PathBuf, usize)> {
    let path = chunk_path(out_dir, prefix, index);
    let out = AtomicOutput::create(&path)?;
    Ok((out, path, 0))
}

fn write_line(out: &mut AtomicOutput, content: &[u8], path: &Path) -> Result<()> {
    out.write_all(content)
        .and_then(|_| out.write_all(b"\n"))
        .with_file(path, FileOperation::Write)
}
