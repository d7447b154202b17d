//! Output file that only appears once it is complete.
//!
//! Lines are written to a temporary file next to the target and the file is
//! renamed over the target in [`AtomicOutput::commit`]. Dropping an
//! uncommitted output deletes the temporary file and leaves any existing
//! target untouched.
//!
//! The committed file looks as if it had been truncated and rewritten in
//! place: an existing target keeps its permissions, a new one gets the
//! process umask default, and a symlinked target is replaced at the end of
//! the link rather than the link itself.

use crate::error::{FileOperation, InstcatError, IoResultExt, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub(crate) struct AtomicOutput {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicOutput {
    pub(crate) fn create(target: &Path) -> Result<Self> {
        let target = resolve_symlink(target);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".instcat-").suffix(".partial");
        // Mode 0666 is narrowed by the umask at creation, as for File::create.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let temp = builder
            .tempfile_in(dir)
            .with_file(&target, FileOperation::Create)?;

        Ok(Self {
            target,
            writer: BufWriter::new(temp),
        })
    }

    /// Flushes buffered data and renames the temporary file onto the target.
    pub(crate) fn commit(self) -> Result<()> {
        let AtomicOutput { target, writer } = self;
        let temp = writer
            .into_inner()
            .map_err(|e| InstcatError::file_access(&target, FileOperation::Write, e.into_error()))?;
        temp.as_file()
            .sync_all()
            .with_file(&target, FileOperation::Write)?;
        if let Ok(existing) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .with_file(&target, FileOperation::Persist)?;
        }
        temp.persist(&target)
            .map_err(|e| InstcatError::file_access(&target, FileOperation::Persist, e.error))?;
        Ok(())
    }
}

/// The file a symlink points to, or `path` itself for anything else.
/// Dangling links are replaced like regular files.
fn resolve_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

impl Write for AtomicOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
