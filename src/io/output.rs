//! Write-then-rename output files.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

pub fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}

/// A temp file beside the target, renamed over it on [`PendingWrite::finalize`].
/// Dropping without finalizing leaves the target untouched.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

impl PendingWrite {
    /// Refuses an existing target unless `force` is set.
    pub fn open(target: &Path, force: bool) -> Result<Self> {
        assert_not_stdout(target)?;
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
        if !force && target.exists() {
            bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
        }
        let tmp = NamedTempFile::new_in(parent).context("create temp file")?;
        Ok(Self { target: target.to_path_buf(), tmp })
    }

    pub fn target(&self) -> &Path { &self.target }

    pub fn finalize(self) -> Result<()> {
        self.tmp.as_file().sync_all().ok(); // best-effort fsync
        self.tmp.persist(&self.target)
            .with_context(|| format!("rename to {}", self.target.display()))?;
        if let Some(dir) = self.target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_only_on_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/page.html");
        let mut pending = PendingWrite::open(&target, false).unwrap();
        pending.write_all(b"<html></html>").unwrap();
        assert!(!target.exists());
        pending.finalize().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "<html></html>");
    }

    #[test]
    fn refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("page.html");
        fs::write(&target, "old").unwrap();
        assert!(PendingWrite::open(&target, false).is_err());

        let mut pending = PendingWrite::open(&target, true).unwrap();
        pending.write_all(b"new").unwrap();
        pending.finalize().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn rejects_stdout() {
        assert!(PendingWrite::open(Path::new("-"), true).is_err());
    }
}
