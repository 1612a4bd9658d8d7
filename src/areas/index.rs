//! Tracked-file list
//!
//! The index is a plain-text store with one tracked file path per line,
//! in the order the user added them. No uniqueness is enforced: adding the
//! same path twice leaves two entries, which later snapshot writes overwrite
//! idempotently.
//!
//! ## Locking
//!
//! Reads take a shared lock and appends an exclusive lock on the index file,
//! following the usual read/write discipline for store files. Concurrent
//! invocations of the tool as a whole remain unsupported.

use anyhow::Context;
use derive_new::new;
use std::io::{BufRead, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Index {
    path: Box<Path>,
}

impl Index {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        let metadata = std::fs::metadata(self.path())
            .with_context(|| format!("Unable to stat index file {}", self.path.display()))?;

        Ok(metadata.len() == 0)
    }

    /// Load the tracked-file list in insertion order, duplicates included.
    pub fn load(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .context("Unable to lock index file")?;

        let reader = std::io::BufReader::new(lock.deref_mut());
        let mut paths = Vec::new();

        for line in reader.lines() {
            let line = line.context("Unable to read index entry")?;

            if !line.trim().is_empty() {
                paths.push(PathBuf::from(line));
            }
        }

        Ok(paths)
    }

    /// Append a path to the tracked-file list.
    pub fn track(&self, file_path: &str) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .append(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)
            .context("Unable to lock index file")?;

        writeln!(lock.deref_mut(), "{}", file_path)
            .with_context(|| format!("Unable to append {} to the index", file_path))?;

        Ok(())
    }
}
