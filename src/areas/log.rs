use crate::artifacts::record::Record;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Commit history store, rendered newest-first.
///
/// Every append rewrites the file through a temporary sibling that is
/// renamed over the live log, so a reader never observes a half-written
/// history and a crash before the rename leaves the original untouched.
#[derive(Debug, new)]
pub struct CommitLog {
    path: Box<Path>,
}

impl CommitLog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        let metadata = std::fs::metadata(self.path())
            .with_context(|| format!("Unable to stat log file {}", self.path.display()))?;

        Ok(metadata.len() == 0)
    }

    /// Prepend a record: the new block first, then the entire previous
    /// history, fsynced and renamed into place.
    pub fn append(&self, record: &Record) -> anyhow::Result<()> {
        let log_dir = self
            .path
            .parent()
            .with_context(|| format!("Invalid log path {}", self.path.display()))?;
        let temp_path = log_dir.join(Self::generate_temp_name());

        let mut temp_file = std::fs::File::create(&temp_path).with_context(|| {
            format!("Unable to create temporary log file {}", temp_path.display())
        })?;

        temp_file
            .write_all(record.render().as_bytes())
            .context("Unable to write log record")?;

        let mut previous_log = std::fs::File::open(self.path())
            .with_context(|| format!("Unable to open log file {}", self.path.display()))?;
        std::io::copy(&mut previous_log, &mut temp_file)
            .context("Unable to carry over previous log content")?;

        temp_file.sync_all().context("Unable to sync log file")?;
        drop(temp_file);

        std::fs::rename(&temp_path, self.path())
            .with_context(|| format!("Unable to rename log file to {}", self.path.display()))?;

        Ok(())
    }

    /// The log file's content, unchanged.
    pub fn render(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(self.path())
            .with_context(|| format!("Unable to read log file {}", self.path.display()))
    }

    fn generate_temp_name() -> String {
        format!("tmp-log-{}", rand::random::<u32>())
    }
}
