use crate::areas::workspace::Workspace;
use crate::artifacts::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Snapshot storage: one directory per commit under the commits root, each
/// holding byte-for-byte copies of the tracked files at commit time.
///
/// Snapshots are immutable once written; restore only reads from them.
#[derive(Debug, new)]
pub struct Snapshots {
    path: Box<Path>,
}

impl Snapshots {
    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_ref())
    }

    pub fn exists(&self, commit_id: &CommitId) -> bool {
        self.snapshot_path(commit_id).is_dir()
    }

    /// The most recently created snapshot directory, by modification time.
    pub fn latest(&self) -> anyhow::Result<Option<PathBuf>> {
        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to read commits directory {}", self.path.display()))?;

        let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;

        for entry in entries {
            let entry = entry.context("Unable to read commits directory entry")?;

            if !entry.path().is_dir() {
                continue;
            }

            let modified = entry
                .metadata()
                .and_then(|metadata| metadata.modified())
                .with_context(|| format!("Unable to stat snapshot {}", entry.path().display()))?;

            match &latest {
                Some((latest_modified, _)) if *latest_modified >= modified => {}
                _ => latest = Some((modified, entry.path())),
            }
        }

        Ok(latest.map(|(_, path)| path))
    }

    /// Copy every given working-tree file into a fresh snapshot directory
    /// named by the commit id.
    ///
    /// Copies overwrite any pre-existing destination. A failure partway
    /// through leaves a partial snapshot directory behind; it is not cleaned
    /// up here.
    pub fn write<'a>(
        &self,
        commit_id: &CommitId,
        files: impl IntoIterator<Item = &'a Path>,
        workspace: &Workspace,
    ) -> anyhow::Result<()> {
        let snapshot_dir = self.snapshot_path(commit_id);

        std::fs::create_dir_all(&snapshot_dir).with_context(|| {
            format!("Unable to create snapshot directory {}", snapshot_dir.display())
        })?;

        for file_path in files {
            let destination = snapshot_dir.join(file_path);

            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Unable to create snapshot directory {}", parent.display())
                })?;
            }

            let mut source = workspace.open_file(file_path)?;
            let mut snapshot_file = std::fs::File::create(&destination).with_context(|| {
                format!("Unable to create snapshot file {}", destination.display())
            })?;

            std::io::copy(&mut source, &mut snapshot_file).with_context(|| {
                format!("Unable to copy {:?} into the snapshot", file_path)
            })?;
        }

        Ok(())
    }

    /// Overwrite working-tree files with the contents of the named snapshot.
    ///
    /// Touches only files present in the snapshot; files absent from it are
    /// left alone, and nothing is deleted from the working tree.
    pub fn restore(&self, commit_id: &CommitId, workspace: &Workspace) -> anyhow::Result<()> {
        let snapshot_dir = self.snapshot_path(commit_id);

        for entry in WalkDir::new(&snapshot_dir) {
            let entry = entry.with_context(|| {
                format!("Unable to read snapshot directory {}", snapshot_dir.display())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(&snapshot_dir)?;
            let mut snapshot_file = std::fs::File::open(entry.path()).with_context(|| {
                format!("Unable to open snapshot file {}", entry.path().display())
            })?;

            workspace.overwrite_file(relative_path, &mut snapshot_file)?;
        }

        Ok(())
    }
}
