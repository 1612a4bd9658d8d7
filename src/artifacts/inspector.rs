use crate::areas::repository::Repository;
use crate::artifacts::digest::ContentDigest;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One tracked file with its current working-tree content digest.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    path: PathBuf,
    digest: ContentDigest,
}

impl TrackedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }
}

/// Outcome of comparing the tracked set against the latest snapshot.
///
/// Carries the full materialized tracked-file list: the snapshot writer and
/// the identifier derivation both consume it.
#[derive(Debug)]
pub struct ChangeReport {
    changed: bool,
    files: Vec<TrackedFile>,
}

impl ChangeReport {
    pub fn any_changed(&self) -> bool {
        self.changed
    }

    pub fn files(&self) -> &[TrackedFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(TrackedFile::path)
    }

    pub fn digests(&self) -> impl Iterator<Item = &ContentDigest> {
        self.files.iter().map(TrackedFile::digest)
    }
}

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Decide whether any tracked file changed since the latest snapshot.
    ///
    /// Every tracked file is digested even after a change has been found,
    /// since the caller needs the complete path set for snapshot writing.
    /// A tracked path missing from the working tree is an error, not a skip.
    /// Without a latest snapshot the whole tracked set counts as changed.
    pub fn inspect(
        &self,
        tracked: &[PathBuf],
        latest_snapshot: Option<&Path>,
    ) -> anyhow::Result<ChangeReport> {
        let mut changed = latest_snapshot.is_none();
        let mut files = Vec::with_capacity(tracked.len());

        for path in tracked {
            let digest = self.repository.workspace().digest_file(path)?;

            if let Some(snapshot_dir) = latest_snapshot
                && !changed
            {
                changed = match Self::snapshot_digest(snapshot_dir, path)? {
                    Some(snapshot_digest) => snapshot_digest != digest,
                    None => true,
                };
            }

            files.push(TrackedFile {
                path: path.clone(),
                digest,
            });
        }

        Ok(ChangeReport { changed, files })
    }

    fn snapshot_digest(
        snapshot_dir: &Path,
        file_path: &Path,
    ) -> anyhow::Result<Option<ContentDigest>> {
        let snapshot_file = snapshot_dir.join(file_path);

        if !snapshot_file.is_file() {
            return Ok(None);
        }

        let mut file = std::fs::File::open(&snapshot_file).with_context(|| {
            format!("Unable to open snapshot file {}", snapshot_file.display())
        })?;

        ContentDigest::of_reader(&mut file).map(Some)
    }
}
