use crate::artifacts::digest::ContentDigest;
use anyhow::Context;
use derive_new::new;
use std::io::Read;
use std::path::Path;

/// The live working tree: the file set the user edits.
///
/// Commit reads from it, checkout overwrites into it; the workspace never
/// deletes user files.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn open_file(&self, file_path: &Path) -> anyhow::Result<std::fs::File> {
        let full_path = self.path.join(file_path);

        std::fs::File::open(&full_path)
            .with_context(|| format!("Unable to open tracked file {}", full_path.display()))
    }

    pub fn digest_file(&self, file_path: &Path) -> anyhow::Result<ContentDigest> {
        let mut file = self.open_file(file_path)?;

        ContentDigest::of_reader(&mut file)
            .with_context(|| format!("Unable to digest tracked file {:?}", file_path))
    }

    /// Truncate the file to zero length and replace its content with the
    /// reader's bytes, creating parent directories on demand.
    pub fn overwrite_file(&self, file_path: &Path, reader: &mut impl Read) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Unable to open file {}", full_path.display()))?;

        std::io::copy(reader, &mut file)
            .with_context(|| format!("Unable to write to file {}", full_path.display()))?;

        Ok(())
    }
}
