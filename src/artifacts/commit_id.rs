//! Commit identifier
//!
//! Commit identifiers are 40-character hexadecimal strings naming one
//! snapshot directory under the commits root.
//!
//! ## Derivation
//!
//! The identifier starts from a seed digest of the current wall-clock time
//! (so two commits with identical content still get distinct identifiers)
//! and XOR-folds in the content digest of every committed file. XOR is
//! commutative and associative, so the result is independent of file
//! enumeration order while still changing whenever any file's content does.

use crate::artifacts::digest::ContentDigest;

/// Length of a commit identifier in hex characters.
pub const COMMIT_ID_LENGTH: usize = 40;

/// Snapshot identifier (hex-encoded digest fold).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit identifier from a string.
    ///
    /// # Returns
    ///
    /// Validated CommitId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid commit id length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid commit id characters: {}", id));
        }

        Ok(Self(id))
    }

    /// Derive the identifier for a new commit.
    ///
    /// Folds every file digest into the time-salted seed. With no file
    /// digests the seed alone determines the identifier.
    pub fn derive<'a>(
        seed: ContentDigest,
        file_digests: impl IntoIterator<Item = &'a ContentDigest>,
    ) -> Self {
        let mut accumulator = seed;

        for digest in file_digests {
            accumulator ^= *digest;
        }

        CommitId(accumulator.to_hex())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
