//! Content digesting
//!
//! Every tracked file is identified by the SHA-1 digest of its byte content.
//! Digests drive both change detection (same bytes, same digest) and commit
//! identifier derivation (digests are XOR-folded into a time-salted seed).
//!
//! The digest length is fixed by the type, so folding two digests together
//! is always well defined.

use anyhow::Context;
use sha1::{Digest, Sha1};
use std::io::Read;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LENGTH: usize = 20;

/// Fixed-length digest of a byte stream.
///
/// Deterministic in the stream's content: the same bytes always produce the
/// same digest, and any content difference produces a different digest with
/// overwhelming probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; DIGEST_LENGTH]);

impl ContentDigest {
    /// Digest an entire byte stream.
    ///
    /// The full input is consumed regardless of size; read errors propagate.
    pub fn of_reader(reader: &mut impl Read) -> anyhow::Result<Self> {
        let mut hasher = Sha1::new();
        std::io::copy(reader, &mut hasher).context("Unable to digest content")?;

        Ok(ContentDigest(hasher.finalize().into()))
    }

    /// Digest an in-memory byte slice.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(bytes);

        ContentDigest(hasher.finalize().into())
    }

    /// Hex-encode the digest as a 40-character lowercase string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}

impl std::ops::BitXorAssign for ContentDigest {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (accumulated, byte) in self.0.iter_mut().zip(rhs.0) {
            *accumulated ^= byte;
        }
    }
}
