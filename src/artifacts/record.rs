//! Commit history record
//!
//! One entry of the commit log. Rendered form:
//!
//! ```text
//! commit <hex-identifier>
//! Author: <username>
//! <message>
//! <blank line>
//! ```

use crate::artifacts::commit_id::CommitId;
use derive_new::new;

/// Structured commit log entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Record {
    commit_id: CommitId,
    author: String,
    message: String,
}

impl Record {
    pub fn commit_id(&self) -> &CommitId {
        &self.commit_id
    }

    /// Render the record as one log block, terminated by a blank line.
    pub fn render(&self) -> String {
        format!(
            "commit {}\nAuthor: {}\n{}\n\n",
            self.commit_id, self.author, self.message
        )
    }
}
