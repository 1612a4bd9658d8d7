use crate::areas::repository::Repository;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::digest::ContentDigest;
use crate::artifacts::inspector::Inspector;
use crate::artifacts::record::Record;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct CommitRequest {
    pub message: Option<String>,
}

impl Repository {
    pub fn commit(&self, request: CommitRequest) -> anyhow::Result<()> {
        let message = request.message.as_deref().unwrap_or("").replace('"', "");

        if message.is_empty() {
            writeln!(self.writer(), "Message was not passed.")?;

            return Ok(());
        }

        if self.index().is_empty()? {
            writeln!(self.writer(), "Nothing to commit.")?;

            return Ok(());
        }

        let tracked = self.index().load()?;
        let latest_snapshot = self.snapshots().latest()?;
        let report = Inspector::new(self).inspect(&tracked, latest_snapshot.as_deref())?;

        if !report.any_changed() {
            writeln!(self.writer(), "Nothing to commit.")?;

            return Ok(());
        }

        let seed = ContentDigest::of_bytes(self.clock().timestamp().as_bytes());
        let commit_id = CommitId::derive(seed, report.digests());

        self.snapshots()
            .write(&commit_id, report.paths(), self.workspace())?;

        let author = self.config_store().username()?.unwrap_or_default();
        self.commit_log()
            .append(&Record::new(commit_id, author, message))?;

        writeln!(self.writer(), "Changes are committed.")?;

        Ok(())
    }
}
