use crate::areas::repository::Repository;
use crate::artifacts::commit_id::CommitId;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub commit_id: Option<String>,
}

impl Repository {
    pub fn checkout(&self, request: CheckoutRequest) -> anyhow::Result<()> {
        let Some(commit_id) = request.commit_id else {
            writeln!(self.writer(), "Commit id was not passed.")?;

            return Ok(());
        };

        let commit_id = match CommitId::try_parse(commit_id) {
            Ok(commit_id) if self.snapshots().exists(&commit_id) => commit_id,
            _ => {
                writeln!(self.writer(), "Commit does not exist.")?;

                return Ok(());
            }
        };

        self.snapshots().restore(&commit_id, self.workspace())?;
        writeln!(self.writer(), "Switched to commit {}.", commit_id)?;

        Ok(())
    }
}
