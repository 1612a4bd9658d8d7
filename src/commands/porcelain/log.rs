use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn log(&self) -> anyhow::Result<()> {
        if self.commit_log().is_empty()? {
            writeln!(self.writer(), "No commits yet.")?;

            return Ok(());
        }

        write!(self.writer(), "{}", self.commit_log().render()?)?;

        Ok(())
    }
}
