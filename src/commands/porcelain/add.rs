use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AddRequest {
    pub path: Option<String>,
}

impl Repository {
    pub fn add(&self, request: AddRequest) -> anyhow::Result<()> {
        let Some(path) = request.path else {
            return self.list_tracked_files();
        };

        if !self.workspace().file_exists(Path::new(&path)) {
            writeln!(self.writer(), "Can't find '{}'.", path)?;

            return Ok(());
        }

        self.index().track(&path)?;
        writeln!(self.writer(), "The file '{}' is tracked.", path)?;

        Ok(())
    }

    fn list_tracked_files(&self) -> anyhow::Result<()> {
        if self.index().is_empty()? {
            writeln!(self.writer(), "Add a file to the index.")?;

            return Ok(());
        }

        writeln!(self.writer(), "Tracked files:")?;
        for path in self.index().load()? {
            writeln!(self.writer(), "{}", path.display())?;
        }

        Ok(())
    }
}
