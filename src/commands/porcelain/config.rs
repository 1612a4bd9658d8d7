use crate::areas::repository::Repository;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct ConfigRequest {
    pub username: Option<String>,
}

impl Repository {
    pub fn config(&self, request: ConfigRequest) -> anyhow::Result<()> {
        if let Some(username) = request.username {
            self.config_store().set_username(&username)?;
            writeln!(self.writer(), "The username is {}.", username)?;

            return Ok(());
        }

        match self.config_store().username()? {
            Some(username) => writeln!(self.writer(), "The username is {}.", username)?,
            None => writeln!(self.writer(), "Please, tell me who you are.")?,
        }

        Ok(())
    }
}
