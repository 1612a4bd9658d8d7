use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Username store: a single line in the config file.
#[derive(Debug, new)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured username, if one has been set.
    pub fn username(&self) -> anyhow::Result<Option<String>> {
        let content = std::fs::read_to_string(self.path())
            .with_context(|| format!("Unable to read config file {}", self.path.display()))?;

        let username = content.lines().next().unwrap_or("").trim().to_string();

        Ok(if username.is_empty() { None } else { Some(username) })
    }

    /// Replace the stored username.
    pub fn set_username(&self, username: &str) -> anyhow::Result<()> {
        std::fs::write(self.path(), format!("{}\n", username))
            .with_context(|| format!("Unable to write config file {}", self.path.display()))
    }
}
