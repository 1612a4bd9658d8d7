use crate::areas::config::Config;
use crate::areas::index::Index;
use crate::areas::log::CommitLog;
use crate::areas::snapshots::Snapshots;
use crate::areas::workspace::Workspace;
use crate::artifacts::clock::{Clock, SystemClock};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the storage directory, relative to the working directory.
const STORAGE_DIR: &str = "vcs";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    index: Index,
    config: Config,
    snapshots: Snapshots,
    log: CommitLog,
    clock: Box<dyn Clock>,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        Self::with_clock(path, writer, Box::new(SystemClock))
    }

    /// Open a repository rooted at `path`, creating the storage layout if it
    /// does not exist yet. The clock feeds commit identifier derivation.
    pub fn with_clock(
        path: &str,
        writer: Box<dyn std::io::Write>,
        clock: Box<dyn Clock>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let storage = path.join(STORAGE_DIR);

        let workspace = Workspace::new(path.into_boxed_path());
        let index = Index::new(storage.join("index.txt").into_boxed_path());
        let config = Config::new(storage.join("config.txt").into_boxed_path());
        let snapshots = Snapshots::new(storage.join("commits").into_boxed_path());
        let log = CommitLog::new(storage.join("log.txt").into_boxed_path());

        std::fs::create_dir_all(snapshots.commits_path())
            .context("Failed to create the commits directory")?;
        touch(index.path())?;
        touch(config.path())?;
        touch(log.path())?;

        Ok(Repository {
            writer: RefCell::new(writer),
            workspace,
            index,
            config,
            snapshots,
            log,
            clock,
        })
    }

    pub(crate) fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn config_store(&self) -> &Config {
        &self.config
    }

    pub(crate) fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    pub(crate) fn commit_log(&self) -> &CommitLog {
        &self.log
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

fn touch(path: &Path) -> anyhow::Result<()> {
    std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map(|_| ())
        .with_context(|| format!("Failed to create store file {}", path.display()))
}
