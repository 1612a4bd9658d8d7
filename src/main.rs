use anyhow::Result;
use clap::{Parser, Subcommand};
use svcs::areas::repository::Repository;
use svcs::commands::porcelain::add::AddRequest;
use svcs::commands::porcelain::checkout::CheckoutRequest;
use svcs::commands::porcelain::commit::CommitRequest;
use svcs::commands::porcelain::config::ConfigRequest;

#[derive(Parser)]
#[command(
    name = "svcs",
    version = "0.1.0",
    about = "A simple version control system",
    long_about = "This is a simple local version control system. \
    It tracks an explicit set of files, saves snapshots of their contents \
    under content-derived commit identifiers, and restores them on demand.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "config",
        about = "Get and set a username",
        long_about = "This command stores the username recorded as the author of new commits. \
        Without an argument it prints the currently configured username."
    )]
    Config {
        #[arg(index = 1, help = "The username to set")]
        username: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add a file to the index",
        long_about = "This command registers a file as tracked. \
        Without an argument it lists the tracked files."
    )]
    Add {
        #[arg(index = 1, help = "The file to track")]
        path: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command prints the commit history, newest first."
    )]
    Log,
    #[command(
        name = "commit",
        about = "Save changes",
        long_about = "This command snapshots the tracked files into a new commit \
        with the specified commit message, unless nothing changed."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore a file",
        long_about = "This command restores the tracked files recorded in the \
        specified commit back into the working directory."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit to restore")]
        commit_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Config { username } => repository.config(ConfigRequest { username })?,
        Commands::Add { path } => repository.add(AddRequest { path })?,
        Commands::Log => repository.log()?,
        Commands::Commit { message } => repository.commit(CommitRequest { message })?,
        Commands::Checkout { commit_id } => repository.checkout(CheckoutRequest { commit_id })?,
    }

    Ok(())
}
