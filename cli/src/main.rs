mod app;
mod prompt;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tasklist_core::{FileTaskRepository, TaskRepository, TaskStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "An interactive task list kept in a local JSON file", long_about = None)]
struct Cli {
    /// Task file to use instead of tasklist.json in the working directory
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = FileTaskRepository::new(cli.file);
    let mut store = TaskStore::from_tasks(repo.load()?);
    debug!(count = store.len(), "store loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&repo, &mut store, &mut stdin.lock(), &mut stdout.lock())
}
