//! `todo` command-line host.
//!
//! # Responsibility
//! - Translate one command into a `PageEvent` against the persisted list.
//! - Print the re-rendered rows, or the validation error.
//!
//! # Exit codes
//! - `0` success, `1` rejected todo text, `2` any other failure.

mod terminal;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::TerminalSurface;
use todo_core::config::{default_db_path, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use todo_core::db::open_db;
use todo_core::{
    default_log_level, init_logging, Page, PageEvent, SqliteStore, SubmitOutcome, TodoApp,
};

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Keep a small persistent todo list")]
struct Cli {
    /// SQLite file holding the list.
    #[arg(long, env = DB_PATH_ENV, default_value_os_t = default_db_path())]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = LOG_DIR_ENV)]
    log_dir: Option<String>,

    #[arg(long, env = LOG_LEVEL_ENV, default_value = default_log_level())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a todo (at least three characters).
    Add { text: String },
    /// Toggle the todo at a 1-based position of the current list.
    Toggle { index: usize },
    /// Remove every todo.
    Clear,
    /// Sort todos alphabetically.
    Sort,
    /// Show the list.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open todo database `{}`", cli.db.display()))?;
    let page = Page::new(SqliteStore::new(&conn), TerminalSurface::new());
    let mut app = TodoApp::load(page);

    let event = match cli.command {
        Command::Add { text } => PageEvent::FormSubmitted { text },
        Command::Toggle { index } => {
            let id = index
                .checked_sub(1)
                .and_then(|position| app.todos().get(position))
                .map(|todo| todo.id())
                .ok_or_else(|| {
                    anyhow!(
                        "no todo at position {index}; the list has {} item(s)",
                        app.todos().len()
                    )
                })?;
            PageEvent::RowClicked(id)
        }
        Command::Clear => PageEvent::ClearClicked,
        Command::Sort => PageEvent::SortClicked,
        Command::List => {
            app.refresh().context("failed to render todo list")?;
            return print_page(app.caps().surface(), ExitCode::SUCCESS);
        }
    };

    let outcome = app.handle(event).context("failed to update todo list")?;
    let code = match outcome {
        Some(SubmitOutcome::Rejected(_)) => {
            warn!("event=cli_add module=cli status=rejected");
            ExitCode::from(1)
        }
        _ => ExitCode::SUCCESS,
    };
    print_page(app.caps().surface(), code)
}

fn print_page(surface: &TerminalSurface, code: ExitCode) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    surface.write_rows(&mut stdout)?;
    stdout.flush()?;
    surface.write_error(&mut io::stderr().lock())?;
    Ok(code)
}
