//! Command-line front end for the event scheduler.
//!
//! # Responsibility
//! - Map subcommands onto scheduler intents (add, edit, delete, list, show).
//! - Choose the slot backend and bootstrap logging from global flags.

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use scheduler_core::config::normalize_filter_mode;
use scheduler_core::db::open_db;
use scheduler_core::{
    init_logging, parse_date, ConfigOptions, Event, EventId, EventSlot, EventStore,
    JsonFileSlot, Scheduler, SchedulerConfig, SqliteSlot, SubmitError,
};
use std::path::PathBuf;
use std::process::ExitCode;

const APP_DIR_NAME: &str = "scheduler";
const DB_FILE_NAME: &str = "scheduler.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Parser)]
#[command(name = "scheduler", version, about = "Personal event scheduler")]
struct Cli {
    /// Directory holding the event slot and logs.
    #[arg(long, global = true, env = "SCHEDULER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Slot backend.
    #[arg(long, global = true, value_enum, default_value_t = Backend::Json)]
    backend: Backend,

    /// Slot key the event list is stored under.
    #[arg(long, global = true)]
    key: Option<String>,

    /// First day of the week: sunday or monday.
    #[arg(long, global = true)]
    week_start: Option<String>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Json,
    Sqlite,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new event.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        /// Date as YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Edit an existing event; omitted fields keep their current value.
    Edit {
        id: EventId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an event. Unknown ids are ignored.
    Delete { id: EventId },
    /// List events for this week or month.
    List {
        /// week or month.
        #[arg(long)]
        view: Option<String>,
        /// Reference date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        today: Option<String>,
    },
    /// Show one event.
    Show { id: EventId },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SchedulerConfig::from_options(&ConfigOptions {
        slot_key: cli.key.as_deref(),
        week_start: cli.week_start.as_deref(),
        default_mode: None,
        log_level: cli.log_level.as_deref(),
    })
    .map_err(|err| anyhow!(err))?;

    let data_dir = resolve_data_dir(cli.data_dir)?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory `{}`", data_dir.display()))?;

    if let Err(err) = init_logging(config.log_level, data_dir.join(LOG_DIR_NAME)) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli backend={:?} key={}",
        cli.backend, config.slot_key
    );

    match cli.backend {
        Backend::Json => {
            let slot = JsonFileSlot::new(&data_dir, config.slot_key.as_str())?;
            execute(Scheduler::with_config(EventStore::open(slot), &config), cli.command)
        }
        Backend::Sqlite => {
            let conn = open_db(data_dir.join(DB_FILE_NAME))?;
            let slot = SqliteSlot::try_new(&conn, config.slot_key.as_str())?;
            execute(Scheduler::with_config(EventStore::open(slot), &config), cli.command)
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .context("could not determine a local data directory; pass --data-dir")?,
    };
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(dir))
}

fn execute<S: EventSlot>(mut scheduler: Scheduler<S>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add { title, date } => {
            let mut editor = scheduler.open_add();
            editor.form.title = title;
            editor.form.date = date;
            let event = scheduler.submit_editor(&mut editor).map_err(describe_submit)?;
            println!("added {}", format_event(&event));
        }
        Command::Edit { id, title, date } => {
            let mut editor = scheduler
                .open_edit(id)
                .ok_or_else(|| anyhow!("event not found: {id}"))?;
            if let Some(title) = title {
                editor.form.title = title;
            }
            if let Some(date) = date {
                editor.form.date = date;
            }
            let event = scheduler.submit_editor(&mut editor).map_err(describe_submit)?;
            println!("updated {}", format_event(&event));
        }
        Command::Delete { id } => {
            let existed = scheduler.store().get(id).is_some();
            scheduler.delete(id)?;
            if existed {
                println!("deleted {id}");
            } else {
                println!("no event with id {id}");
            }
        }
        Command::List { view, today } => {
            if let Some(view) = view {
                scheduler.set_mode(normalize_filter_mode(&view).map_err(|err| anyhow!(err))?);
            }
            let today = resolve_today(today.as_deref())?;
            let events = scheduler.visible_events(today);
            if events.is_empty() {
                println!("{}", scheduler.empty_message());
            }
            for event in &events {
                println!("{}", format_event(event));
            }
        }
        Command::Show { id } => {
            let event = scheduler
                .store()
                .get(id)
                .ok_or_else(|| anyhow!("event not found: {id}"))?;
            println!("{}", format_event(event));
        }
    }
    Ok(())
}

fn resolve_today(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        Some(raw) => parse_date(raw).ok_or_else(|| anyhow!("invalid --today date `{raw}`")),
        None => Ok(Local::now().date_naive()),
    }
}

fn describe_submit(err: SubmitError) -> anyhow::Error {
    match err {
        SubmitError::Invalid(errors) => {
            let mut lines = Vec::new();
            if let Some(message) = errors.title {
                lines.push(format!("title: {message}"));
            }
            if let Some(message) = errors.date {
                lines.push(format!("date: {message}"));
            }
            anyhow!(lines.join("\n"))
        }
        SubmitError::Store(err) => anyhow::Error::new(err),
    }
}

fn format_event(event: &Event) -> String {
    format!("{:>14}  {:<20}  {}", event.id, event.display_date(), event.title)
}

#[cfg(test)]
mod tests {
    use super::{resolve_today, Cli};
    use clap::Parser;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scheduler",
            "list",
            "--view",
            "week",
            "--backend",
            "sqlite",
            "--week-start",
            "monday",
        ])
        .expect("arguments should parse");
        assert!(matches!(cli.backend, super::Backend::Sqlite));
        assert_eq!(cli.week_start.as_deref(), Some("monday"));
    }

    #[test]
    fn resolve_today_rejects_bad_dates() {
        assert!(resolve_today(Some("2024-02-30")).is_err());
        assert_eq!(
            resolve_today(Some("2024-02-29")).unwrap().to_string(),
            "2024-02-29"
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
