//! Line-oriented REPL over `linkbook_core`.
//!
//! # Responsibility
//! - Parse process flags, start logging and open storage.
//! - Feed stdin lines to the logic facade and render each result.
//! - Persist the organizer after every command that changed it.
//!
//! # Invariants
//! - Without `--db` nothing is persisted.
//! - A stored organizer that fails validation is reported and replaced by
//!   an empty one; it is never partially loaded.

use clap::Parser;
use linkbook_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, CommandResult, DisplayTag, Logic,
    Model, Organizer, OrganizerRepository, OrganizerSnapshot, SqliteOrganizerRepository,
};
use log::{info, warn};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "linkbook")]
#[command(version)]
#[command(about = "Keep contacts, events and todos linked from the command line")]
#[command(long_about = None)]
struct CliArgs {
    /// SQLite file to load from and save to. Omit for an in-memory session.
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files. Omit to disable logging.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error; defaults by build profile.
    #[arg(long, value_name = "LEVEL", requires = "log_dir")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), String> {
    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let mut conn = match &args.db {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| err.to_string())?;
    let mut repo = SqliteOrganizerRepository::try_new(&mut conn).map_err(|err| err.to_string())?;

    let organizer = load_organizer(&repo)?;
    let mut logic = Logic::new(Model::new(organizer));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ").and_then(|()| stdout.flush()).map_err(io_error)?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                render(&mut stdout, &logic, &result).map_err(io_error)?;
                if result.data_changed && args.db.is_some() {
                    let snapshot = OrganizerSnapshot::from_model(logic.model().organizer());
                    if let Err(err) = repo.save(&snapshot) {
                        writeln!(stdout, "Could not save data: {err}").map_err(io_error)?;
                    }
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => writeln!(stdout, "{err}").map_err(io_error)?,
        }
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}

fn load_organizer(repo: &SqliteOrganizerRepository<'_>) -> Result<Organizer, String> {
    let snapshot = repo.load().map_err(|err| err.to_string())?;
    match snapshot.into_organizer() {
        Ok(organizer) => Ok(organizer),
        Err(err) => {
            warn!("event=organizer_load module=cli status=error fallback=empty");
            eprintln!("Stored data is invalid ({err}); starting with an empty organizer.");
            Ok(Organizer::new())
        }
    }
}

fn render(out: &mut impl Write, logic: &Logic, result: &CommandResult) -> io::Result<()> {
    writeln!(out, "{}", result.message)?;
    match result.display {
        DisplayTag::NoChange => Ok(()),
        DisplayTag::Contacts => render_list(out, logic.shown_contacts().as_slice()),
        DisplayTag::Events => render_list(out, logic.shown_events().as_slice()),
        DisplayTag::Todos => render_list(out, logic.shown_todos().as_slice()),
    }
}

fn render_list<T: Display>(out: &mut impl Write, items: &[&T]) -> io::Result<()> {
    for (position, item) in items.iter().enumerate() {
        writeln!(out, "{}. {item}", position + 1)?;
    }
    Ok(())
}

fn io_error(err: io::Error) -> String {
    format!("i/o error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn flags_are_parsed_by_name() {
        let parsed =
            CliArgs::try_parse_from(["linkbook", "--db", "org.db", "--log-dir", "/tmp/logs"])
                .unwrap();
        assert_eq!(parsed.db, Some(PathBuf::from("org.db")));
        assert_eq!(parsed.log_dir.as_deref(), Some("/tmp/logs"));
        assert_eq!(parsed.log_level, None);
    }

    #[test]
    fn missing_value_and_unknown_flag_are_rejected() {
        assert!(CliArgs::try_parse_from(["linkbook", "--db"]).is_err());
        assert!(CliArgs::try_parse_from(["linkbook", "--verbose"]).is_err());
        assert!(CliArgs::try_parse_from(["linkbook", "--log-level", "warn"]).is_err());
    }

    #[test]
    fn rendered_list_is_one_based() {
        let mut logic = Logic::default();
        let result = logic.execute("add-todo tn/Call td/Ring the venue").unwrap();
        let mut out = Vec::new();
        render(&mut out, &logic, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("1. "));
    }
}
