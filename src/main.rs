//! Binary entry point: read the config, set up logging, open the configured
//! store, seed it, then either print the report or start the browser.
use anyhow::{bail, Context, Result};
use restaurant_reviews::config::{Backend, Config};
use restaurant_reviews::logging::{self, Fallback};
use restaurant_reviews::seed::load_or_seed;
use restaurant_reviews::{report, run_app, App, Database, Store};

enum Command {
    Report,
    Browse,
}

fn parse_command(arg: Option<&str>) -> Result<Command> {
    match arg {
        Some("report") => Ok(Command::Report),
        None | Some("browse") => Ok(Command::Browse),
        Some(other) => bail!("unknown command '{other}', expected 'report' or 'browse'"),
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let command = parse_command(std::env::args().nth(1).as_deref())?;

    let fallback = match command {
        Command::Report => Fallback::Stderr,
        Command::Browse => Fallback::Discard,
    };
    logging::init(&config, fallback)?;

    match config.backend {
        Backend::Memory => run(Database::in_memory(), &config, command),
        Backend::Sqlite => {
            let db = Database::sqlite_in_memory().context("failed to open SQLite store")?;
            run(db, &config, command)
        }
    }
}

fn run<S: Store>(db: Database<S>, config: &Config, command: Command) -> Result<()> {
    if config.seed {
        load_or_seed(&db).context("failed to seed sample data")?;
    }

    match command {
        Command::Report => {
            let text = report::render(&db).context("failed to build report")?;
            print!("{text}");
            Ok(())
        }
        Command::Browse => {
            let mut app = App::new(db)?;
            run_app(&mut app)
        }
    }
}
