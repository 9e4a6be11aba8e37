/// Main entry point for the habitgrid CLI
///
/// Sets up logging, resolves the database location, opens the store, and
/// dispatches to the subcommand handlers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habitgrid::domain::Category;
use habitgrid::{cli, HabitStore, SqliteStore};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_paths = [
        dirs::data_dir().map(|mut p| {
            p.push("habitgrid");
            p
        }),
        dirs::home_dir().map(|mut p| {
            p.push(".habitgrid");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habitgrid");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    let mut temp_path = std::env::temp_dir();
    temp_path.push("habitgrid");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for habitgrid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        name: String,
        #[arg(long, default_value = "health")]
        category: Category,
        #[arg(long)]
        icon: Option<String>,
    },
    /// List all habits with their streaks
    List,
    /// Toggle a completion mark (defaults to today)
    Log {
        /// Habit id or name
        habit: String,
        /// Date to toggle, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a habit
    Remove {
        /// Habit id or name
        habit: String,
    },
    /// Edit a habit's name, category, or icon
    Set {
        /// Habit id or name
        habit: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Show progress insights
    Stats,
    /// Show the completion grid for a month
    Month {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Show the achievement catalog
    Achievements,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitgrid={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let storage = SqliteStore::new(db_path)?;
    let mut store = HabitStore::open(storage);

    match args.command {
        Command::Add {
            name,
            category,
            icon,
        } => cli::add::run(&mut store, name, category, icon)?,
        Command::List => cli::list::run(&store)?,
        Command::Log { habit, date } => cli::log::run(&mut store, &habit, date)?,
        Command::Remove { habit } => cli::remove::run(&mut store, &habit)?,
        Command::Set {
            habit,
            name,
            category,
            icon,
        } => cli::update::run(&mut store, &habit, name, category, icon)?,
        Command::Stats => cli::insights::stats(&store)?,
        Command::Month { year, month } => cli::insights::month(&store, year, month)?,
        Command::Achievements => cli::insights::achievements(&store)?,
    }

    Ok(())
}
