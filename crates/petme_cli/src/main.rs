//! `petme` command-line entry point.
//!
//! # Responsibility
//! - Load configuration, start logging and open the database.
//! - Wire repositories, domain services, web services and JSON handlers.
//! - Print the JSON response envelope of one operation.

use clap::{Parser, Subcommand};
use log::{error, info};
use petme_core::db::open_db;
use petme_core::{
    init_logging, init_stderr_logging, AnimalService, BreedService, PetmeConfig,
    SqliteAnimalRepository, SqliteBreedRepository,
};
use petme_web::{AnimalApi, AnimalWebService, ApiResponse, BreedApi, BreedWebService};
use rusqlite::Connection;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "petme")]
#[command(about = "Manage animal and breed records")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database file; overrides config and PETME_DB_PATH
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Animal records
    Animal {
        #[command(subcommand)]
        action: Action,
    },
    /// Breed records
    Breed {
        #[command(subcommand)]
        action: BreedAction,
    },
    /// Print `pong` to verify linkage
    Ping,
    /// Print the core version
    Version,
}

#[derive(Subcommand)]
enum Action {
    List,
    Get { id: String },
    /// JSON body, e.g. '{"name": "Dog"}'
    Create { body: String },
    Update { body: String },
    Delete { body: String },
}

#[derive(Subcommand)]
enum BreedAction {
    #[command(flatten)]
    Crud(Action),
    /// Breeds of the animal given as JSON body, e.g. '{"id": "an123"}'
    ByAnimal { body: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Ping => {
            println!("{}", petme_core::ping());
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("{}", petme_core::core_version());
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let logging = match &config.logging.dir {
        Some(dir) => init_logging(&config.logging.level, &dir.to_string_lossy()),
        None => init_stderr_logging(&config.logging.level),
    };
    if let Err(err) = logging {
        eprintln!("failed to start logging: {err}");
        return ExitCode::FAILURE;
    }

    let conn = match open_connection(&config) {
        Ok(conn) => conn,
        Err(message) => {
            error!("event=cli_start module=cli status=error error={message}");
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let response = match run(&conn, args.command) {
        Ok(response) => response,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", response.to_json());
    if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_config(args: &Args) -> Result<PetmeConfig, String> {
    let mut config = match &args.config {
        Some(path) => PetmeConfig::from_file(path).map_err(|err| err.to_string())?,
        None => PetmeConfig::default(),
    };
    config.apply_env_overrides();

    if let Some(db) = &args.db {
        config.database.path = Some(db.clone());
    }
    if args.verbose {
        config.logging.level = "debug".to_string();
    }

    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn open_connection(config: &PetmeConfig) -> Result<Connection, String> {
    let path = config.database.resolved_path();
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        path.display()
    );
    open_db(&path).map_err(|err| format!("failed to open database: {err}"))
}

fn run(conn: &Connection, command: Command) -> Result<ApiResponse, String> {
    match command {
        Command::Animal { action } => {
            let repo = SqliteAnimalRepository::try_new(conn).map_err(|err| err.to_string())?;
            let api = AnimalApi::new(AnimalWebService::with_default_translator(
                AnimalService::with_default_translator(repo),
            ));
            Ok(match action {
                Action::List => api.list(),
                Action::Get { id } => api.get(&id),
                Action::Create { body } => api.create(&body),
                Action::Update { body } => api.update(&body),
                Action::Delete { body } => api.delete(&body),
            })
        }
        Command::Breed { action } => {
            let repo = SqliteBreedRepository::try_new(conn).map_err(|err| err.to_string())?;
            let api = BreedApi::new(BreedWebService::with_default_translators(
                BreedService::with_default_translators(repo),
            ));
            Ok(match action {
                BreedAction::Crud(Action::List) => api.list(),
                BreedAction::Crud(Action::Get { id }) => api.get(&id),
                BreedAction::Crud(Action::Create { body }) => api.create(&body),
                BreedAction::Crud(Action::Update { body }) => api.update(&body),
                BreedAction::Crud(Action::Delete { body }) => api.delete(&body),
                BreedAction::ByAnimal { body } => api.by_animal(&body),
            })
        }
        Command::Ping | Command::Version => Err("no database command given".to_string()),
    }
}
