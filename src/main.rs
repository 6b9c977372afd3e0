use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde_json::json;
use std::io::Write;
use std::str::FromStr;

use namegen::config::Config;
use namegen::names::{DEFAULT_DATABASE_PREFIX, DEFAULT_INSTANCE_PREFIX};
use namegen::{NameGenerator, SqlNameGenerator};

#[derive(Parser)]
#[command(name = "namegen", version, about = "Generate resource names and credentials")]
struct Cli {
    /// TOML config file with prefix overrides
    #[arg(long)]
    config: Option<String>,

    /// Print results as JSON objects, one per line
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate resource instance names
    InstanceName {
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Generate SQL database names
    DatabaseName {
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Derive a username for an (instance, binding) pair
    Username {
        instance_id: String,
        binding_id: String,
    },
    /// Generate random passwords
    Password {
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

fn main() {
    // Setup logger
    let filter =
        LevelFilter::from_str(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()))
            .unwrap_or(LevelFilter::Info);

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Local::now().format("%T%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    let generator = match build_generator(cli.config) {
        Ok(generator) => generator,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::InstanceName { count } => {
            for _ in 0..count {
                emit("instance_name", &generator.instance_name(), cli.json);
            }
        }
        Command::DatabaseName { count } => {
            for _ in 0..count {
                emit("database_name", &generator.database_name(), cli.json);
            }
        }
        Command::Username {
            instance_id,
            binding_id,
        } => match generator.generate_username(&instance_id, &binding_id) {
            Ok(username) => emit("username", &username, cli.json),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        Command::Password { count } => {
            for _ in 0..count {
                match generator.generate_password() {
                    Ok(password) => emit("password", &password, cli.json),
                    Err(e) => {
                        log::error!("{}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}

fn build_generator(config_path: Option<String>) -> Result<SqlNameGenerator, namegen::config::LoadError> {
    let Some(path) = config_path else {
        return Ok(SqlNameGenerator::new());
    };

    log::debug!("Loading config from {}", path);
    let cfg = Config::load(path)?;
    let naming = cfg.naming.unwrap_or_default();

    Ok(SqlNameGenerator::with_prefixes(
        naming
            .instance_prefix
            .as_deref()
            .unwrap_or(DEFAULT_INSTANCE_PREFIX),
        naming
            .database_prefix
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_PREFIX),
    ))
}

fn emit(kind: &str, value: &str, as_json: bool) {
    if as_json {
        println!("{}", json!({ "kind": kind, "value": value }));
    } else {
        println!("{value}");
    }
}
