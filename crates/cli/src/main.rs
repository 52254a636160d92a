//! `employee-registry` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository, PoolConfig};
use service::EmployeeService;

#[derive(Debug, Parser)]
#[command(
    name = "employee-registry",
    about = "CRUD service for employee records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
        /// Where employee records are kept.
        #[arg(long, env = "STORAGE", value_enum, default_value_t = Storage::Postgres)]
        storage: Storage,
        #[arg(long, env = "DATABASE_URL", required_if_eq("storage", "postgres"))]
        database_url: Option<String>,
        #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
        max_connections: u32,
        /// Apply pending migrations before accepting requests.
        #[arg(long)]
        migrate: bool,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Storage {
    Postgres,
    /// Volatile; everything is lost on exit.
    Memory,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            storage,
            database_url,
            max_connections,
            migrate,
        } => {
            let repository: Arc<dyn EmployeeRepository> = match storage {
                Storage::Memory => {
                    info!("using in-memory employee storage");
                    Arc::new(InMemoryEmployeeRepository::new())
                }
                Storage::Postgres => {
                    let url = database_url.context("--database-url is required for postgres storage")?;
                    let pool = db::pool::create_pool(&url, &pool_config(max_connections))
                        .await
                        .context("failed to connect to database")?;
                    if migrate {
                        db::pool::run_migrations(&pool).await.context("migration failed")?;
                    }
                    Arc::new(PgEmployeeRepository::new(pool))
                }
            };

            info!("Starting API server on {bind}");
            let state = api::AppState::new(EmployeeService::new(repository));
            api::serve(&bind, state).await.context("server error")?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations");
            let pool = db::pool::create_pool(&database_url, &pool_config(2))
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}

fn pool_config(max_connections: u32) -> PoolConfig {
    PoolConfig {
        max_connections,
        acquire_timeout: Duration::from_secs(5),
    }
}

/// Log filter comes from `RUST_LOG`, defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from([
            "employee-registry",
            "serve",
            "--database-url",
            "postgres://localhost/employees",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                bind,
                storage,
                database_url,
                max_connections,
                migrate,
            } => {
                assert_eq!(bind, "0.0.0.0:8080");
                assert_eq!(storage, Storage::Postgres);
                assert_eq!(database_url.as_deref(), Some("postgres://localhost/employees"));
                assert_eq!(max_connections, 10);
                assert!(!migrate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn memory_storage_needs_no_database_url() {
        let cli = Cli::try_parse_from(["employee-registry", "serve", "--storage", "memory"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::Serve { storage: Storage::Memory, .. }
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
