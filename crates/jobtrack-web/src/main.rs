//! jobtrack server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the tracker over HTTP. The `add`, `list`,
//! `report` and `sites` subcommands work against the same database without
//! starting a server.
//!
//! ```
//! cargo run -p jobtrack-web --bin jobtrack -- serve
//! cargo run -p jobtrack-web --bin jobtrack -- add --site Indeed --status applied
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use jobtrack_core::{application::NewApplication, site::SITES, store::ApplicationStore};
use jobtrack_store_sqlite::SqliteStore;
use jobtrack_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Job application tracker")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the web UI and JSON API (the default).
  Serve,
  /// Record a new application.
  Add {
    #[arg(long)]
    site:   String,
    #[arg(long)]
    status: String,
    #[arg(long)]
    notes:  Option<String>,
  },
  /// Print every recorded application.
  List,
  /// Print the number of applications per site.
  Report,
  /// Print the job-site directory.
  Sites,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // The directory needs no store.
  if let Some(Command::Sites) = cli.command {
    print_sites();
    return Ok(());
  }

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("JOBTRACK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store; this also ensures the schema.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(store, &server_cfg).await,
    Command::Add { site, status, notes } => {
      let input = NewApplication::new(site, status, notes)?;
      let app = store.create(input).await.context("failed to record application")?;
      println!("recorded application {}", app.id);
      Ok(())
    }
    Command::List => {
      for app in store.list_all().await.context("failed to list applications")? {
        println!(
          "{}\t{}\t{}\t{}",
          app.id,
          app.site,
          app.status,
          app.notes.as_deref().unwrap_or("")
        );
      }
      Ok(())
    }
    Command::Report => {
      let counts = store.count_by_site().await.context("failed to build report")?;
      for (site, count) in counts.iter() {
        println!("{site}\t{count}");
      }
      Ok(())
    }
    Command::Sites => {
      print_sites();
      Ok(())
    }
  }
}

fn print_sites() {
  for site in SITES {
    println!("{}\t{}", site.name, site.url);
  }
}

async fn serve(store: SqliteStore, server_cfg: &ServerConfig) -> anyhow::Result<()> {
  let state = AppState { store: Arc::new(store) };

  let app = jobtrack_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
