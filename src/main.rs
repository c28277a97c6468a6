use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moba_mcp::config::{init_logging, ConfigLoader, Environment};
use moba_mcp::fixture::{FixtureGenerator, FixtureVariant};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "moba-mcp", version, about = "Moba-MCP settings and test fixture bootstrap")]
struct Cli {
    /// Directory holding `.env`; relative store paths resolve against it
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved settings
    Settings {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Create the fixture store and its metadata document
    Generate {
        /// `standalone` or `metadata-only`
        #[arg(long, default_value = "standalone")]
        variant: FixtureVariant,

        /// Server name written into the metadata document
        #[arg(long)]
        server_name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot read working directory")?,
    };

    let resolution = ConfigLoader::in_dir(&base_dir)
        .resolve(&Environment::from_process())
        .context("failed to resolve settings")?;
    let settings = resolution.settings;

    init_logging(&settings)?;
    // Emitted again: resolution ran before the subscriber existed
    for warning in &resolution.warnings {
        warn!("{}", warning);
    }

    info!(
        "Moba-MCP v{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        settings.server_name(),
        settings.server_version()
    );

    match cli.command.unwrap_or(Command::Settings { json: false }) {
        Command::Settings { json } => {
            let rendered = if json {
                serde_json::to_string_pretty(&settings)?
            } else {
                settings.to_toml()?
            };
            println!("{}", rendered);
        }
        Command::Generate {
            variant,
            server_name,
        } => {
            let database_path = settings.absolute_database_path(Some(&base_dir))?;
            let metadata_path = settings.absolute_metadata_path(Some(&base_dir))?;

            let mut generator = FixtureGenerator::new(variant);
            if let Some(name) = server_name {
                generator = generator.with_server_name(name);
            }
            let report = generator
                .generate(&database_path, &metadata_path)
                .with_context(|| format!("failed to generate {} fixture", variant))?;

            for table in &report.tables {
                info!(
                    table = %table.name,
                    inserted = table.inserted,
                    rows = table.row_count,
                    "Table ready"
                );
            }
            println!("Database: {}", report.database_path.display());
            println!("Metadata: {}", report.metadata_path.display());
        }
    }

    Ok(())
}
