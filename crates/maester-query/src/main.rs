//! CLI entry point for the Maester query facade.
//!
//! Loads the seed dataset once, runs a single read-only query, and writes the
//! JSON result to stdout. Logs go to stderr.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use maester_core::{EntityKind, MaesterConfig};
use maester_query::load::load_dataset;
use maester_query::QueryEngine;

#[derive(Parser)]
#[command(name = "maester")]
#[command(about = "Query the character and house dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: maester).
    #[arg(short, long, default_value = "maester", global = true)]
    config: String,

    /// Override the characters seed path.
    #[arg(long, global = true)]
    characters: Option<String>,

    /// Override the houses seed path.
    #[arg(long, global = true)]
    houses: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every character with derived fields.
    Characters,
    /// Look up one character by exact name.
    Character {
        #[arg(long)]
        name: String,
    },
    /// List every house with derived fields.
    Houses,
    /// Look up one house by exact name.
    House {
        #[arg(long)]
        name: String,
    },
    /// Resolve a single derived field of one record.
    Field {
        /// Entity type: character or house.
        #[arg(long, value_parser = EntityKind::from_str)]
        entity: EntityKind,
        /// Exact record name.
        #[arg(long)]
        name: String,
        /// Field name, e.g. siblingIds or allegianceHouseIds.
        #[arg(long)]
        field: String,
    },
    /// Dataset counts and fingerprint.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = MaesterConfig::load(&cli.config)?;
    if let Some(path) = &cli.characters {
        config.dataset.characters = path.clone();
    }
    if let Some(path) = &cli.houses {
        config.dataset.houses = path.clone();
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    let subscriber = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if config.log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    tracing::debug!(
        characters = %config.dataset.characters,
        houses = %config.dataset.houses,
        "Configuration loaded"
    );

    let dataset = load_dataset(&config.dataset).await?;
    let engine = QueryEngine::new(dataset);

    match cli.command {
        Command::Characters => {
            let views: Vec<_> = engine
                .list_characters()
                .iter()
                .map(|c| engine.character_view(c))
                .collect();
            emit(&views, cli.pretty)?;
        }
        Command::Character { ref name } => {
            let view = engine.get_character(name).map(|c| engine.character_view(c));
            emit(&view, cli.pretty)?;
        }
        Command::Houses => {
            let views: Vec<_> = engine
                .list_houses()
                .iter()
                .map(|h| engine.house_view(h))
                .collect();
            emit(&views, cli.pretty)?;
        }
        Command::House { ref name } => {
            let view = engine.get_house(name).map(|h| engine.house_view(h));
            emit(&view, cli.pretty)?;
        }
        Command::Field {
            entity,
            ref name,
            ref field,
        } => {
            let value = engine.resolve_named_field(entity, name, field)?;
            emit(&value, cli.pretty)?;
        }
        Command::Stats => emit(&engine.stats(), cli.pretty)?,
    }

    Ok(())
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
