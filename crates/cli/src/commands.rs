//! Subcommands: recipes, validate, run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use sockforge_engine::{PassReport, SocketingPass};
use sockforge_infra::{Config, SimulatedGame, load_items};
use sockforge_recipes::RecipeCatalog;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes in priority order
    Recipes {
        /// JSON recipe catalog (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Check every character's enabled recipes against the catalog
    Validate {
        /// Config file (default: $SOCKFORGE_CONFIG or sockforge.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Run one socketing pass against a snapshot in a simulated session
    Run {
        /// Character whose enabled recipes to use
        #[arg(long)]
        character: String,

        /// JSON array of items
        #[arg(short, long)]
        snapshot: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn dispatch(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Recipes { catalog } => cmd_recipes(catalog.as_deref()),
        Commands::Validate { config, catalog } => cmd_validate(config.as_deref(), catalog.as_deref()),
        Commands::Run {
            character,
            snapshot,
            config,
            catalog,
        } => cmd_run(&character, &snapshot, config.as_deref(), catalog.as_deref()),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<RecipeCatalog> {
    let Some(path) = path else {
        return Ok(RecipeCatalog::standard());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recipe catalog {}", path.display()))?;
    RecipeCatalog::from_json(&json).with_context(|| format!("invalid recipe catalog {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
    .context("failed to load config")
}

fn cmd_recipes(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    for (idx, recipe) in catalog.iter().enumerate() {
        println!(
            "{:>2}. {:<16} {} -> [{}] ({} sockets)",
            idx + 1,
            recipe.name(),
            recipe.inserts().join(" + "),
            recipe.base_types().join(", "),
            recipe.sockets()
        );
    }
    Ok(())
}

fn cmd_validate(config: Option<&Path>, catalog: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = load_catalog(catalog)?;

    let mut problems = 0usize;
    for (name, character) in &config.characters {
        let unknown: Vec<&str> = character.enabled_recipes().unknown_in(&catalog).collect();
        if unknown.is_empty() {
            println!("{name}: ok");
        } else {
            problems += unknown.len();
            println!("{name}: unknown recipes {unknown:?}");
        }
    }

    if problems > 0 {
        anyhow::bail!("{problems} enabled recipe name(s) do not match the catalog");
    }
    Ok(())
}

fn cmd_run(character: &str, snapshot: &Path, config: Option<&Path>, catalog: Option<&Path>) -> Result<()> {
    let report = run_pass(character, snapshot, config, catalog)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_pass(
    character: &str,
    snapshot: &Path,
    config: Option<&Path>,
    catalog: Option<&Path>,
) -> Result<PassReport> {
    let config = load_config(config)?;
    let character_config = config.character(character)?;
    let catalog = load_catalog(catalog)?;
    let items = load_items(snapshot)
        .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;

    tracing::info!("running socket pass for {} over {} item(s)", character, items.len());

    let mut game = SimulatedGame::new(items);
    SocketingPass::with_options(&catalog, character_config.socketing_options())
        .for_character(character)
        .run(&mut game, character_config.enabled_recipes())
        .context("socketing pass aborted")
}
