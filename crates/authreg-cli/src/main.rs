use anyhow::Result;
use authreg_core::{
    build_default_config, AuthenticationRegistry, DefinitionLoader, RefreshOutcome,
    RegistrySettings, SettingsLoader,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "authreg",
    author,
    version = "0.1.0",
    about = "Authentication provider registry"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(
        long,
        short,
        default_value = "authreg.yaml",
        help = "Settings file; defaults are used when it does not exist"
    )]
    config: PathBuf,

    #[clap(long, help = "Directory holding one subdirectory per provider definition")]
    definitions_dir: Option<PathBuf>,

    #[clap(long, help = "JSON file holding the strategy registry")]
    store: Option<PathBuf>,

    #[clap(long, short, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed registry rows for provider definitions that have none yet
    Refresh {
        #[clap(long, help = "Show what would be created without writing")]
        dry_run: bool,
    },
    /// Print all registered strategies as JSON
    List,
    /// Print the default configuration computed for each definition
    Defaults,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let settings = load_settings(&cli).await?;
    log::debug!(
        "Using definitions from {} and store {}",
        settings.definitions.dir.display(),
        settings.store.path.display()
    );

    match cli.command {
        Commands::Refresh { dry_run } => run_refresh(&settings, dry_run).await,
        Commands::List => run_list(&settings).await,
        Commands::Defaults => run_defaults(&settings).await,
    }
}

async fn load_settings(cli: &Cli) -> Result<RegistrySettings> {
    let mut settings = SettingsLoader::from_file_or_default(&cli.config).await?;
    if let Some(dir) = &cli.definitions_dir {
        settings.definitions.dir = dir.clone();
    }
    if let Some(store) = &cli.store {
        settings.store.path = store.clone();
    }
    settings.validate()?;
    Ok(settings)
}

async fn run_refresh(settings: &RegistrySettings, dry_run: bool) -> Result<()> {
    let registry = AuthenticationRegistry::from_settings(settings);

    if dry_run {
        let plan = registry.reconciler().plan().await?;
        if plan.is_empty() {
            println!("No new authentication strategies to create");
        } else {
            for row in &plan {
                println!("would create: {} ({})", row.key, row.title);
            }
        }
        return Ok(());
    }

    match registry.refresh_strategies_from_disk().await {
        RefreshOutcome::Created(n) => {
            println!("Created {} new authentication strategies", n);
            Ok(())
        }
        RefreshOutcome::NothingNew => {
            println!("No new authentication strategies found");
            Ok(())
        }
        RefreshOutcome::Failed(e) => {
            anyhow::bail!("Refresh failed ({}): {}", e.kind(), e)
        }
    }
}

async fn run_list(settings: &RegistrySettings) -> Result<()> {
    let registry = AuthenticationRegistry::from_settings(settings);
    let strategies = registry.get_strategies().await?;
    println!("{}", serde_json::to_string_pretty(&strategies)?);
    Ok(())
}

async fn run_defaults(settings: &RegistrySettings) -> Result<()> {
    let loader = DefinitionLoader::new(&settings.definitions.dir)
        .with_file_name(&settings.definitions.file_name);
    let mut output = serde_json::Map::new();
    for definition in loader.load_all().await? {
        let config = build_default_config(&definition.props)?;
        output.insert(definition.key, serde_json::Value::Object(config));
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
