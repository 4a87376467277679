use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{ConfigCommand, ExportCommand, LogCommand, SettingsCommand};
use config::Config;
use foodlog::notify::TracingNotifier;
use foodlog::settings::SettingsStore;
use foodlog::store::{JsonFileStorage, LogStore};

#[derive(Parser)]
#[command(name = "foodlog")]
#[command(version)]
#[command(about = "A food logging CLI application", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, review, and delete logged meals
    Log(LogCommand),

    /// Export logs to a plain-text report
    Export(ExportCommand),

    /// Manage app settings (theme, calorie goal, reminders)
    Settings(SettingsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodlog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Log(cmd)) => {
            let mut store = open_log_store(&config).await?;
            let settings = open_settings_store(&config).await?;
            cmd.run(&mut store, settings.current()).await?;
        }
        Some(Commands::Export(cmd)) => {
            let store = open_log_store(&config).await?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Settings(cmd)) => {
            let mut settings = open_settings_store(&config).await?;
            let notifier = TracingNotifier;
            cmd.run(&mut settings, &notifier).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

async fn open_log_store(config: &Config) -> Result<LogStore, Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::new(config.data_dir.value.clone());
    let mut store = LogStore::new(Box::new(storage));
    store.load().await?;
    Ok(store)
}

async fn open_settings_store(config: &Config) -> Result<SettingsStore, Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::new(config.data_dir.value.clone());
    let mut settings = SettingsStore::new(Box::new(storage));
    settings.load().await?;
    Ok(settings)
}
