pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::database::{DatabaseManager, StudentRepository};
use crate::filter::StudentFilter;

#[derive(Parser)]
#[command(name = "registry")]
#[command(about = "Registry CLI - command-line access to the student records")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Database URL (overrides DATABASE_URL)")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List students, newest first")]
    List {
        #[arg(long, help = "Case-insensitive text matched against name, program and college")]
        search: Option<String>,
        #[arg(long, help = "Exact current status")]
        status: Option<String>,
    },

    #[command(about = "Load the sample students into an empty registry")]
    Seed,

    #[command(about = "Export students to a timestamped CSV file")]
    Export {
        #[arg(long, help = "Case-insensitive text matched against name, program and college")]
        search: Option<String>,
        #[arg(long, help = "Exact current status")]
        status: Option<String>,
        #[arg(long, default_value = ".", help = "Directory the CSV file is written to")]
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    let database = DatabaseManager::connect(&config.database).await?;
    database.migrate().await?;
    let repository = StudentRepository::new(database.pool().clone());

    let result = match cli.command {
        Commands::List { search, status } => {
            let filter = StudentFilter::new(search.as_deref(), status.as_deref());
            commands::list::handle(repository, filter, output_format).await
        }
        Commands::Seed => commands::seed::handle(repository, output_format).await,
        Commands::Export { search, status, output_dir } => {
            let filter = StudentFilter::new(search.as_deref(), status.as_deref());
            commands::export::handle(repository, filter, &output_dir, output_format).await
        }
    };

    database.close().await;
    result
}
