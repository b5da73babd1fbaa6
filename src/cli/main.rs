//! dbt-lookml CLI - generate LookML views and explores from a dbt project.

mod commands;
mod error;

use anyhow::Context;
use clap::Parser;
use dbt_lookml::GeneratorConfig;
use error::CliError;
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "dbt-lookml")]
#[command(about = "Generate LookML views and explores from dbt project artifacts")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing dbt_project.yml
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Directory containing manifest.json and catalog.json
    #[arg(long)]
    target_dir: Option<PathBuf>,

    /// Output directory for generated LookML
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only generate models with this dbt tag
    #[arg(long)]
    tag: Option<String>,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Cli {
    /// Config file settings overridden by any flag given on the command line
    fn generator_config(&self) -> Result<GeneratorConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(dir) = &self.project_dir {
            config = config.with_project_dir(dir);
        }
        if let Some(dir) = &self.target_dir {
            config = config.with_target_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(tag) = &self.tag {
            config = config.with_tag(tag);
        }
        Ok(config)
    }
}

fn setup_logging(level: &str, format: &str) -> Result<(), CliError> {
    let level = match level.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown log level: {}",
                other
            )));
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown log format: {}",
                other
            )));
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level, &cli.log_format)?;

    let config = cli.generator_config()?;
    let count = commands::generate::handle_generate(&config).with_context(|| {
        format!(
            "Failed to generate LookML for dbt project at {}",
            config.project_dir.display()
        )
    })?;

    info!(
        "Generated LookML for {} models in {}",
        count,
        config.output_dir.display()
    );
    Ok(())
}
