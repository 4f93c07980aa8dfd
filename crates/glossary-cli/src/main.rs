//! Command-line entry point for generating a cross-linked glossary site

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use glossary_core::config::load_config;
use glossary_core::{ConfigBuilder, GlossaryConfig};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "glossary",
    author,
    version = "0.1.0",
    about = "Generate cross-linked HTML pages from a glossary file"
)]
struct Cli {
    #[clap(long, short, help = "YAML configuration file")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Glossary text file to read")]
    input: Option<PathBuf>,

    #[clap(long, short, help = "Existing directory to write the HTML pages into")]
    output: Option<PathBuf>,

    #[clap(long, short, help = "Log level (overrides logging.level from the configuration)")]
    log_level: Option<String>,

    #[clap(long, help = "Write pages in place instead of through temporary files")]
    no_atomic: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = file_config(&cli)?;

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| file_config.logging.level.clone());
    let log_level_filter = log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    if let Some(path) = &cli.config {
        log::info!("Configuration loaded from: {}", path.display());
    }

    let config = apply_overrides(file_config, &cli)?;
    run(config)
}

fn file_config(cli: &Cli) -> Result<GlossaryConfig> {
    match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(GlossaryConfig::default()),
    }
}

fn apply_overrides(config: GlossaryConfig, cli: &Cli) -> Result<GlossaryConfig> {
    let mut builder = ConfigBuilder::from_config(config);
    if let Some(input) = &cli.input {
        builder = builder.input(input);
    }
    if let Some(output) = &cli.output {
        builder = builder.output_dir(output);
    }
    if let Some(level) = &cli.log_level {
        builder = builder.log_level(level);
    }
    if cli.no_atomic {
        builder = builder.atomic_writes(false);
    }
    Ok(builder.build()?)
}

fn run(config: GlossaryConfig) -> Result<()> {
    let input = match &config.input {
        Some(path) => path.clone(),
        None => prompt_path("Enter name of input file")?,
    };
    let output_dir = match &config.output_dir {
        Some(path) => path.clone(),
        None => prompt_path("Enter name of folder")?,
    };

    log::info!(
        "Generating glossary pages from {} into {}",
        input.display(),
        output_dir.display()
    );

    let written = glossary_core::generate(&input, &output_dir, &config)
        .with_context(|| format!("Failed to generate glossary from {}", input.display()))?;

    log::info!("Wrote {} pages to {}", written.len(), output_dir.display());
    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .with_context(|| format!("Failed to read answer to '{}'", prompt))?;
    Ok(PathBuf::from(answer.trim()))
}
