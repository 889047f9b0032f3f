use anyhow::{Context, Result};
use clap::Parser;
use markdown_reflow_config::Config;
use markdown_reflow_engine::{io, reflow_document};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser, Debug)]
#[command(name = "markdown-reflow")]
#[command(about = "Re-wrap Markdown paragraphs to a fixed line length")]
#[command(version)]
struct Cli {
    /// Markdown files or directories (reads stdin when omitted)
    paths: Vec<PathBuf>,

    /// Maximum line length; overrides the config file
    #[arg(short, long)]
    line_length: Option<usize>,

    /// Config file to use instead of ~/.config/markdown-reflow/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report files that would change and exit with status 1 if any would
    #[arg(long, conflicts_with = "write")]
    check: bool,

    /// Rewrite files in place instead of printing them
    #[arg(short, long)]
    write: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Outcome of processing one input.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Unchanged,
    Changed,
    Skipped,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns true if `--check` found files that would change.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let line_length = cli.line_length.unwrap_or(config.line_length);
    log::info!("Reflowing to {line_length} columns");

    if cli.paths.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        let reflowed = reflow_document(&source, line_length)?;
        if cli.check {
            return Ok(reflowed != source);
        }
        std::io::stdout()
            .write_all(reflowed.as_bytes())
            .context("Failed to write stdout")?;
        return Ok(false);
    }

    let mut would_change = false;
    for path in io::collect_markdown_files(&cli.paths)? {
        let outcome = process_file(cli, &config, &path, line_length)
            .with_context(|| format!("Failed to reflow {}", path.display()))?;
        if outcome == Outcome::Changed && cli.check {
            println!("would reflow {}", path.display());
            would_change = true;
        }
    }
    Ok(would_change)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::info!("Config path: {}", path.display());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(loaded.unwrap_or_default())
}

fn process_file(cli: &Cli, config: &Config, path: &Path, line_length: usize) -> Result<Outcome> {
    if config.is_excluded(path) {
        log::info!("Skipping excluded file {}", path.display());
        return Ok(Outcome::Skipped);
    }

    let source = io::read_file(path)?;
    let reflowed = reflow_document(&source, line_length)?;
    let outcome = if reflowed == source {
        Outcome::Unchanged
    } else {
        Outcome::Changed
    };

    if cli.check {
        return Ok(outcome);
    }
    if cli.write {
        if outcome == Outcome::Changed {
            io::write_file(path, &reflowed)?;
            log::info!("Reflowed {}", path.display());
        }
    } else {
        std::io::stdout()
            .write_all(reflowed.as_bytes())
            .context("Failed to write stdout")?;
    }
    Ok(outcome)
}
