use std::fs;
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use promptdoc::cli::{Cli, Command};
use promptdoc::config::Config;
use promptdoc::{Category, LoadStatus, PromptExtractor, embedded};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let document = cli.document.unwrap_or(config.document);
    info!("Using prompt document: {}", document.display());

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::List => cmd_list(&document),
        Command::Get { category, fallback } => cmd_get(&document, &category, fallback.as_deref()),
        Command::Show { preview } => cmd_show(&document, preview),
        Command::Init { force } => cmd_init(&document, force),
    }
}

fn cmd_list(document: &Path) -> Result<()> {
    let prompts = PromptExtractor::new(document);

    let status = match prompts.status() {
        LoadStatus::Loaded => "loaded".green(),
        LoadStatus::Missing => "not found, using built-in prompts".yellow(),
        LoadStatus::Failed(e) => format!("unreadable: {}", e).red(),
    };
    println!("Prompt document: {} ({})", document.display().to_string().cyan(), status);

    for (category, available) in prompts.list_available() {
        let mark = if available { "✅" } else { "❌" };
        println!("  {} {}", mark, category);
    }
    Ok(())
}

fn cmd_get(document: &Path, category: &str, fallback: Option<&str>) -> Result<()> {
    let prompts = PromptExtractor::new(document);

    let prompt = match fallback {
        Some(fallback) => prompts.get(category, fallback),
        None => {
            let category: Category = category.parse()?;
            prompts.get_or(category, embedded::get_embedded(category))
        }
    };
    println!("{}", prompt);
    Ok(())
}

fn cmd_show(document: &Path, preview: Option<usize>) -> Result<()> {
    let prompts = PromptExtractor::new(document);

    let mut shown = 0;
    for category in Category::ALL {
        let (Some(prompt), Some(rule)) = (prompts.prompt(category), prompts.rule(category)) else {
            continue;
        };
        shown += 1;
        println!("{} {}", format!("=== {} ===", category).cyan(), format!("({} rule)", rule).dimmed());
        println!("{}", truncate(prompt, preview));
        println!();
    }

    if shown == 0 {
        println!("No customized prompts in {}", document.display());
    }
    Ok(())
}

fn cmd_init(document: &Path, force: bool) -> Result<()> {
    if document.exists() && !force {
        return Err(eyre!(
            "Prompt document already exists: {} (use --force to overwrite)",
            document.display()
        ));
    }

    if let Some(parent) = document.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(document, embedded::render_document())
        .context(format!("Failed to write prompt document {}", document.display()))?;

    println!("{} Wrote starter prompt document: {}", "✓".green(), document.display());
    Ok(())
}

fn truncate(prompt: &str, preview: Option<usize>) -> String {
    match preview {
        Some(limit) if prompt.chars().count() > limit => {
            let head: String = prompt.chars().take(limit).collect();
            format!("{}...", head)
        }
        _ => prompt.to_string(),
    }
}
