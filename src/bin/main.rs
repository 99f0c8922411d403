use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use morse_core::cli::{Cli, Commands};
use morse_core::persistence::save_table;
use morse_core::prompt::{prompt_choice, prompt_text};
use morse_core::TranslationEngine;
use std::io::{self, stdin, stdout};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_engine(alphabet: Option<&PathBuf>) -> Result<TranslationEngine> {
    match alphabet {
        Some(path) => TranslationEngine::from_file(path)
            .with_context(|| format!("failed to load alphabet from {}", path.display())),
        None => TranslationEngine::builtin().context("built-in alphabet is invalid"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = load_engine(cli.alphabet.as_ref())?;

    if let Some(Commands::ExportAlphabet { path }) = &cli.command {
        save_table(engine.table(), path)
            .with_context(|| format!("failed to write alphabet to {}", path.display()))?;
        println!("Alphabet written to '{}'", path.display());
        return Ok(());
    }

    let (direction, text) = match cli.one_shot() {
        Some(one_shot) => one_shot,
        None => {
            let mut input = stdin().lock();
            let mut output = stdout().lock();
            let direction = prompt_choice(&mut input, &mut output)?;
            let text = prompt_text(&mut input, &mut output)?;
            (direction, text)
        }
    };

    info!(?direction, "converting input");
    println!("{}", engine.convert(&text, direction));
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
