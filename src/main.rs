mod assemble;
mod cli;
mod config;
mod error;
mod layout;
mod logging;
mod quran;
mod render;

use clap::Parser;
use cli::Cli;
use colored::*;
use config::Config;
use error::{QuranVidError, QuranVidResult};
use std::io::Write;

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e, None),
    };
    if let Some(background) = cli.background {
        config.assets.background = background;
    }
    if let Err(e) = logging::init(&config.output.log_file) {
        fail(&e, None);
    }

    if let Err(e) = run(cli.page, cli.output, &config) {
        tracing::error!("{e}");
        fail(&e, Some(&config.output.log_file));
    }
}

fn fail(e: &QuranVidError, log_file: Option<&std::path::Path>) -> ! {
    eprintln!("{} {}", "error:".red().bold(), e);
    if let Some(hint) = e.hint() {
        eprintln!("{} {}", "hint:".yellow().bold(), hint);
    }
    if let Some(log_file) = log_file {
        eprintln!("See {} for details.", log_file.display());
    }
    std::process::exit(1);
}

fn run(
    page: Option<u32>,
    output: Option<std::path::PathBuf>,
    config: &Config,
) -> QuranVidResult<()> {
    let page = match page {
        Some(page) => page,
        None => prompt_page()?,
    };
    let output = output.unwrap_or_else(|| config.output_path_for_page(page));

    eprintln!(
        "{} {}",
        "start:".cyan().bold(),
        chrono::Local::now().format("%H:%M:%S")
    );

    let video = assemble::assemble_page(page, config, &output)?;

    println!("Video created: {}", video.path.display());
    eprintln!(
        "{} {} ({} ayahs, {:.1}s)",
        "done:".green().bold(),
        chrono::Local::now().format("%H:%M:%S"),
        video.verse_count,
        video.duration_secs
    );
    Ok(())
}

/// Interactive fallback when no page argument is given.
fn prompt_page() -> QuranVidResult<u32> {
    print!("Enter the Quran page number: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    match trimmed.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(QuranVidError::InvalidPage(trimmed.to_string())),
    }
}
