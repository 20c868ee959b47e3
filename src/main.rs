mod core;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Single-page terminal portfolio")]
struct Args {
    /// Section to open with (hero, about, skills, experience, projects,
    /// education, contact)
    #[arg(short, long)]
    section: Option<String>,

    /// Color theme ("dark" or "light")
    #[arg(short, long)]
    theme: Option<String>,

    /// Portfolio TOML file to render instead of the built-in profile
    #[arg(short, long)]
    portfolio: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match crate::core::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("folio: {e}");
            std::process::exit(1);
        }
    };
    let resolved = crate::core::config::resolve(
        &config,
        args.section.as_deref(),
        args.theme.as_deref(),
        args.portfolio.as_deref(),
    );

    log::info!(
        "Folio starting at section {:?}, theme {:?}",
        resolved.start_section,
        resolved.theme
    );

    tui::run(resolved)
}
