use anyhow::Context;
use clap::Parser;
use garagefront::config::Config;
use garagefront::logging::init_tracing;
use garagefront::site::{compose, Page};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "garagefront", version, about = "Garage Repair of Coral Springs storefront")]
struct Args {
    /// Path to config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the section composition of PAGE as JSON and exit
    #[arg(long, value_name = "PAGE", value_enum)]
    sections: Option<Page>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(page) = args.sections {
        let json = serde_json::to_string(compose(page))
            .context("Failed to serialize page composition")?;
        println!("{json}");
        return Ok(());
    }

    let config_path = args.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let log_path = args.log_file.unwrap_or_else(|| config.log_path());
    init_tracing(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "Configuration loaded");

    garagefront::ui::runtime::run(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use garagefront::site::Page;

    #[test]
    fn parses_sections_flag() {
        let args = Args::parse_from(["garagefront", "--sections", "about"]);
        assert_eq!(args.sections, Some(Page::About));
        assert!(args.config.is_none());
    }

    #[test]
    fn rejects_unknown_page() {
        assert!(Args::try_parse_from(["garagefront", "--sections", "blog"]).is_err());
    }
}
