//! jumia-crawler - Polite, sequential product listing scraper
//!
//! Scrapes Jumia category pages and saves name, price and rating to CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jumia_crawler::commands::ScrapeCommand;
use jumia_crawler::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jumia-crawler",
    version,
    about = "Polite, sequential product listing scraper for Jumia",
    long_about = "Fetches Jumia category pages as a self-identified bot, extracts product \
                  name, price and rating, and saves them to CSV."
)]
struct Cli {
    /// Site root URL
    #[arg(long, global = true)]
    site: Option<String>,

    /// Category path segment (e.g. smartphones)
    #[arg(long, global = true)]
    category: Option<String>,

    /// Delay after each page in milliseconds
    #[arg(long, global = true)]
    delay: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Bot User-Agent string
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Contact address sent in the From header
    #[arg(long, global = true)]
    contact: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the first category page and preview the results
    #[command(alias = "p")]
    Page {
        /// Output CSV file
        #[arg(short, long, default_value = "jumia_products.csv")]
        output: PathBuf,

        /// Number of records to print
        #[arg(long, default_value = "5")]
        preview: usize,
    },

    /// Scrape several category pages
    #[command(alias = "m")]
    Pages {
        /// Number of pages (defaults to the configured value)
        #[arg(short = 'n', long)]
        pages: Option<u32>,

        /// Output CSV file
        #[arg(short, long, default_value = "jumia_all_products.csv")]
        output: PathBuf,

        /// Don't sleep after the last page
        #[arg(long)]
        skip_final_delay: bool,
    },

    /// Single page, then multi-page, writing both files
    Run {
        /// Number of pages for the multi-page pass
        #[arg(short = 'n', long)]
        pages: Option<u32>,

        /// Output CSV file for the single-page pass
        #[arg(short, long, default_value = "jumia_products.csv")]
        output: PathBuf,

        /// Output CSV file for the multi-page pass
        #[arg(long, default_value = "jumia_all_products.csv")]
        all_output: PathBuf,

        /// Number of records to print
        #[arg(long, default_value = "5")]
        preview: usize,

        /// Don't sleep after the last page
        #[arg(long)]
        skip_final_delay: bool,
    },
}

/// Log filter: DEBUG when verbose, otherwise `RUST_LOG` with an INFO fallback.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    }
}

/// Applies global CLI flags on top of the file and environment layers.
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(site) = &cli.site {
        config.site = site.clone();
    }
    if let Some(category) = &cli.category {
        config.category = category.clone();
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(agent) = &cli.user_agent {
        config.identity.user_agent = agent.clone();
    }
    if let Some(contact) = &cli.contact {
        config.identity.contact = contact.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(log_filter(cli.verbose)).with_target(false).init();

    // Load config with layered overrides; env is read only by `with_env`
    let mut config = Config::load(cli.config.as_deref())?.with_env();
    apply_overrides(&cli, &mut config);

    match cli.command {
        Commands::Page { output, preview } => {
            let cmd = ScrapeCommand::new(config);
            let client = cmd.client()?;

            let out = cmd.execute_page(&client, &output, preview).await?;
            println!("{}", out);
        }

        Commands::Pages { pages, output, skip_final_delay } => {
            let pages = pages.unwrap_or(config.pages);
            config.skip_final_delay |= skip_final_delay;

            let cmd = ScrapeCommand::new(config);
            let client = cmd.client()?;

            let count = cmd.execute_pages(&client, pages, &output).await?;
            info!("Done: {} products from {} pages", count, pages);
        }

        Commands::Run { pages, output, all_output, preview, skip_final_delay } => {
            let pages = pages.unwrap_or(config.pages);
            config.skip_final_delay |= skip_final_delay;

            let cmd = ScrapeCommand::new(config);
            let client = cmd.client()?;

            let out = cmd.execute_page(&client, &output, preview).await?;
            println!("{}", out);

            let count = cmd.execute_pages(&client, pages, &all_output).await?;
            info!("Done: {} products from {} pages", count, pages);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_invalid_env_delay_is_ignored() {
        let orig_delay = std::env::var("JUMIA_DELAY").ok();
        let orig_timeout = std::env::var("JUMIA_TIMEOUT").ok();
        std::env::set_var("JUMIA_DELAY", "soon");
        std::env::set_var("JUMIA_TIMEOUT", "-1");

        let cli = Cli::try_parse_from(["jumia-crawler", "page"]).unwrap();
        assert!(cli.delay.is_none());
        assert!(cli.timeout.is_none());

        let mut config = Config::new().with_env();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.delay_ms, 2000);
        assert_eq!(config.timeout_secs, 10);

        match orig_delay {
            Some(v) => std::env::set_var("JUMIA_DELAY", v),
            None => std::env::remove_var("JUMIA_DELAY"),
        }
        match orig_timeout {
            Some(v) => std::env::set_var("JUMIA_TIMEOUT", v),
            None => std::env::remove_var("JUMIA_TIMEOUT"),
        }
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::try_parse_from([
            "jumia-crawler",
            "--delay",
            "250",
            "--category",
            "televisions",
            "--contact",
            "me@example.org",
            "pages",
            "-n",
            "4",
        ])
        .unwrap();

        let mut config = Config::new();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.category, "televisions");
        assert_eq!(config.identity.contact, "me@example.org");
        assert!(matches!(cli.command, Commands::Pages { pages: Some(4), .. }));
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["jumia-crawler", "run"]).unwrap();

        match cli.command {
            Commands::Run { pages, output, all_output, preview, skip_final_delay } => {
                assert!(pages.is_none());
                assert_eq!(output, PathBuf::from("jumia_products.csv"));
                assert_eq!(all_output, PathBuf::from("jumia_all_products.csv"));
                assert_eq!(preview, 5);
                assert!(!skip_final_delay);
            }
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_run_options() {
        let cli = Cli::try_parse_from([
            "jumia-crawler",
            "run",
            "-n",
            "2",
            "-o",
            "first.csv",
            "--all-output",
            "all.csv",
            "--preview",
            "3",
            "--skip-final-delay",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { pages, output, all_output, preview, skip_final_delay } => {
                assert_eq!(pages, Some(2));
                assert_eq!(output, PathBuf::from("first.csv"));
                assert_eq!(all_output, PathBuf::from("all.csv"));
                assert_eq!(preview, 3);
                assert!(skip_final_delay);
            }
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));

        let orig = std::env::var("RUST_LOG").ok();

        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::WARN));

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::INFO));

        if let Some(v) = orig {
            std::env::set_var("RUST_LOG", v);
        }
    }
}
