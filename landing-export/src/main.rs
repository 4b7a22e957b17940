//! bootcamp-landing-export - write the landing page as one static HTML file.
//!
//! Usage:
//!   bootcamp-landing-export                      # ./index.html
//!   bootcamp-landing-export -o dist/index.html --show-mentors
//!   bootcamp-landing-export -c page.json -o -    # stdout
//!
//! Logs go to stderr so `-o -` output stays clean.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bootcamp_landing::{PageConfig, content, render_page};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "bootcamp-landing-export")]
#[command(about = "Render the Free Ventures bootcamp landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,

    /// JSON page config (show_mentors, stagger_step, reveal_margin_px)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render the mentor carousel regardless of the config file
    #[arg(long)]
    show_mentors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<PageConfig> {
    let mut config = match &args.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("loading page config from {}", path.display()))?,
        None => PageConfig::default(),
    };
    if args.show_mentors {
        config.show_mentors = true;
    }
    debug!(?config, "page config");
    Ok(config)
}

fn write_output(out: &Path, html: &str) -> Result<()> {
    if out == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes()).context("writing page to stdout")?;
        stdout.flush().context("flushing stdout")?;
        info!(bytes = html.len(), "page written to stdout");
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(out, html).with_context(|| format!("writing page to {}", out.display()))?;
    info!(path = %out.display(), bytes = html.len(), "page written");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    info!(
        "bootcamp-landing-export v{} -> {}",
        env!("CARGO_PKG_VERSION"),
        args.out.display()
    );
    let config = load_config(&args)?;
    content::validate().context("page content failed validation")?;

    let html = render_page(&config);
    write_output(&args.out, &html)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[bootcamp-landing-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
