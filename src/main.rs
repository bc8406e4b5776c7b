//! protodiff command line entry point.
//!
//! Drives the comparison app on a Tokio runtime until both versions settle, then
//! prints the side-by-side view, the version catalog or the symbol list.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use protodiff::app::{Action, CatalogAction, CatalogStatus, CompareAction, CompareApp};
use protodiff::domain::{ArtifactState, HighlightSelection, Version};
use protodiff::infra::app_config::{load_config, load_config_from};
use protodiff::infra::display::TerminalDisplay;

#[derive(Parser, Debug)]
#[command(name = "protodiff")]
#[command(version)]
#[command(about = "Compare generated sources of two protocol versions side by side", long_about = None)]
struct Args {
    /// Baseline version (original pane)
    #[arg(short, long)]
    original: Option<String>,

    /// Reference version (modified pane)
    #[arg(short, long)]
    modified: Option<String>,

    /// Symbol to highlight and jump to, or `none`
    #[arg(short, long)]
    symbol: Option<String>,

    /// Print the known versions and exit
    #[arg(long)]
    list_versions: bool,

    /// Print the symbols of the modified version and exit
    #[arg(long)]
    list_symbols: bool,

    /// Rows shown around the highlighted symbol
    #[arg(long, default_value_t = 12)]
    context: usize,

    /// Width of each pane column
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Give up waiting for generation after this many seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let mut app = CompareApp::new(&config, TerminalDisplay::new());
    if let Some(original) = &args.original {
        app.dispatch(Action::Compare(CompareAction::SelectOriginal(Version::from(
            original.as_str(),
        ))));
    }
    if let Some(modified) = &args.modified {
        app.dispatch(Action::Compare(CompareAction::SelectModified(Version::from(
            modified.as_str(),
        ))));
    }
    if let Some(symbol) = &args.symbol {
        app.dispatch(Action::Compare(CompareAction::SelectHighlight(
            HighlightSelection::from_key(symbol),
        )));
    }
    app.dispatch(Action::Catalog(CatalogAction::LoadRequested));

    let poll_interval = Duration::from_millis(config.poll_interval_ms.max(1));
    let deadline = Instant::now() + Duration::from_secs(args.timeout_secs);
    loop {
        let done = if args.list_versions {
            app.poll_catalog()
        } else {
            app.update();
            app.state.is_settled()
        };
        if done {
            break;
        }
        if Instant::now() >= deadline {
            bail!("timed out after {}s waiting for generation", args.timeout_secs);
        }
        tokio::time::sleep(poll_interval).await;
    }
    if let CatalogStatus::Failed(err) = &app.state.catalog {
        bail!("version catalog unavailable: {err}");
    }

    if args.list_versions {
        for version in app.state.store.versions() {
            println!("{version}");
        }
        return Ok(());
    }

    for version in [&app.state.original, &app.state.modified] {
        if let ArtifactState::Failed(err) = app.state.store.state(version) {
            eprintln!("warning: {err}");
        }
    }

    if args.list_symbols {
        for symbol in app.symbols() {
            println!("{symbol}");
        }
        return Ok(());
    }

    if let Some(err) = &app.state.highlight_error {
        eprintln!("warning: {err}");
    }

    println!("{} -> {}", app.state.original, app.state.modified);
    println!("{}", app.display().render(args.context, args.width));
    Ok(())
}
