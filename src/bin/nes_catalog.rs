//! Command-line front end: fetch (or reuse) the listing page, extract the
//! catalog, print it and write the reports.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nes_catalog::fetch::{read_cached, PageFetcher, DEFAULT_URL};
use nes_catalog::render::{filter_by_name, render_console, sorted_for_display, write_html_report, write_json};
use nes_catalog::roms::RomLibrary;
use nes_catalog::{extract_games_with_options, Options, RegionMarker};

const REPORT_HEADING: &str = "Nintendo Entertainment System Games";

#[derive(Parser)]
#[command(name = "nes-catalog", version, about = "NES games collection toolkit")]
struct Cli {
    /// Filter games by title substring (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Listing page to download when no cached copy exists
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Cached copy of the listing page
    #[arg(long, default_value = "assets/nes_games_list_full.html")]
    cache: PathBuf,

    /// Read markup from this file instead of the cache/network
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Lowest two-digit year to keep
    #[arg(long, default_value_t = 85)]
    min_year: u8,

    /// Highest two-digit year to keep
    #[arg(long, default_value_t = 95)]
    max_year: u8,

    /// Region marker as MARKER=LABEL; repeat for several regions
    #[arg(long = "region", value_name = "MARKER=LABEL")]
    regions: Vec<RegionMarker>,

    /// Where to write the HTML report
    #[arg(long, default_value = "assets/nes_games_table.html")]
    html_out: PathBuf,

    /// Skip the HTML report
    #[arg(long)]
    no_html: bool,

    /// Also export the catalog as JSON
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Match titles against ROM files in this directory
    #[arg(long)]
    roms_dir: Option<PathBuf>,

    /// Rename matched ROM files (default only reports proposed names)
    #[arg(long, requires = "roms_dir")]
    rename: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let options = Options::default().with_year_range(self.min_year, self.max_year);
        if self.regions.is_empty() {
            options
        } else {
            options.with_regions(self.regions.clone())
        }
    }

    fn load_page(&self) -> Result<String> {
        if let Some(input) = &self.input {
            return read_cached(input).with_context(|| format!("Failed to read {}", input.display()));
        }
        let fetcher = PageFetcher::new().context("Failed to build HTTP client")?;
        fetcher
            .fetch_cached(&self.url, &self.cache)
            .with_context(|| format!("Failed to load {}", self.url))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    let html = cli.load_page()?;
    let games = extract_games_with_options(&html, &options)?;
    info!(games = games.len(), "Extraction complete");

    let shown = filter_by_name(&games, cli.name.as_deref().unwrap_or_default());

    let mut title = format!("{REPORT_HEADING} - {} games", games.len());
    if let Some(name) = &cli.name {
        title.push_str(&format!(" (filtered by: '{name}')"));
    }
    println!("{title}");
    println!("{}", "=".repeat(90));

    match &cli.name {
        Some(name) if shown.is_empty() && !games.is_empty() => {
            println!("No games found matching '{name}'");
        }
        _ => render_console(&shown, &mut io::stdout().lock())?,
    }

    if !cli.no_html {
        write_html_report(&shown, REPORT_HEADING, &cli.html_out)
            .with_context(|| format!("Failed to write {}", cli.html_out.display()))?;
        println!("\nHTML table saved to: {}", cli.html_out.display());
    }

    if let Some(path) = &cli.json_out {
        write_json(&shown, path).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if let Some(dir) = &cli.roms_dir {
        let mut library =
            RomLibrary::scan(dir).with_context(|| format!("Failed to read ROM directory {}", dir.display()))?;
        let ordered = sorted_for_display(shown.iter().copied());
        let plans = library.match_and_rename(&ordered, !cli.rename);

        println!("\nMatched {} of {} games in {}", plans.len(), shown.len(), dir.display());
        for plan in &plans {
            let verb = if plan.applied { "Renamed" } else { "Would rename" };
            println!("{verb}: {} -> {}", plan.from, plan.to);
        }
    }

    Ok(())
}
