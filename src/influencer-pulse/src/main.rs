//! Influencer Pulse — influencer-marketing campaign reporting.
//!
//! `generate` fabricates the four demo CSV tables; `report` loads them,
//! applies the date/brand/category filters, and renders the dashboard
//! as text or JSON.

mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pulse_core::types::{Brand, Category, Dataset};
use pulse_core::AppConfig;
use pulse_datagen::{write_tables, DataGenerator};
use pulse_etl::DatasetCache;
use pulse_reporting::{build_report, FilterParameters};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "influencer-pulse")]
#[command(about = "Influencer-marketing campaign reporting")]
#[command(version)]
struct Cli {
    /// Data directory holding the CSV tables (overrides config)
    #[arg(long, env = "INFLUENCER_PULSE__DATA_DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the four synthetic CSV tables
    Generate {
        /// Number of influencers to fabricate (overrides config)
        #[arg(long)]
        influencers: Option<usize>,

        /// RNG seed for a reproducible dataset (overrides config)
        #[arg(long, env = "INFLUENCER_PULSE__GENERATOR__SEED")]
        seed: Option<u64>,
    },
    /// Load the tables and render the filtered dashboard report
    Report {
        /// First day of the range (YYYY-MM-DD; defaults to the earliest fact)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day of the range, inclusive (defaults to the latest fact)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Brands to include (comma separated; defaults to all)
        #[arg(long, value_delimiter = ',')]
        brands: Option<Vec<Brand>>,

        /// Influencer categories to include (comma separated; defaults to all)
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<Category>>,

        /// Emit the full report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "influencer_pulse=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Command::Generate { influencers, seed } => generate(&config, influencers, seed),
        Command::Report {
            from,
            to,
            brands,
            categories,
            json,
        } => report(&config, from, to, brands, categories, json),
    }
}

fn generate(config: &AppConfig, influencers: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut generator_config = config.generator.clone();
    if let Some(count) = influencers {
        generator_config.num_influencers = count;
    }
    if let Some(seed) = seed {
        generator_config.seed = Some(seed);
    }

    info!(
        influencers = generator_config.num_influencers,
        window_days = generator_config.window_days,
        "Generating synthetic tables"
    );
    let tables = DataGenerator::new(generator_config).generate();
    let counts = write_tables(Path::new(&config.data_dir), &tables)?;

    println!(
        "Wrote {} influencers, {} posts, {} tracking records, {} payouts to '{}'",
        counts.influencers, counts.posts, counts.tracking, counts.payouts, config.data_dir
    );
    Ok(())
}

fn report(
    config: &AppConfig,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    brands: Option<Vec<Brand>>,
    categories: Option<Vec<Category>>,
    json: bool,
) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dataset = cache.load(Path::new(&config.data_dir))?;

    let (first_day, last_day) = fact_date_bounds(&dataset)
        .unwrap_or_else(|| (chrono::Utc::now().date_naive(), chrono::Utc::now().date_naive()));
    let mut params = FilterParameters::all_selections(
        from.unwrap_or(first_day),
        to.unwrap_or(last_day),
    );
    if let Some(brands) = brands {
        params.brands = brands.into_iter().collect();
    }
    if let Some(categories) = categories {
        params.categories = categories.into_iter().collect();
    }

    let view = pulse_reporting::apply(&dataset, &params);
    let report = build_report(&view);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report, &params));
    }
    Ok(())
}

/// Earliest and latest fact dates, for the default report range.
fn fact_date_bounds(dataset: &Dataset) -> Option<(NaiveDate, NaiveDate)> {
    let first = dataset.facts.iter().map(|f| f.date.date()).min()?;
    let last = dataset.facts.iter().map(|f| f.date.date()).max()?;
    Some((first, last))
}
