use anyhow::Result;
use clap::Parser;
use reefgen_lib::{App, AppConfig, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Fixed seed text (disables random seeding)
    #[arg(short, long)]
    seed: Option<String>,

    #[arg(long)]
    width: Option<u16>,

    #[arg(long)]
    height: Option<u16>,

    /// Number of artefacts to scatter
    #[arg(long)]
    artefacts: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Extra regenerations after the first reef
    #[arg(short, long, default_value_t = 0)]
    regenerations: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "reefgen=info,reefgen_lib=info,reefgen_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load(&args.config)?;

    if let Some(seed) = args.seed {
        config.generation.seed = seed;
        config.generation.use_random_seed = false;
    }
    if let Some(width) = args.width {
        config.generation.width = width;
    }
    if let Some(height) = args.height {
        config.generation.height = height;
    }
    if let Some(artefacts) = args.artefacts {
        config.generation.artefact_count = artefacts;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    tracing::info!("config fingerprint {}", config.fingerprint());
    let mut app = App::new(config)?;
    let reports = app.run(args.regenerations)?;

    if let Some(last) = reports.last() {
        print!("{}", app.render(last)?);
    }
    Ok(())
}
