mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use refmerge_core::{LayerFile, LayerKind, LoadReport, MergeSession, Messages, RefCollection};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "refmerge")]
#[command(about = "Merge a load order of reference layers into one record set")]
struct Cli {
    /// Layer files in load order. The first one is the foundational layer.
    #[arg(required = true)]
    layers: Vec<PathBuf>,

    /// Configuration file (defaults to the platform config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Include tombstoned records in text output.
    #[arg(long)]
    show_deleted: bool,

    /// Fail when any diagnostic was reported.
    #[arg(long)]
    strict: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "refmerge=info,refmerge_core=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    let mut session = MergeSession::with_config(config).context("Invalid merge config")?;
    let mut store = RefCollection::new();
    let mut messages = Messages::new();
    let mut report = LoadReport::default();

    for (position, path) in cli.layers.iter().enumerate() {
        let layer = LayerFile::from_path(path)
            .with_context(|| format!("Failed to read layer {:?}", path))?;
        let kind = LayerKind::at(position);
        info!("Loading {} layer {} ({} references)", kind, layer.name, layer.ref_count());
        report.absorb(
            session
                .load_layer(&mut store, &layer, kind, &mut messages)
                .with_context(|| format!("Failed to merge layer {}", layer.name))?,
        );
    }

    let output = render::MergeOutput {
        report,
        records: store.records(),
        diagnostics: &messages,
    };
    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Text => render::text(&mut stdout, &output, cli.show_deleted)?,
        Format::Json => render::json(&mut stdout, &output)?,
    }

    if cli.strict && !messages.is_empty() {
        bail!("{} diagnostics reported", messages.len());
    }
    Ok(())
}
