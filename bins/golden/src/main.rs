use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::Config;
use sunflower::easyeda::{Document, Recorder};
use sunflower::tools::{self, ROW_PITCH};
use sunflower::Layout;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(std::env::current_dir()?)?,
    };
    let output = run(&config, args.command)?;

    if let Some(path) = args.out {
        std::fs::write(&path, output)
            .with_context(|| format!("Failed to write output to {:?}.", path))?;
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}

/// Lays out LED chains on a golden-angle spiral.
///
/// Board commands are computed offline against a copy of the board document
/// and printed as a JSON list of host API calls, ready to be replayed in the
/// editor.
#[derive(Parser)]
#[command(version)]
pub struct Args {
    /// Use exactly this configuration file instead of searching for `sunflower.toml`.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// The path where the output should be saved.
    ///
    /// If unspecified, the output will be written to stdout.
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the seed indices in placement order.
    Strip,
    /// Create the copper ring around the field.
    Ring,
    /// Place the chained devices of a board along the strip.
    Place {
        /// The board document, as exported by the editor.
        #[arg(short, long)]
        doc: PathBuf,
    },
    /// Snap the vertices of tracks to the grid.
    Snap {
        /// The board document, as exported by the editor.
        #[arg(short, long)]
        doc: PathBuf,
        /// Ids of the tracks to snap.
        #[arg(short, long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
        /// Grid pitch in device units; defaults to the configured or canvas snap size.
        #[arg(short, long)]
        grid: Option<f64>,
    },
    /// Print the center of the given objects, in millimetres.
    Center {
        /// The board document, as exported by the editor.
        #[arg(short, long)]
        doc: PathBuf,
        /// Ids of the objects.
        #[arg(short, long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Line up the schematic instances of a part in creation order.
    Arrange {
        /// The schematic document, as exported by the editor.
        #[arg(short, long)]
        doc: PathBuf,
        /// Library uuid of the part.
        #[arg(short, long)]
        uuid: String,
        /// Distance between instances, device units.
        #[arg(short, long, default_value_t = ROW_PITCH)]
        pitch: f64,
    },
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    Document::from_path(path).with_context(|| format!("Failed to read document {:?}.", path))
}

fn run(config: &Config, command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Strip => {
            let layout = Layout::new(config)?;
            serde_json::to_string(layout.strip().as_slice())?
        }
        Command::Ring => {
            let layout = Layout::new(config)?;
            let mut host = Recorder::new(Document::default());
            layout.draw_ring(&mut host)?;
            host.to_json()?
        }
        Command::Place { doc } => {
            let layout = Layout::new(config)?;
            let mut host = Recorder::new(read_document(&doc)?);
            layout
                .place_devices(&mut host)
                .context("Failed to place devices.")?;
            host.to_json()?
        }
        Command::Snap { doc, ids, grid } => {
            let mut host = Recorder::new(read_document(&doc)?).with_selection(ids);
            let changed = tools::snap_tracks(&mut host, grid.or(config.grid.snap_size))?;
            tracing::info!(changed, "snapped tracks");
            host.to_json()?
        }
        Command::Center { doc, ids } => {
            let mut host = Recorder::new(read_document(&doc)?).with_selection(ids);
            let center = tools::selection_center(&mut host)?
                .context("None of the given objects has a position.")?;
            serde_json::to_string(&[center.x, center.y])?
        }
        Command::Arrange { doc, uuid, pitch } => {
            let mut host = Recorder::new(read_document(&doc)?);
            tools::arrange_row(&mut host, &uuid, pitch)?;
            host.to_json()?
        }
    };
    Ok(output)
}
