//! Sketchpad - headless freehand drawing host
//!
//! Replays a recorded UI session (a JSON array of `UiToCanvas` messages)
//! against the painting engine, prints the canvas replies as JSON lines and
//! writes every export to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use sketchpad_ipc::{CanvasToUi, parse_script};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod replay;

use replay::Replayer;

#[derive(Parser)]
#[command(name = "sketchpad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a sketchpad UI session and export the canvas", long_about = None)]
struct Cli {
    /// Recorded session: JSON array of UI messages
    #[arg(short, long)]
    script: PathBuf,

    /// Directory exported PNGs are written to (falls back to $SKETCHPAD_OUT_DIR)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Canvas settings as JSON; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed spray seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// On-screen size of the canvas relative to its logical size
    #[arg(long, default_value = "1.0")]
    display_scale: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ensure!(
        cli.display_scale.is_finite() && cli.display_scale > 0.0,
        "--display-scale must be a positive number, got {}",
        cli.display_scale
    );

    let mut canvas_config = config::load_canvas_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        canvas_config = canvas_config.with_spray_seed(seed);
    }
    let out_dir = config::resolve_out_dir(cli.out_dir);

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let messages = parse_script(&script)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    info!(
        "Replaying {} messages from {} on a {}x{} canvas",
        messages.len(),
        cli.script.display(),
        canvas_config.width,
        canvas_config.height
    );

    let mut replayer = Replayer::new(canvas_config, cli.display_scale)?;
    emit(&replayer.initialized())?;

    for message in messages {
        for reply in replayer.handle(message)? {
            if let CanvasToUi::Error { code, message } = &reply {
                warn!("Canvas reported {}: {}", code, message);
            }
            emit(&reply)?;
        }
        write_exports(&out_dir, &mut replayer)?;
    }

    let painter = replayer.canvas().painter();
    info!(
        "Replay finished with {} at width {}",
        painter.active_tool, painter.stroke_width
    );
    replayer.finish();
    Ok(())
}

fn emit(message: &CanvasToUi) -> Result<()> {
    println!("{}", message.to_json()?);
    Ok(())
}

fn write_exports(out_dir: &Path, replayer: &mut Replayer) -> Result<()> {
    let exports = replayer.take_exports();
    if exports.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    for image in exports {
        let path = out_dir.join(&image.filename);
        fs::write(&path, &image.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}
