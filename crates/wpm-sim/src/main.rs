//! wpm-sim: render the WPM widget to PNG on the desktop.
//!
//! Run with:  `RUST_LOG=debug wpm-sim render --samples 10,20,30`

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wpm_sim::{load_config, parse_samples, parse_sequence, render_to_file, replay, Widget};

#[derive(Parser)]
#[command(name = "wpm-sim")]
#[command(about = "Render the WPM status widget to PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON render config; defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Screenshot upscaling factor
    #[arg(long, global = true, default_value_t = 2)]
    scale: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single frame
    Render {
        /// Comma-separated history, oldest first (at most 10 values)
        #[arg(long, default_value = "")]
        samples: String,
        /// Widget to draw
        #[arg(long, value_enum, default_value_t = Widget::Wpm)]
        widget: Widget,
        /// Output PNG path
        #[arg(short, long, default_value = "wpm.png")]
        out: PathBuf,
    },
    /// Feed a WPM sequence through the history, one PNG per tick
    Replay {
        /// Comma-separated WPM sequence
        #[arg(long)]
        sequence: String,
        /// Widget to draw
        #[arg(long, value_enum, default_value_t = Widget::Wpm)]
        widget: Widget,
        /// Milliseconds between samples
        #[arg(long, default_value_t = 100)]
        tick_ms: u64,
        /// Output directory
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            samples,
            widget,
            out,
        } => render_to_file(widget, &parse_samples(&samples)?, &config, &out, cli.scale),
        Commands::Replay {
            sequence,
            widget,
            tick_ms,
            out_dir,
        } => {
            let written = replay(
                widget,
                &parse_sequence(&sequence)?,
                &config,
                &out_dir,
                tick_ms,
                cli.scale,
            )?;
            tracing::info!(frames = written.len(), dir = %out_dir.display(), "replay done");
            Ok(())
        }
    }
}
