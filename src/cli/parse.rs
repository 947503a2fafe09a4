use clap::{Args, Parser, Subcommand};

use crate::core::constants::{FRAME_INTERVAL_MS, GRAPH_HEIGHT, HISTORY_CAPACITY, JST_OFFSET_HOURS};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "jst-clock",
    about = "Analog terminal clock for Japan Standard Time, with optional CPU/memory graphs"
)]
pub struct Cli {
    /// Defaults to `clock`
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Wide analog clock
    Clock(ViewArgs),
    /// Compact clock beside scrolling CPU and memory graphs
    Monitor(MonitorArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Flags shared by `clock` and `monitor`.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Hours ahead of UTC (may be fractional or negative)
    #[arg(long, default_value_t = JST_OFFSET_HOURS, allow_negative_numbers = true)]
    pub offset: f64,

    /// Zone name shown in the header
    #[arg(long, default_value = "JST")]
    pub label: String,

    /// Dial color (name or `#RRGGBB`)
    #[arg(long, default_value = "magenta")]
    pub color: String,

    /// Milliseconds between frames
    #[arg(long, default_value_t = FRAME_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<usize>,

    /// Show the banner above the date
    #[arg(long)]
    pub header: bool,

    /// Log per-frame timing to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            offset: JST_OFFSET_HOURS,
            label: "JST".to_owned(),
            color: "magenta".to_owned(),
            interval_ms: FRAME_INTERVAL_MS,
            frames: None,
            header: false,
            debug: false,
        }
    }
}

/// `jst-clock monitor …`
#[derive(Args, Debug, Clone)]
pub struct MonitorArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Samples kept per graph (also the plot width)
    #[arg(long, default_value_t = HISTORY_CAPACITY)]
    pub history: usize,

    /// Plot rows per graph
    #[arg(long, default_value_t = GRAPH_HEIGHT)]
    pub graph_height: usize,
}
