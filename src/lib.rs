//! Public-facing crate root – re-exports.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Layout, LayoutBuilder, Variant},
    error::{ClockError, ConfigError},
    history::SampleHistory,
    reading::{ClockReading, TimeSource},
};

pub use render::{Grid, Hand, Line, Panel, Scene, compose, render_dial, render_graph};

