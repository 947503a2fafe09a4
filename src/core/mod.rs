//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod reading;
pub mod sampler;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{DialSpec, GraphSpec, Layout, LayoutBuilder, TickStyle, Variant};
pub use error::{ClockError, ConfigError};
pub use history::SampleHistory;
pub use reading::{ClockReading, LocalTime, TimeSource};
pub use sampler::{LoadSample, LoadSampler, Metric};
