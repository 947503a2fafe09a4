//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{
    color::ColorError,
    constants::{MAX_GRAPH_HEIGHT, MAX_HISTORY_CAPACITY},
};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    InvalidRadius(u16),
    InvalidAspect(f64),
    InvalidTolerance(f64),
    InvalidGraphHeight(usize),
    InvalidCapacity(usize),
    InvalidOffset(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(r) => write!(f, "dial radius {r} must be at least 2"),
            ConfigError::InvalidAspect(a) => {
                write!(f, "aspect correction {a} must be a positive number")
            }
            ConfigError::InvalidTolerance(t) => {
                write!(f, "rim tolerance {t} must lie strictly between 0 and 1")
            }
            ConfigError::InvalidGraphHeight(h) => {
                write!(f, "graph height {h} must be 2..={MAX_GRAPH_HEIGHT} rows")
            }
            ConfigError::InvalidCapacity(c) => {
                write!(f, "history capacity {c} must be 1..={MAX_HISTORY_CAPACITY} samples")
            }
            ConfigError::InvalidOffset(o) => {
                write!(f, "UTC offset {o}h must lie within ±23:59")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ClockError {
    Io(io::Error),
    Color(ColorError),
    Config(ConfigError),
    /// The configured offset is not a whole number of seconds chrono accepts.
    TimeZone { offset_secs: i32 },
    /// The Ctrl+C handler could not be installed.
    Interrupt(String),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Io(e) => write!(f, "{e}"),
            ClockError::Color(e) => write!(f, "{e}"),
            ClockError::Config(e) => write!(f, "{e}"),
            ClockError::TimeZone { offset_secs } => {
                write!(f, "UTC offset of {offset_secs}s is out of range")
            }
            ClockError::Interrupt(why) => write!(f, "cannot install Ctrl+C handler: {why}"),
        }
    }
}
impl Error for ClockError {}

// automatic conversions
impl From<io::Error> for ClockError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ColorError> for ClockError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for ClockError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
