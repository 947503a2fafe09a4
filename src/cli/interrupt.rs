//! Ctrl+C → flag. The driver polls it between frames and shuts down itself,
//! so the terminal is always restored before exit.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::error::ClockError;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the handler. A second Ctrl+C while shutting down exits at once.
pub fn init() -> Result<(), ClockError> {
    ctrlc::set_handler(move || {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    })
    .map_err(|e| ClockError::Interrupt(e.to_string()))
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
