mod handlers;
mod interrupt;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ClockError;

pub fn run() -> Result<(), ClockError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        None => handlers::clock(&parse::ViewArgs::default()),
        Some(parse::Command::Clock(a)) => handlers::clock(&a),
        Some(parse::Command::Monitor(a)) => handlers::monitor(&a),
        Some(parse::Command::Colors) => {
            handlers::colors();
            Ok(())
        }
        Some(parse::Command::Examples) => {
            handlers::examples();
            Ok(())
        }
    }
}
