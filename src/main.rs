use std::process::ExitCode;

fn main() -> ExitCode {
    match jst_clock::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jst-clock: {e}");
            ExitCode::FAILURE
        }
    }
}
