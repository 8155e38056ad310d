use dyntest::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse the command line and run the selected command
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
