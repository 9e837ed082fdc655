//! locale-kit CLI
//!
//! Inspect locale folders and translate keys from the command line.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match locale_kit::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Clap has already printed its own message
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {e}");
            }

            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        },
    }
}
