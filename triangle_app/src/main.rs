//! Hello triangle: window and Vulkan instance bootstrap
//!
//! Opens an 800x600 window, creates a Vulkan instance and waits for the
//! window to be closed. Any setup failure is printed to stderr and the
//! process exits with a failure code.

use std::io::Write;
use std::process::ExitCode;
use triangle_engine::core::config::AppConfig;
use triangle_engine::foundation::logging;
use triangle_engine::AppResult;

fn main() -> ExitCode {
    logging::init();

    let result = triangle_engine::run(&AppConfig::default());
    report(result, &mut std::io::stderr().lock())
}

/// Map the outcome of a run to an exit code, writing any error to `err`
fn report<W: Write>(result: AppResult<()>, err: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Setup failed: {:?}", e);
            // Nothing left to report to if stderr itself is gone
            let _ = writeln!(err, "{}", e);
            ExitCode::FAILURE
        }
    }
}
