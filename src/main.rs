// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use chefbot::app::App;
use chefbot::cli;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // Routes log::info!() etc. to <tmp>/chefbot_debug.log, mirrored to stderr
    // when RUST_LOG is set. The config's log_level is applied once loaded.
    chefbot::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting chefbot {}", chefbot::VERSION);

    // Reply providers run on this runtime's blocking pool
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), runtime_options)?;
    let result = app.run();

    // Don't block forever on a reply still in flight
    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("chefbot: error: {e:#}");
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "chefbot: hint: no display server found, ensure DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland) is set"
                );
            }
        }
    }
    result
}
