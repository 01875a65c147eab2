//! Timely: a menu bar stopwatch for macOS.

use tracing_subscriber::EnvFilter;

fn main() {
    // Allow override via RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timely=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    timely::events::init_event_bus();

    #[cfg(target_os = "macos")]
    if let Err(err) = timely::macos_main::run() {
        tracing::error!(error = %err, "failed to start");
        std::process::exit(1);
    }

    #[cfg(not(target_os = "macos"))]
    {
        eprintln!("timely requires macOS (NSStatusBar).");
        std::process::exit(1);
    }
}
