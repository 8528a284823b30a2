use tracing::error;

use glassbrief::Config;

#[tokio::main]
async fn main() {
    // Load configuration. A config path given on the command line must
    // exist; the default path falls back to built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => match Config::load("config.toml") {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config.toml: {e}");
                eprintln!("Using default configuration.");
                Config::default()
            }
        },
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = glassbrief::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        glassbrief::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = glassbrief::app::run(&config).await {
        error!("Briefing run failed: {e}");
        std::process::exit(1);
    }
}
