use clap::Parser;
use tracing::{error, info};

use dist_version::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging is optional; the report still goes out without it
    let _guard = match dist_version::log::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    info!("Starting dist-version");

    let registry = cli.registry();
    let stdout = std::io::stdout();
    if let Err(e) = dist_version::run(registry, stdout.lock()) {
        error!("Failed to write report: {}", e);
    }

    info!("dist-version finished");
}
