use clap::Parser;
use log::{error, info};

use glownotes::{App, Cli, Config, InsightClient, NoteStore, Result};

fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config)?;

    let store = if cli.empty || !config.seed_sample_data {
        NoteStore::new()
    } else {
        NoteStore::with_sample_data()
    };

    let insight = InsightClient::new(config)?;
    let mut app = App::new(store, insight, cli.verbose);
    app.run().await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    info!("Session starting up");

    if let Err(e) = run(cli).await {
        error!("Session failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Session shut down");
}
