//! pelt: bridges a channel's live events to a local item-throwing
//! visualizer over its WebSocket control socket.
//!
//! Resident process: loads settings once, connects both clients, and
//! forwards gift/emote/share events as trigger requests until killed.

mod app;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pelt", about = "Live-feed to item-throwing visualizer bridge")]
struct Args {
    /// Path to the settings file (defaults to the platform config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pelt=info".into()),
        )
        .init();

    let args = Args::parse();

    let settings = match pelt_config::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "failed to load settings");
            std::process::exit(1);
        }
    };

    app::run(settings).await;
}
