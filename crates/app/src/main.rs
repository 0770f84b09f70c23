//! `rickview` -- random Rick and Morty character viewer.
//!
//! Shows a random character on launch; press Enter for another one,
//! `q` (or Ctrl-C) to quit.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                           | Description                 |
//! |-------------------------|----------|-----------------------------------|-----------------------------|
//! | `RICKVIEW_BASE_URL`     | no       | `https://rickandmortyapi.com/api` | API root                    |
//! | `RICKVIEW_MIN_ID`       | no       | `1`                               | Lowest id to draw           |
//! | `RICKVIEW_MAX_ID`       | no       | `826`                             | Highest id to draw          |
//! | `RICKVIEW_LOAD_AVATARS` | no       | `true`                            | Download and sketch avatars |
//! | `RUST_LOG`              | no       | `rickview=info,rickview_client=info` | Log filter               |

use std::sync::Arc;

use anyhow::Context;
use rickview::config::AppConfig;
use rickview::screen::Screen;
use rickview::session;
use rickview::terminal::TerminalView;
use rickview_client::{AvatarLoader, AvatarSource, CharacterApi};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rickview=info,rickview_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        min_id = config.id_range.min(),
        max_id = config.id_range.max(),
        load_avatars = config.load_avatars,
        "Loaded configuration",
    );

    // --- Clients ---
    let http = reqwest::Client::new();
    let api = Arc::new(CharacterApi::with_client(http.clone(), config.base_url.clone()));
    let avatars = config
        .load_avatars
        .then(|| Arc::new(AvatarLoader::new(http)) as Arc<dyn AvatarSource>);

    // --- Screen ---
    let mut screen = Screen::new(api, avatars, TerminalView::stdio(), config.id_range);
    screen.trigger();

    // Resolves on Ctrl-C. If the handler cannot be installed the session
    // only ends through input.
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let reason = session::drive(&mut screen, BufReader::new(tokio::io::stdin()), shutdown)
        .await
        .context("failed to read stdin")?;
    tracing::debug!(?reason, "Session ended");

    screen.destroy();
    Ok(())
}
