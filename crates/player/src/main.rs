//! Micro-Aventure Player - composition root binary.

use std::sync::Arc;

use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use microaventure_player::config::{PlayerConfig, ShellKind};
use microaventure_player::infrastructure::{create_sleep, CatalogSearch, HttpSearchClient};
use microaventure_player::ports::outbound::AdventureSearchPort;
use microaventure_player::runner::{run, RunnerDeps};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine; variables may come from the shell.
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "microaventure_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Micro-Aventure Player");

    let config = PlayerConfig::from_env().context("invalid player configuration")?;

    let search: Arc<dyn AdventureSearchPort> = match &config.api_url {
        Some(url) => {
            tracing::info!(api_url = %url, "Using adventure search API");
            let client = HttpSearchClient::new(url.as_str(), config.request_timeout)
                .context("failed to build the search client")?;
            Arc::new(client)
        }
        None => {
            tracing::warn!("No search API configured, using the bundled catalog");
            Arc::new(CatalogSearch::default())
        }
    };

    let shell = config.shell.unwrap_or_else(detect_shell);

    run(RunnerDeps {
        search,
        sleep: create_sleep(),
        shell,
    });

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn detect_shell() -> ShellKind {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);

    if width < 768.0 {
        ShellKind::Mobile
    } else {
        ShellKind::Desktop
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_shell() -> ShellKind {
    ShellKind::default()
}
