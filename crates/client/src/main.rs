//! Game client binary.
//!
//! Composition root: loads content, starts the runtime with one observer, and
//! drives that observer from stdin until the run ends.
//!
//! ```bash
//! RPG_SNAPSHOT_FORMAT=json cargo run -p rpg-client
//! ```

mod config;
mod logging;
mod observer;
mod view;

use anyhow::{Context, Result, anyhow};

use rpg_content::ContentFactory;
use rpg_core::GameError;
use rpg_runtime::Runtime;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(content = %config.content_dir.display(), "starting client");

    let world = ContentFactory::new(&config.content_dir)
        .load_world(&config.runtime.game_config)
        .with_context(|| format!("Failed to load content from {}", config.content_dir.display()))?;

    let mut runtime = Runtime::builder()
        .config(config.runtime.clone())
        .world(world)
        .observers(1)
        .build()?;
    let observer = runtime
        .take_observers()
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("runtime started without an observer"))?;

    observer::run(observer, config.snapshot_format).await?;

    let outcome = match runtime.join().await {
        Ok(outcome) => outcome,
        Err(error) => {
            let severity = error.severity();
            tracing::error!(
                code = error.error_code(),
                severity = severity.as_str(),
                %error,
                "simulation stopped"
            );
            return Err(error).context(format!("Simulation stopped ({} error)", severity.as_str()));
        }
    };
    tracing::info!(%outcome, "run finished");
    eprintln!("game over: {outcome}");

    Ok(())
}
