use adaptive_layouts::{AppConfig, Assets, adaptive_app};
use anyhow::Context;
use floem::Application;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::bundled().context("bundled configuration is invalid")?;
    let assets = Assets::bundled().context("failed to resolve bundled assets")?;
    tracing::info!(
        small_max = config.breakpoints.small_max,
        medium_max = config.breakpoints.medium_max,
        orientation = ?config.orientation,
        "starting"
    );

    let window_config = config.window_config();
    Application::new()
        .window(move |_| adaptive_app(config, assets), Some(window_config))
        .run();
    Ok(())
}
