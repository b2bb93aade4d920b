use anyhow::Result;
use pr_reaction_sync::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    pr_reaction_sync::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;

    pr_reaction_sync::sync::run(&config).await?;

    Ok(())
}
