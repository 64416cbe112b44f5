mod adapters;
mod domain;
mod error;
mod infra;

use adapters::ModrinthProvider;
use domain::{ModFetcher, ModProvider};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let download_dir = infra::manifest::download_dir()?;
    let provider: Arc<dyn ModProvider> = Arc::new(ModrinthProvider::new());

    let fetcher = ModFetcher::new(provider, download_dir);
    fetcher.run(&infra::manifest::mod_entries()).await;

    // Per-entry failures are reported above; the run itself always succeeds.
    Ok(())
}
