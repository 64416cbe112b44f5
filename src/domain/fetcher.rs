use super::{FetchOutcome, ModEntry, ModProvider};
use crate::error::FetchError;
use std::path::PathBuf;
use std::sync::Arc;

/// Walks the static mod table and makes sure every listed file exists in the
/// download directory, downloading the ones that are missing.
pub struct ModFetcher {
    provider: Arc<dyn ModProvider>,
    download_dir: PathBuf,
}

impl ModFetcher {
    pub fn new(provider: Arc<dyn ModProvider>, download_dir: PathBuf) -> Self {
        Self {
            provider,
            download_dir,
        }
    }

    /// Processes every entry exactly once, in table order. Entry failures are
    /// logged and skipped; they never abort the remaining entries.
    pub async fn run(&self, entries: &[ModEntry]) {
        if let Err(e) = tokio::fs::create_dir_all(&self.download_dir).await {
            log::error!(
                "Failed to create download directory {}: {e}",
                self.download_dir.display()
            );
            return;
        }

        let mut failed = 0usize;
        for entry in entries {
            match self.ensure_local(entry).await {
                Ok(FetchOutcome::AlreadyPresent) => {
                    log::info!("{} already exists, skipping download", entry.filename);
                }
                Ok(FetchOutcome::Downloaded) => {
                    log::info!(
                        "Downloaded {} to {}",
                        entry.filename,
                        self.download_dir.join(&entry.filename).display()
                    );
                }
                Err(e) => {
                    failed += 1;
                    log::warn!(
                        "Failed to download {}: {e}. Check the project id or download manually.",
                        entry.filename
                    );
                }
            }
        }

        if failed > 0 {
            log::warn!("{failed} of {} mods could not be downloaded", entries.len());
        } else {
            log::info!("All {} mods are present", entries.len());
        }
    }

    /// Makes one entry present on disk. Skips the network entirely when the
    /// file already exists; otherwise resolves it through the provider and
    /// writes the payload under the expected filename.
    pub async fn ensure_local(&self, entry: &ModEntry) -> Result<FetchOutcome, FetchError> {
        let destination = self.download_dir.join(&entry.filename);
        if destination.exists() {
            return Ok(FetchOutcome::AlreadyPresent);
        }

        let versions = self.provider.list_versions(&entry.project_id).await?;

        // Provider order decides ties: first version, first file, exact
        // filename equality only.
        let file = versions
            .iter()
            .flat_map(|version| &version.files)
            .find(|file| file.filename == entry.filename)
            .ok_or_else(|| FetchError::NoMatchingFile {
                filename: entry.filename.clone(),
                project_id: entry.project_id.clone(),
            })?;

        log::info!("Downloading {} from {}", entry.filename, file.url);
        let payload = self.provider.fetch_file(&file.url).await?;
        tokio::fs::write(&destination, &payload).await?;

        Ok(FetchOutcome::Downloaded)
    }
}
