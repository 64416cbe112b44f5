use crate::domain::{ModProvider, ProjectVersion, VersionFile};
use crate::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

const API_BASE: &str = "https://api.modrinth.com/v2/project";
const USER_AGENT: &str = concat!("modrinth-fetcher/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct ModrinthProvider {
    client: Client,
}

impl ModrinthProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }
}

impl Default for ModrinthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct ModrinthVersion {
    #[serde(default)]
    files: Vec<ModrinthFile>,
}

#[derive(Deserialize)]
struct ModrinthFile {
    filename: String,
    url: String,
}

#[async_trait]
impl ModProvider for ModrinthProvider {
    async fn list_versions(&self, project_id: &str) -> Result<Vec<ProjectVersion>, FetchError> {
        let url = format!("{API_BASE}/{project_id}/version");

        let body = self
            .get(&url)
            .await?
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let versions: Vec<ModrinthVersion> =
            serde_json::from_str(&body).map_err(|source| FetchError::Malformed {
                url: url.clone(),
                source,
            })?;

        Ok(versions
            .into_iter()
            .map(|version| ProjectVersion {
                files: version
                    .files
                    .into_iter()
                    .map(|file| VersionFile {
                        filename: file.filename,
                        url: file.url,
                    })
                    .collect(),
            })
            .collect())
    }

    async fn fetch_file(&self, url: &str) -> Result<Bytes, FetchError> {
        self.get(url)
            .await?
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_version_listing() {
        let body = r#"[
            {"id": "v2", "version_number": "1.1", "files": [
                {"filename": "a.jar", "url": "https://cdn/a.jar", "primary": true}
            ]},
            {"id": "v1", "version_number": "1.0", "files": []}
        ]"#;

        let versions: Vec<ModrinthVersion> = serde_json::from_str(body).unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].files[0].filename, "a.jar");
        assert_eq!(versions[0].files[0].url, "https://cdn/a.jar");
        assert!(versions[1].files.is_empty());
    }

    #[test]
    fn test_version_without_files_decodes_as_empty() {
        let versions: Vec<ModrinthVersion> =
            serde_json::from_str(r#"[{"id": "v1"}]"#).unwrap();
        assert!(versions[0].files.is_empty());
    }

    #[test]
    fn test_file_missing_url_is_an_error() {
        let body = r#"[{"files": [{"filename": "a.jar"}]}]"#;
        assert!(serde_json::from_str::<Vec<ModrinthVersion>>(body).is_err());
    }

    #[test]
    fn test_file_missing_filename_is_an_error() {
        let body = r#"[{"files": [{"url": "https://cdn/a.jar"}]}]"#;
        assert!(serde_json::from_str::<Vec<ModrinthVersion>>(body).is_err());
    }
}
