pub mod mod_src;

pub use mod_src::ModProvider;

pub mod fetcher;

pub use fetcher::ModFetcher;

/// One row of the static table: the local filename we expect and the
/// Modrinth project that publishes it.
#[derive(Clone, Debug)]
pub struct ModEntry {
    pub filename: String,
    pub project_id: String,
}

impl ModEntry {
    pub fn new(filename: &str, project_id: &str) -> Self {
        Self {
            filename: filename.to_string(),
            project_id: project_id.to_string(),
        }
    }
}

/// One release version of a project, with its files in provider order.
#[derive(Clone, Debug)]
pub struct ProjectVersion {
    pub files: Vec<VersionFile>,
}

#[derive(Clone, Debug)]
pub struct VersionFile {
    pub filename: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already on disk; no network access happened.
    AlreadyPresent,
    Downloaded,
}
