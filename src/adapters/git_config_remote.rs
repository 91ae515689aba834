use std::path::PathBuf;

use git2::{ErrorCode, Repository, RepositoryOpenFlags};

use crate::domain::AppError;
use crate::ports::GitRemote;

const ORIGIN_URL_KEY: &str = "remote.origin.url";

/// Reads remotes from the git configuration of the repository enclosing `root`.
#[derive(Debug, Clone)]
pub struct GitConfigRemote {
    root: PathBuf,
    ceiling_dirs: Vec<PathBuf>,
}

impl GitConfigRemote {
    pub fn new(root: PathBuf) -> Self {
        Self { root, ceiling_dirs: Vec::new() }
    }

    /// Stop repository discovery before entering `dir`.
    pub fn with_ceiling(mut self, dir: PathBuf) -> Self {
        self.ceiling_dirs.push(dir);
        self
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open_ext(&self.root, RepositoryOpenFlags::empty(), &self.ceiling_dirs)
            .map_err(|e| AppError::GitConfigUnavailable(e.message().to_string()))
    }
}

impl GitRemote for GitConfigRemote {
    fn origin_url(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let config =
            repo.config().map_err(|e| AppError::GitConfigUnavailable(e.message().to_string()))?;

        match config.get_string(ORIGIN_URL_KEY) {
            Ok(url) if !url.trim().is_empty() => Ok(url),
            Ok(_) => Err(AppError::OriginRemoteMissing),
            Err(e) if e.code() == ErrorCode::NotFound => Err(AppError::OriginRemoteMissing),
            Err(e) => Err(AppError::GitConfigUnavailable(e.message().to_string())),
        }
    }
}
