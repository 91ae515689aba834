//! Owner/repository detection from git remote URLs.

use std::fmt;

use url::Url;

/// Owner and repository of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repository: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self { owner: owner.into(), repository: repository.into() }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

/// Parse the owner/repository pair from a remote URL.
///
/// Supports scp-like SSH (`git@host:owner/repo.git`), `ssh://` and `http(s)://` forms
/// for any host.
pub fn parse_remote_url(url: &str) -> Option<RepositoryRef> {
    let url = url.trim();

    if url.contains("://") {
        let parsed = Url::parse(url).ok()?;
        return match parsed.scheme() {
            "https" | "http" | "ssh" | "git" => split_owner_repo(parsed.path()),
            _ => None,
        };
    }

    // scp-like: [user@]host:owner/repo.git
    let (host, path) = url.split_once(':')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }
    split_owner_repo(path)
}

/// Strip any username/password from a remote URL so it can be shown to the user.
///
/// Values that are not `scheme://` URLs are returned unchanged.
pub fn strip_remote_credentials(url: &str) -> String {
    if !url.contains("://") {
        return url.to_string();
    }
    match Url::parse(url.trim()) {
        Ok(mut parsed) if !parsed.username().is_empty() || parsed.password().is_some() => {
            // Fails only for URLs that cannot carry userinfo at all.
            if parsed.set_password(None).is_err() || parsed.set_username("").is_err() {
                return url.to_string();
            }
            parsed.to_string()
        }
        Ok(_) => url.to_string(),
        // Unparseable: drop everything up to the last '@' of the authority.
        Err(_) => match url.split_once("://") {
            Some((scheme, rest)) => {
                let (authority, path) = match rest.find('/') {
                    Some(slash) => rest.split_at(slash),
                    None => (rest, ""),
                };
                let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
                format!("{}://{}{}", scheme, host, path)
            }
            None => url.to_string(),
        },
    }
}

fn split_owner_repo(path: &str) -> Option<RepositoryRef> {
    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.split('/');
    let owner = segments.next().filter(|s| !s.is_empty())?;
    let repository = segments.next().filter(|s| !s.is_empty())?;
    if segments.next().is_some() {
        return None;
    }

    Some(RepositoryRef::new(owner, repository))
}
