//! Static manifest loading.
//!
//! Every page starts from one JSON manifest that lives under a content root.
//! The root is either a local directory or an `http(s)://` base URL; both are
//! read with a single request and no retry. Images and downloads go through
//! the same path so a missing file looks the same everywhere.

use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// The two ways a manifest can fail. Pages collapse both into one message.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to load {location}: {reason}")]
    Load { location: String, reason: String },
    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where static content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRoot {
    Directory(PathBuf),
    Remote(String),
}

/// A single resolved file under a [`ContentRoot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Url(String),
}

impl ContentRoot {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ContentRoot::Remote(trimmed.trim_end_matches('/').to_string())
        } else {
            ContentRoot::Directory(PathBuf::from(trimmed))
        }
    }

    /// Join a manifest-relative path onto the root.
    pub fn resolve(&self, relative: &str) -> Location {
        let relative = relative.trim_start_matches("./");
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return Location::Url(relative.to_string());
        }
        match self {
            ContentRoot::Directory(dir) => {
                Location::File(dir.join(relative.trim_start_matches('/')))
            }
            ContentRoot::Remote(base) => {
                Location::Url(format!("{base}/{}", relative.trim_start_matches('/')))
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Url(url) => f.write_str(url),
        }
    }
}

/// Read the raw bytes behind a location.
pub async fn fetch_bytes(location: &Location) -> Result<Vec<u8>, ManifestError> {
    let load_err = |reason: String| ManifestError::Load {
        location: location.to_string(),
        reason,
    };
    match location {
        Location::File(path) => fs::read(path).map_err(|err| load_err(err.to_string())),
        Location::Url(url) => {
            let response = reqwest::get(url)
                .await
                .map_err(|err| load_err(err.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(load_err(format!("HTTP {status}")));
            }
            let body = response
                .bytes()
                .await
                .map_err(|err| load_err(err.to_string()))?;
            Ok(body.to_vec())
        }
    }
}

/// Fetch and decode a JSON manifest.
pub async fn fetch_json<T: DeserializeOwned>(location: &Location) -> Result<T, ManifestError> {
    let bytes = fetch_bytes(location).await.inspect_err(|err| {
        warn!(%location, "Manifest request failed: {err}");
    })?;
    debug!(%location, bytes = bytes.len(), "Fetched manifest");
    parse_json(location, &bytes)
}

pub(crate) fn parse_json<T: DeserializeOwned>(
    location: &Location,
    bytes: &[u8],
) -> Result<T, ManifestError> {
    serde_json::from_slice(bytes).map_err(|source| {
        warn!(%location, "Manifest is not valid JSON: {source}");
        ManifestError::Parse {
            location: location.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "study-deck-manifest-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        iced::futures::executor::block_on(future)
    }

    #[test]
    fn remote_roots_join_with_single_slash() {
        let root = ContentRoot::parse("https://example.org/site/");
        assert_eq!(
            root.resolve("/kc/ec2.json"),
            Location::Url("https://example.org/site/kc/ec2.json".to_string())
        );
    }

    #[test]
    fn directory_roots_join_paths() {
        let root = ContentRoot::parse("site");
        assert_eq!(
            root.resolve("./notes.json"),
            Location::File(PathBuf::from("site/notes.json"))
        );
    }

    #[test]
    fn absolute_urls_bypass_the_root() {
        let root = ContentRoot::parse("site");
        assert_eq!(
            root.resolve("https://cdn.example.org/a.png"),
            Location::Url("https://cdn.example.org/a.png".to_string())
        );
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let dir = scratch_dir("missing");
        let location = Location::File(dir.join("nope.json"));
        let result = block_on(fetch_json::<Probe>(&location));
        assert!(matches!(result, Err(ManifestError::Load { .. })));
    }

    #[test]
    fn invalid_json_is_a_parse_failure() {
        let dir = scratch_dir("invalid");
        let path = dir.join("broken.json");
        fs::write(&path, b"{ value: ").expect("write fixture");
        let result = block_on(fetch_json::<Probe>(&Location::File(path)));
        assert!(matches!(result, Err(ManifestError::Parse { .. })));
    }

    #[test]
    fn valid_json_decodes() {
        let dir = scratch_dir("valid");
        let path = dir.join("ok.json");
        fs::write(&path, br#"{"value": 7}"#).expect("write fixture");
        let probe = block_on(fetch_json::<Probe>(&Location::File(path))).expect("decodes");
        assert_eq!(probe.value, 7);
    }
}
