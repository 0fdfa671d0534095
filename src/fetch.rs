//! Page download with an on-disk cache.
//!
//! The listing page is fetched once and kept next to the reports; later runs
//! read the cached copy and never touch the network.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::info;
use url::Url;

use crate::encoding::{decode, transcode_to_utf8};
use crate::error::{Error, Result};

/// Default listing page.
pub const DEFAULT_URL: &str = "https://nintendo.fandom.com/wiki/List_of_Nintendo_Entertainment_System_games";

/// Desktop Chrome agent; wiki hosts reject obvious bot agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for listing pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the browser user agent and a 30s timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Download a page and return its bytes together with the
    /// `Content-Type` header.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` for non-http(s) URLs and `Error::Http` for
    /// transport failures or non-success status codes.
    pub fn download(&self, url: &str) -> Result<(Vec<u8>, Option<String>)> {
        let url = parse_page_url(url)?;
        info!(%url, "Downloading");

        let response = self.client.get(url).send()?.error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes()?;

        Ok((bytes.to_vec(), content_type))
    }

    /// Return the page text, reading `cache_path` when it exists and
    /// downloading to it otherwise.
    ///
    /// # Errors
    ///
    /// Propagates download errors and any failure to read or write the cache.
    pub fn fetch_cached(&self, url: &str, cache_path: &Path) -> Result<String> {
        if cache_path.exists() {
            info!(path = %cache_path.display(), "Using existing page");
            return read_cached(cache_path);
        }

        let (bytes, content_type) = self.download(url)?;
        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(cache_path, &bytes)?;
        info!(path = %cache_path.display(), bytes = bytes.len(), "Saved page");

        Ok(decode(&bytes, content_type.as_deref()))
    }
}

/// Read a cached page, detecting its charset from the markup.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read.
pub fn read_cached(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(transcode_to_utf8(&bytes))
}

/// Validate a page URL: it must parse and use http or https.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` describing the problem.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        scheme => Err(Error::InvalidUrl(format!("{raw}: unsupported scheme {scheme}"))),
    }
}
