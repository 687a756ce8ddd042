//! HTTPS download of source archives.
//!
//! A download is tried once with normal certificate verification and, if that
//! fails for any reason, once more with verification disabled. There is no
//! further retry.

use crate::error::{GazetteerError, Result};
use crate::utils::constants::USER_AGENT;
use tracing::{debug, warn};

/// Source of archive bytes, abstracted so pipelines can run against stubs.
pub trait HttpClient {
    /// Performs a GET request and returns the full response body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    Verified,
    Unverified,
}

/// Run `attempt` with verification on, then once with it off.
///
/// `attempt` reports failures as plain messages; the error returned after the
/// second failure names the URL and both messages.
pub fn get_with_tls_fallback<F>(url: &str, mut attempt: F) -> Result<Vec<u8>>
where
    F: FnMut(TlsMode) -> std::result::Result<Vec<u8>, String>,
{
    match attempt(TlsMode::Verified) {
        Ok(bytes) => Ok(bytes),
        Err(first) => {
            warn!(url, error = %first, "verified download failed, retrying without certificate verification");
            attempt(TlsMode::Unverified).map_err(|second| GazetteerError::Fetch {
                url: url.to_string(),
                message: format!("{} (verified attempt: {})", second, first),
            })
        }
    }
}

/// Blocking reqwest client with the unverified fallback.
pub struct ReqwestClient {
    verified: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            verified: Self::build_client(TlsMode::Verified)?,
        })
    }

    fn build_client(mode: TlsMode) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(mode == TlsMode::Unverified)
            .build()
            .map_err(|e| GazetteerError::Config(format!("Failed to create HTTP client: {}", e)))
    }

    fn download(client: &reqwest::blocking::Client, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = client
            .get(url)
            .send()
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("HTTP {} from {}", response.status(), url));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| format!("Failed to read response: {}", e))
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = get_with_tls_fallback(url, |mode| match mode {
            TlsMode::Verified => Self::download(&self.verified, url),
            TlsMode::Unverified => {
                let insecure = Self::build_client(mode).map_err(|e| e.to_string())?;
                Self::download(&insecure, url)
            }
        })?;

        debug!(url, bytes = bytes.len(), "download complete");
        Ok(bytes)
    }
}
