//! Manifest fetching from the remote repository or the bundled copy

use super::schema::Manifest;
use anyhow::{Context, Result};
use url::Url;

/// Repository URL, printed in error messages as the support channel
pub const REPOSITORY_URL: &str = "https://github.com/craftup/create-craftup";

/// Raw-content URL of the published manifest
const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/craftup/create-craftup/master/manifest.json";

/// Environment variable for overriding the manifest URL
pub const MANIFEST_URL_ENV: &str = "CRAFTUP_MANIFEST_URL";

/// Manifest source - either the remote URL or the bundled copy
#[derive(Debug, Clone)]
pub enum ManifestSource {
    Remote(Url),
    Bundled,
}

impl ManifestSource {
    /// Create a remote source, honoring the URL override environment variable
    pub fn remote() -> Result<Self> {
        let url_str = std::env::var(MANIFEST_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_MANIFEST_URL.to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid manifest URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }
}

/// Manifest client - handles retrieving the manifest from its source
pub struct ManifestClient {
    source: ManifestSource,
    client: reqwest::Client,
}

impl ManifestClient {
    /// Create a new client with a custom user agent
    pub fn new(source: ManifestSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from the `--local` flag
    pub fn from_flags(local: bool) -> Result<Self> {
        let source = if local {
            ManifestSource::Bundled
        } else {
            ManifestSource::remote()?
        };
        Ok(Self::new(source, "create-craftup"))
    }

    /// Fetch and validate the manifest
    pub async fn fetch(&self) -> Result<Manifest> {
        match &self.source {
            ManifestSource::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch the manifest from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch the manifest from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                let content = response.text().await?;
                Manifest::parse(&content)
            }
            ManifestSource::Bundled => Manifest::bundled(),
        }
    }

    /// Get the manifest source
    pub fn source(&self) -> &ManifestSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_source_skips_the_network() {
        let client = ManifestClient::from_flags(true).unwrap();
        assert!(matches!(client.source(), ManifestSource::Bundled));

        let manifest = client.fetch().await.unwrap();
        assert_eq!(manifest.default_engine().unwrap().id, "webpack");
    }

    #[test]
    fn test_remote_source_uses_the_published_url() {
        let source = ManifestSource::remote().unwrap();
        match source {
            ManifestSource::Remote(url) => {
                assert_eq!(url.as_str(), DEFAULT_MANIFEST_URL);
            }
            ManifestSource::Bundled => panic!("expected a remote source"),
        }
    }
}
