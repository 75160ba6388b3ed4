use crate::domain::ports::GistSource;
use crate::utils::error::Result;
use reqwest::Client;
use url::Url;

pub const GITHUB_GIST_BASE: &str = "https://gist.github.com";

/// Fetches the JSON-P body from GitHub's gist endpoint.
#[derive(Debug, Clone)]
pub struct GithubGistSource {
    client: Client,
    base_url: String,
}

impl GithubGistSource {
    pub fn new() -> Self {
        Self::with_base(GITHUB_GIST_BASE)
    }

    /// Points the source at a different base URL (tests run against a local
    /// mock server).
    pub fn with_base(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, gist_id: &str, callback: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        let mut url = base.join(&format!("{gist_id}.json"))?;
        url.query_pairs_mut().append_pair("callback", callback);
        Ok(url)
    }
}

impl Default for GithubGistSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GistSource for GithubGistSource {
    async fn fetch(&self, gist_id: &str, callback: &str) -> Result<String> {
        let url = self.endpoint(gist_id, callback)?;
        tracing::debug!("Making gist request to: {}", url);
        let response = self.client.get(url.as_str()).send().await?;
        tracing::debug!("Gist response status: {}", response.status());
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }
}
