//! tikwm-backed content resolver.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::fs::partial_path;
use crate::media::{media_item_from_locator, MediaItem};
use crate::post::{PostKind, PostReference};
use crate::resolver::types::{ApiResponse, PostData};
use crate::resolver::ContentResolver;

/// Resolver client for the tikwm API.
pub struct TikwmResolver {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl TikwmResolver {
    /// Create a new resolver from configuration.
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Resolve(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Url::parse(&config.endpoint)?,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Build the lookup URL for a post.
    fn lookup_url(&self, post_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("url", post_url)
            .append_pair("hd", "1");
        url
    }

    /// Fetch a file, failing on non-success statuses.
    async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Transfer(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }

    /// Stream a response body into `path`.
    async fn write_body(response: Response, path: &Path) -> Result<u64> {
        let mut file = File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Transfer(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}

#[async_trait]
impl ContentResolver for TikwmResolver {
    async fn resolve(&self, post: &PostReference) -> Result<Vec<MediaItem>> {
        let url = self.lookup_url(&post.url);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Resolve(format!("HTTP {} for {}", status, post.url)));
        }

        let text = response.text().await?;
        tracing::debug!("Resolver response length: {} bytes", text.len());

        items_from_response(&text, post.kind.unwrap_or(PostKind::Video), &self.endpoint)
    }

    async fn transfer(&self, item: &MediaItem, dest: &Path) -> Result<u64> {
        let response = self.download_file(&item.locator).await?;

        let partial = partial_path(dest);
        match Self::write_body(response, &partial).await {
            Ok(written) => {
                fs::rename(&partial, dest).await?;
                Ok(written)
            }
            Err(e) => {
                let _ = fs::remove_file(&partial).await;
                Err(e)
            }
        }
    }
}

/// Turn a raw API response into media items.
///
/// Slideshow images win over video locators: photo-mode posts also carry a
/// `play` link, which points at the soundtrack.
pub fn items_from_response(text: &str, kind: PostKind, base: &Url) -> Result<Vec<MediaItem>> {
    let response: ApiResponse = serde_json::from_str(text).map_err(|e| {
        Error::Resolve(format!(
            "Failed to parse resolver response: {} - Response: {}",
            e,
            text.chars().take(500).collect::<String>()
        ))
    })?;

    if response.code != 0 {
        return Err(Error::Resolve(if response.msg.is_empty() {
            format!("Resolver returned code {}", response.code)
        } else {
            response.msg
        }));
    }

    if !response.data.is_object() {
        return Ok(Vec::new());
    }
    let data: PostData = serde_json::from_value(response.data)?;

    let locators: Vec<(String, Option<u64>, PostKind)> = if !data.images.is_empty() {
        data.images
            .into_iter()
            .map(|image| (image, None, PostKind::Photo))
            .collect()
    } else {
        [(data.play, data.size), (data.hdplay, data.hd_size)]
            .into_iter()
            .filter_map(|(locator, size)| {
                locator
                    .filter(|l| !l.trim().is_empty())
                    .map(|l| (l, size, kind))
            })
            .collect()
    };

    locators
        .into_iter()
        .enumerate()
        .map(|(i, (locator, size, kind))| {
            let locator = resolve_url(base, &locator)?;
            Ok(media_item_from_locator(i + 1, locator, kind, size))
        })
        .collect()
}

/// Resolve a potentially relative URL against a base URL.
fn resolve_url(base: &Url, path: &str) -> Result<String> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }

    Ok(base.join(path)?.to_string())
}
