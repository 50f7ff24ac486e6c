//! Yandex.Disk public API client.

use std::path::Path;

use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{DiskError, Result};
use crate::link::split_nested;
use crate::models::{ApiErrorResponse, DownloadLink, FolderPage, PublicResource, ResourceKind};

/// Base URL for the Yandex.Disk public API.
const API_BASE: &str = "https://cloud-api.yandex.net/v1/disk";

/// Page size for folder listing requests.
const PAGE_SIZE: u64 = 100;

/// A share link resolved to a concrete byte-stream URL.
///
/// `name_hint` is set when the link was resolved through the
/// folder-search fallback and carries the matched entry's name, for use
/// when the direct URL has no `filename` parameter.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    pub href: String,
    pub name_hint: Option<String>,
}

/// Client for the Yandex.Disk public resources API.
pub struct DiskClient {
    http: Client,
    api_base: String,
}

impl Default for DiskClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskClient {
    /// Create a client against the production API.
    pub fn new() -> Self {
        Self::with_api_base(API_BASE)
    }

    /// Create a client against a custom API base URL (used by tests).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Resolve a public link to a direct download URL.
    ///
    /// Tries direct resolution first; a 404 means the link may point at
    /// a file inside a shared folder, so the parent folder's listing is
    /// searched for the trailing segment of the link.
    pub async fn resolve(&self, link: &str) -> Result<ResolvedFile> {
        match self.direct_download_link(link).await {
            Ok(href) => Ok(ResolvedFile {
                href,
                name_hint: None,
            }),
            Err(DiskError::ApiError { status: 404, .. }) => self.search_parent_folder(link).await,
            Err(e) => Err(e),
        }
    }

    /// Request the download endpoint for a public key.
    async fn direct_download_link(&self, link: &str) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/public/resources/download", self.api_base))
            .query(&[("public_key", link)])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: DownloadLink = response.json().await?;
        body.href.ok_or_else(|| DiskError::UrlNotFound(link.to_string()))
    }

    /// Folder-search fallback: page through the parent folder's listing
    /// until an entry named like the link's last segment turns up.
    async fn search_parent_folder(&self, link: &str) -> Result<ResolvedFile> {
        let nested = split_nested(link).ok_or_else(|| DiskError::FileNotFound(link.to_string()))?;

        let mut offset = 0;
        loop {
            let page = self.list_folder_page(nested.parent, offset).await?;

            if let Some(item) = page
                .items
                .iter()
                .find(|item| item.kind == ResourceKind::File && item.name == nested.leaf)
            {
                let href = item
                    .file
                    .clone()
                    .ok_or_else(|| DiskError::UrlNotFound(link.to_string()))?;
                return Ok(ResolvedFile {
                    href,
                    name_hint: Some(item.name.clone()),
                });
            }

            offset += page.items.len() as u64;
            if page.items.is_empty() || offset >= page.total {
                return Err(DiskError::FileNotFound(link.to_string()));
            }
        }
    }

    /// Fetch one page of a public folder's contents.
    pub async fn list_folder_page(&self, public_key: &str, offset: u64) -> Result<FolderPage> {
        let response = self
            .http
            .get(format!("{}/public/resources", self.api_base))
            .query(&[
                ("public_key", public_key),
                ("offset", &offset.to_string()),
                ("limit", &PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let resource: PublicResource = response.json().await?;

        // A direct-file resource has no `_embedded`; treat it as an
        // empty listing so the search terminates with "file not found".
        Ok(resource.embedded.unwrap_or(FolderPage {
            items: Vec::new(),
            total: 0,
            offset,
            limit: PAGE_SIZE,
        }))
    }

    /// Start downloading a resolved URL.
    pub async fn fetch(&self, href: &str) -> Result<DownloadStream> {
        let response = self.http.get(href).send().await?;
        let response = check_status(response).await?;
        Ok(DownloadStream { response })
    }
}

/// Turn a non-success response into a `DiskError::ApiError`, keeping the
/// API's own message when the body parses as one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
        let message = api_error
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or(api_error.message);
        return Err(DiskError::ApiError {
            status: status.as_u16(),
            message,
        });
    }
    Err(DiskError::ApiError {
        status: status.as_u16(),
        message: error_body,
    })
}

/// An in-flight download, streamed to disk chunk by chunk.
pub struct DownloadStream {
    response: Response,
}

impl DownloadStream {
    /// Total size from the `Content-Length` header, when declared.
    pub fn total_size(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// HTTP status of the download response.
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Write the body to `destination`, invoking `on_chunk` with each
    /// chunk's length. Returns the number of bytes written.
    pub async fn write_to<P, F>(self, destination: P, mut on_chunk: F) -> Result<u64>
    where
        P: AsRef<Path>,
        F: FnMut(u64),
    {
        let mut file = File::create(destination.as_ref()).await?;
        let mut stream = self.response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            on_chunk(chunk.len() as u64);
        }

        file.flush().await?;
        Ok(written)
    }
}
