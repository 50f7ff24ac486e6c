//! Data models for Yandex.Disk public API responses.

use serde::Deserialize;

/// Response from the public resources download endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub templated: bool,
}

/// A single entry in a public folder listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Direct download URL, present for files only.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Resource type as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Dir,
}

/// One page of a public folder listing, from `_embedded` in the
/// public resources response.
#[derive(Debug, Deserialize)]
pub struct FolderPage {
    #[serde(default)]
    pub items: Vec<ResourceItem>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Response from the public resources listing endpoint.
#[derive(Debug, Deserialize)]
pub struct PublicResource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(rename = "_embedded")]
    pub embedded: Option<FolderPage>,
}

/// Yandex.Disk API error response body.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Format bytes into human-readable size.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
