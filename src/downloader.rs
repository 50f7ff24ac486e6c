//! Per-link download orchestration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::DiskClient;
use crate::error::{DiskError, Result};
use crate::filename;
use crate::messages::Catalog;
use crate::progress::make_progress_bar;

/// Fallback output name when neither the resolved URL nor the folder
/// listing carries one.
const DEFAULT_NAME: &str = "download";

/// Downloads public links into a destination directory, printing
/// localized progress and status messages.
pub struct Downloader {
    client: DiskClient,
    catalog: Catalog,
    location: PathBuf,
}

impl Downloader {
    pub fn new(client: DiskClient, catalog: Catalog, location: PathBuf) -> Self {
        Self {
            client,
            catalog,
            location,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Resolve and download a single link. Returns the written path.
    pub async fn download(&self, link: &str, custom_name: Option<&str>) -> Result<PathBuf> {
        let resolved = self.client.resolve(link).await?;

        let resolved_name = filename::from_download_url(&resolved.href)?
            .or(resolved.name_hint)
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let file_name = match custom_name {
            Some(custom) => filename::with_custom_name(&resolved_name, custom),
            None => resolved_name,
        };

        let safe_name = filename::sanitize(&file_name);
        if safe_name != file_name {
            println!("{}", self.catalog.unsafe_name(&file_name, &safe_name));
        }

        // The directory must exist before the first byte lands.
        tokio::fs::create_dir_all(&self.location).await?;
        let destination = self.location.join(&safe_name);

        let stream = self.client.fetch(&resolved.href).await?;
        let bar = make_progress_bar(stream.total_size(), &safe_name);
        bar.enable_steady_tick(Duration::from_millis(250));

        let bar_clone = bar.clone();
        let written = stream
            .write_to(&destination, move |delta| bar_clone.inc(delta))
            .await?;
        bar.finish_and_clear();

        println!("{}", self.catalog.download_complete(&safe_name, written));
        Ok(destination)
    }

    /// Download a link, reporting any failure on stdout instead of
    /// propagating it. Batch mode runs every line through this so one
    /// bad link never halts the rest.
    pub async fn download_reporting(&self, link: &str, custom_name: Option<&str>) -> bool {
        match self.download(link, custom_name).await {
            Ok(_) => true,
            Err(e) => {
                println!("{}", self.describe_failure(link, &e));
                false
            }
        }
    }

    fn describe_failure(&self, link: &str, error: &DiskError) -> String {
        match error {
            DiskError::FileNotFound(_) => self.catalog.file_not_found(link),
            DiskError::UrlNotFound(_) => self.catalog.url_not_found(link),
            other => self.catalog.download_failed(link, &other.to_string()),
        }
    }
}
