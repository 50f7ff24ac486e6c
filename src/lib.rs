//! yandown - A CLI tool for downloading files shared through
//! Yandex.Disk public links.
//!
//! This library provides functionality to:
//! - Resolve a public share link to a direct download URL, falling back
//!   to a paginated search of the parent folder's listing when the link
//!   points at a file inside a shared folder
//! - Stream the resolved file to local disk with a sanitized filename
//!   and a progress bar
//! - Process batch list files, one link (and optional custom name) per
//!   line
//!
//! # Example
//!
//! ```no_run
//! use yandown::{Catalog, DiskClient, Downloader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::from_env()?;
//!     let downloader = Downloader::new(DiskClient::new(), catalog, ".".into());
//!
//!     downloader
//!         .download("https://disk.yandex.ru/d/AbC123", None)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod client;
pub mod downloader;
pub mod error;
pub mod filename;
pub mod link;
pub mod messages;
pub mod models;
pub mod progress;

// Re-exports for convenience
pub use batch::BatchEntry;
pub use client::{DiskClient, ResolvedFile};
pub use downloader::Downloader;
pub use error::{DiskError, Result};
pub use messages::{Catalog, Lang};
