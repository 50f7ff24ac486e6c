//! yandown CLI - Download files shared through Yandex.Disk public links.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use yandown::{batch, Catalog, DiskClient, Downloader};

/// CLI tool for downloading Yandex.Disk public links.
#[derive(Parser)]
#[command(name = "yandown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Public share link (alternative to --link).
    positional_link: Option<String>,

    /// Public share link.
    #[arg(short = 'l', long)]
    link: Option<String>,

    /// Download location on disk.
    #[arg(short = 'd', long = "download_location", default_value = ".")]
    download_location: PathBuf,

    /// Path to a file with one link per line, optionally followed by a
    /// custom name (separated by a space, comma, or semicolon).
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Locale misconfiguration is the one fatal error.
    let catalog = Catalog::from_env().context("Failed to configure locale")?;

    let location = expand_home(&cli.download_location);
    let downloader = Downloader::new(DiskClient::new(), catalog, location);

    // The -l flag takes priority over the positional link.
    let link = cli.link.or(cli.positional_link);

    if let Some(list_path) = cli.file {
        let contents = std::fs::read_to_string(&list_path)
            .with_context(|| format!("Failed to read list file {:?}", list_path))?;

        for entry in batch::parse_list(&contents) {
            downloader
                .download_reporting(&entry.link, entry.custom_name.as_deref())
                .await;
        }
    } else if let Some(link) = link {
        if !downloader.download_reporting(&link, None).await {
            std::process::exit(1);
        }
    } else {
        println!("{}", catalog.no_link_or_file());
        std::process::exit(1);
    }

    Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
