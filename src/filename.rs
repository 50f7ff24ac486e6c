//! Output filename derivation and sanitization.

use std::path::Path;

use url::Url;

use crate::error::Result;

/// Characters that are unsafe in a filename on at least one supported
/// filesystem. Each is replaced with `_`.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Extract the suggested filename from a resolved download URL.
///
/// Yandex.Disk direct URLs carry the original name in a `filename`
/// query parameter; `Url::query_pairs` percent-decodes it.
pub fn from_download_url(href: &str) -> Result<Option<String>> {
    let url = Url::parse(href)?;
    let name = url
        .query_pairs()
        .find(|(key, _)| key == "filename")
        .map(|(_, value)| value.into_owned())
        .filter(|name| !name.is_empty());
    Ok(name)
}

/// Substitute a custom base name, preserving the resolved file's
/// extension.
pub fn with_custom_name(resolved: &str, custom: &str) -> String {
    match Path::new(resolved).extension() {
        Some(ext) => format!("{}.{}", custom, ext.to_string_lossy()),
        None => custom.to_string(),
    }
}

/// Replace unsafe characters with `_`. Idempotent.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_download_url() {
        let href = "https://downloader.disk.yandex.ru/disk/abc?filename=report.pdf&disposition=attachment";
        assert_eq!(from_download_url(href).unwrap().unwrap(), "report.pdf");
    }

    #[test]
    fn test_from_download_url_percent_decoded() {
        let href = "https://downloader.example/disk/abc?filename=%D0%BE%D1%82%D1%87%D1%91%D1%82%202024.pdf";
        assert_eq!(from_download_url(href).unwrap().unwrap(), "отчёт 2024.pdf");
    }

    #[test]
    fn test_from_download_url_missing_param() {
        let href = "https://downloader.example/disk/abc?disposition=attachment";
        assert!(from_download_url(href).unwrap().is_none());
    }

    #[test]
    fn test_from_download_url_invalid() {
        assert!(from_download_url("not a url").is_err());
    }

    #[test]
    fn test_with_custom_name_keeps_extension() {
        assert_eq!(with_custom_name("report.pdf", "annual"), "annual.pdf");
        assert_eq!(with_custom_name("archive.tar.gz", "backup"), "backup.gz");
    }

    #[test]
    fn test_with_custom_name_own_suffix() {
        // The custom name's own suffix becomes part of the stem.
        assert_eq!(with_custom_name("report.pdf", "annual.v2"), "annual.v2.pdf");
    }

    #[test]
    fn test_with_custom_name_no_extension() {
        assert_eq!(with_custom_name("README", "notes"), "notes");
    }

    #[test]
    fn test_sanitize_replaces_unsafe() {
        assert_eq!(sanitize(r#"a/b\c:d*e?f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let once = sanitize("weird:name?.txt");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_safe_name_unchanged() {
        assert_eq!(sanitize("отчёт 2024.pdf"), "отчёт 2024.pdf");
    }
}
