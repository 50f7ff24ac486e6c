//! Localized user-facing messages.
//!
//! The language is picked once at startup from the environment and the
//! resulting catalog is passed into the downloader, so no message is
//! ever resolved through process-wide state.

use std::env;

use crate::error::{DiskError, Result};

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

impl Lang {
    /// Detect the language from `LC_ALL` / `LANG`.
    ///
    /// Unset or empty variables default to English. A set but
    /// unparseable value is a configuration error and fatal to the
    /// process.
    pub fn from_env() -> Result<Self> {
        let value = env::var("LC_ALL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| env::var("LANG").ok().filter(|v| !v.is_empty()));

        match value {
            None => Ok(Lang::En),
            Some(value) => Self::parse(&value),
        }
    }

    /// Parse a locale string such as `ru_RU.UTF-8` or `C`.
    fn parse(value: &str) -> Result<Self> {
        let tag = value
            .split(['_', '.', '@'])
            .next()
            .unwrap_or_default();

        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DiskError::LocaleError(value.to_string()));
        }
        if tag.eq_ignore_ascii_case("ru") {
            Ok(Lang::Ru)
        } else {
            Ok(Lang::En)
        }
    }
}

/// Message catalog resolved to a single language.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    lang: Lang,
}

impl Catalog {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Lang::from_env()?))
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn download_complete(&self, name: &str, size: u64) -> String {
        let size = crate::models::format_size(size);
        match self.lang {
            Lang::En => format!("Download complete: {} ({})", name, size),
            Lang::Ru => format!("Загрузка завершена: {} ({})", name, size),
        }
    }

    pub fn download_failed(&self, link: &str, error: &str) -> String {
        match self.lang {
            Lang::En => format!("Error: failed to download {}: {}", link, error),
            Lang::Ru => format!("Ошибка: не удалось скачать {}: {}", link, error),
        }
    }

    pub fn url_not_found(&self, link: &str) -> String {
        match self.lang {
            Lang::En => format!("Error: download URL not found in the response for {}", link),
            Lang::Ru => format!("Ошибка: ссылка для скачивания не найдена в ответе для {}", link),
        }
    }

    pub fn file_not_found(&self, link: &str) -> String {
        match self.lang {
            Lang::En => format!("Error: file not found: {}", link),
            Lang::Ru => format!("Ошибка: файл не найден: {}", link),
        }
    }

    pub fn unsafe_name(&self, original: &str, safe: &str) -> String {
        match self.lang {
            Lang::En => format!(
                "Warning: the file name {} contains unsupported characters. Using safe name: {}",
                original, safe
            ),
            Lang::Ru => format!(
                "Внимание: имя файла {} содержит недопустимые символы. Используется безопасное имя: {}",
                original, safe
            ),
        }
    }

    pub fn no_link_or_file(&self) -> String {
        match self.lang {
            Lang::En => "Error: you must provide either a link or a file containing links.".to_string(),
            Lang::Ru => "Ошибка: укажите ссылку или файл со списком ссылок.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_russian_locales() {
        assert_eq!(Lang::parse("ru_RU.UTF-8").unwrap(), Lang::Ru);
        assert_eq!(Lang::parse("ru").unwrap(), Lang::Ru);
        assert_eq!(Lang::parse("RU_RU").unwrap(), Lang::Ru);
    }

    #[test]
    fn test_parse_other_locales_default_to_english() {
        assert_eq!(Lang::parse("en_US.UTF-8").unwrap(), Lang::En);
        assert_eq!(Lang::parse("de_DE").unwrap(), Lang::En);
        assert_eq!(Lang::parse("C").unwrap(), Lang::En);
        assert_eq!(Lang::parse("POSIX").unwrap(), Lang::En);
    }

    #[test]
    fn test_parse_malformed_locale() {
        assert!(Lang::parse("_").is_err());
        assert!(Lang::parse("123").is_err());
        assert!(Lang::parse(".UTF-8").is_err());
    }

    #[test]
    fn test_catalog_languages_differ() {
        let en = Catalog::new(Lang::En);
        let ru = Catalog::new(Lang::Ru);
        assert_ne!(
            en.download_complete("a.txt", 1024),
            ru.download_complete("a.txt", 1024)
        );
        assert!(en.download_complete("a.txt", 1024).contains("1.00 KB"));
        assert!(en.no_link_or_file().starts_with("Error:"));
        assert!(ru.no_link_or_file().starts_with("Ошибка:"));
    }
}
