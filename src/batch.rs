//! Batch list file parsing.
//!
//! One link per line, optionally followed by a custom name. The first
//! delimiter kind present decides the split: a space, then a comma,
//! then a semicolon.

/// One parsed line of a batch list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub link: String,
    pub custom_name: Option<String>,
}

/// Parse a single line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<BatchEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (link, custom_name) = if let Some((link, name)) = line.split_once(' ') {
        (link, Some(name))
    } else if let Some((link, name)) = line.split_once(',') {
        (link, Some(name))
    } else if let Some((link, name)) = line.split_once(';') {
        (link, Some(name))
    } else {
        (line, None)
    };

    Some(BatchEntry {
        link: link.trim().to_string(),
        custom_name: custom_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from),
    })
}

/// Parse a whole list file's contents, skipping blank lines.
pub fn parse_list(contents: &str) -> Vec<BatchEntry> {
    contents.lines().filter_map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_link_only() {
        let entry = parse_line("https://disk.yandex.ru/d/abc").unwrap();
        assert_eq!(entry.link, "https://disk.yandex.ru/d/abc");
        assert_eq!(entry.custom_name, None);
    }

    #[test]
    fn test_parse_line_space_separator() {
        let entry = parse_line("https://disk.yandex.ru/d/abc report").unwrap();
        assert_eq!(entry.custom_name.as_deref(), Some("report"));
    }

    #[test]
    fn test_parse_line_comma_separator() {
        let entry = parse_line("https://disk.yandex.ru/d/abc,report").unwrap();
        assert_eq!(entry.link, "https://disk.yandex.ru/d/abc");
        assert_eq!(entry.custom_name.as_deref(), Some("report"));
    }

    #[test]
    fn test_parse_line_semicolon_separator() {
        let entry = parse_line("https://disk.yandex.ru/d/abc;report").unwrap();
        assert_eq!(entry.custom_name.as_deref(), Some("report"));
    }

    #[test]
    fn test_space_wins_over_comma() {
        let entry = parse_line("https://disk.yandex.ru/d/abc my,name").unwrap();
        assert_eq!(entry.link, "https://disk.yandex.ru/d/abc");
        assert_eq!(entry.custom_name.as_deref(), Some("my,name"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn test_parse_list() {
        let contents = "link1\n\nlink2,two\nlink3;three\n";
        let entries = parse_list(contents);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].custom_name.as_deref(), Some("two"));
        assert_eq!(entries[2].custom_name.as_deref(), Some("three"));
    }
}
