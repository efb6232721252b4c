//! Minimal Java-properties reading.
//!
//! Covers the subset the project files use: `key=value` / `key: value`
//! pairs, `#`/`!` comments, blank lines, surrounding whitespace. Line
//! continuations and escape sequences are not supported. Lookup follows
//! `java.util.Properties`: the last occurrence of a key wins, and a line
//! without a separator is a key with an empty value.

/// Parsed view of a properties file, preserving entry order.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Parse properties content. Never fails; irregular lines degrade to
    /// keys with empty values, which `doctor` surfaces.
    pub fn parse(content: &str) -> Properties {
        let mut entries = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            match line.find(['=', ':']) {
                Some(idx) => {
                    let key = line[..idx].trim().to_string();
                    let value = line[idx + 1..].trim().to_string();
                    entries.push((key, value));
                }
                None => entries.push((line.to_string(), String::new())),
            }
        }
        Properties { entries }
    }

    /// Value for `key`, last occurrence winning.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in file order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Keys that occur more than once, in first-occurrence order.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut duplicates = Vec::new();
        for (idx, (key, _)) in self.entries.iter().enumerate() {
            let seen_before = self.entries[..idx].iter().any(|(prior, _)| prior == key);
            let already_reported = duplicates.contains(&key.as_str());
            if seen_before && !already_reported {
                duplicates.push(key.as_str());
            }
        }
        duplicates
    }
}

/// Render one `key=value` line. Keys in the project files are plain
/// identifiers and version strings, so no escaping is performed.
pub fn format_entry(key: &str, value: &str) -> String {
    format!("{}={}\n", key, value)
}

/// Render a `# comment` line.
pub fn format_comment(comment: &str) -> String {
    format!("# {}\n", comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_comments_and_blanks() {
        let props = Properties::parse(
            "# release dates\n\
             \n\
             1.2.1=20240101\n\
             ! legacy comment\n\
             1.3.1: 20240501\n",
        );
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("1.2.1"), Some("20240101"));
        assert_eq!(props.get("1.3.1"), Some("20240501"));
    }

    #[test]
    fn trims_whitespace_around_keys_and_values() {
        let props = Properties::parse("  pluginVersion  =  auto  \n");
        assert_eq!(props.get("pluginVersion"), Some("auto"));
    }

    #[test]
    fn last_duplicate_wins_on_lookup() {
        let props = Properties::parse("key=first\nkey=second\n");
        assert_eq!(props.get("key"), Some("second"));
        assert_eq!(props.duplicate_keys(), vec!["key"]);
    }

    #[test]
    fn line_without_separator_is_an_empty_value() {
        let props = Properties::parse("orphan\n");
        assert_eq!(props.get("orphan"), Some(""));
    }

    #[test]
    fn missing_key_is_none() {
        let props = Properties::parse("a=1\n");
        assert_eq!(props.get("b"), None);
        assert!(!props.contains_key("b"));
    }

    #[test]
    fn iter_preserves_order_and_duplicates() {
        let props = Properties::parse("a=1\nb=2\na=3\n");
        let entries: Vec<_> = props.iter().collect();
        assert_eq!(entries, vec![("a", "1"), ("b", "2"), ("a", "3")]);
    }

    #[test]
    fn formats_entries_and_comments() {
        assert_eq!(format_entry("1.2.1", "20240101"), "1.2.1=20240101\n");
        assert_eq!(format_comment("Last update"), "# Last update\n");
    }
}
