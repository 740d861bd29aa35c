//! Parsers for the two key/value file formats argoflow reads.
//!
//! - `.env` files (`--env-file`): `KEY=VALUE` lines with `#` comments, optional
//!   `export ` prefix and quoted values.
//! - replace conf files (`replace --config`): any line containing `=` is an entry.

/// Parse a `.env` file into ordered key-value pairs.
///
/// Later duplicates win when the pairs are collected into a map.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);

        let Some((key, raw_value)) = trimmed.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        entries.push((key.to_string(), unquote(raw_value.trim())));
    }

    entries
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].replace("\\n", "\n").replace("\\\"", "\"");
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }

    // Unquoted values may carry a trailing inline comment.
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}

/// Parse a replace conf file.
///
/// Every line containing `=` is split on the first `=`; the value is trimmed and the
/// key is kept verbatim.
pub fn parse_conf(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.trim().to_string()))
        .collect()
}
