use std::collections::BTreeMap;
use std::path::Path;

/// Loads a `gradle.properties` file (Java properties, `key=value` lines).
///
/// Blank lines and lines starting with `#` or `!` are skipped; a missing file
/// yields an empty map.
pub fn load_properties(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(bomkit_util::errors::BomkitError::Io)?;
    Ok(parse_properties(&content))
}

/// Parse properties content. Both `=` and `:` separate keys from values.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let split = trimmed
            .find(['=', ':'])
            .map(|idx| (&trimmed[..idx], &trimmed[idx + 1..]));
        if let Some((key, value)) = split {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_equals_and_colon_separators() {
        let props = parse_properties("group=com.sphereon.gradle\nversion : 0.1.0-SNAPSHOT\n");
        assert_eq!(props["group"], "com.sphereon.gradle");
        assert_eq!(props["version"], "0.1.0-SNAPSHOT");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let props = parse_properties("# comment\n! also\n\nkotlin.code.style=official\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props["kotlin.code.style"], "official");
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let props = load_properties(&tmp.path().join("gradle.properties")).unwrap();
        assert!(props.is_empty());
    }
}
