//! YAML front-matter extraction
//!
//! Inventory records are markdown files with a `---` delimited YAML block at
//! the top. The body below the closing fence is the product description and
//! is ignored by the loader.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("{filename}: no front-matter block (file must start with ---)")]
    Missing { filename: String },

    #[error("{filename}: unterminated front-matter block (missing closing ---)")]
    Unterminated { filename: String },

    #[error("{filename}: invalid front-matter: {source}")]
    Yaml {
        filename: String,
        source: serde_yml::Error,
    },
}

/// Split content into (front-matter YAML, body). The opening fence must be
/// the first line; the closing fence is the next line starting with `---`.
pub fn split(content: &str) -> Option<(String, String)> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut yaml = Vec::new();
    while let Some(line) = lines.next() {
        if line.trim_end().starts_with("---") {
            let body: Vec<&str> = lines.collect();
            return Some((yaml.join("\n"), body.join("\n")));
        }
        yaml.push(line);
    }
    None
}

/// Parse a markdown file's front-matter into a typed value
pub fn parse<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T, FrontmatterError> {
    if !content.lines().next().is_some_and(|l| l.trim_end() == "---") {
        return Err(FrontmatterError::Missing {
            filename: filename.to_string(),
        });
    }
    let (yaml, _body) = split(content).ok_or_else(|| FrontmatterError::Unterminated {
        filename: filename.to_string(),
    })?;
    serde_yml::from_str(&yaml).map_err(|source| FrontmatterError::Yaml {
        filename: filename.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Meta {
        sku: String,
        #[serde(default)]
        brand: String,
    }

    #[test]
    fn test_parse_front_matter() {
        let content = "---\nsku: TIRE-1\nbrand: Michelin\n---\n\nGreat tire.\n";
        let meta: Meta = parse(content, "tire-1.md").unwrap();
        assert_eq!(meta.sku, "TIRE-1");
        assert_eq!(meta.brand, "Michelin");
    }

    #[test]
    fn test_split_returns_body() {
        let content = "---\nsku: TIRE-1\n---\nline one\nline two";
        let (yaml, body) = split(content).unwrap();
        assert_eq!(yaml, "sku: TIRE-1");
        assert_eq!(body, "line one\nline two");
    }

    #[test]
    fn test_missing_front_matter_is_error() {
        let err = parse::<Meta>("# Just a heading\n", "plain.md").unwrap_err();
        assert!(matches!(err, FrontmatterError::Missing { .. }));
    }

    #[test]
    fn test_unterminated_front_matter_is_error() {
        let err = parse::<Meta>("---\nsku: TIRE-1\n", "broken.md").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let content = "---\nsku: TIRE-1\n  bad: indent\n---\n";
        let err = parse::<Meta>(content, "bad.md").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml { .. }));
    }
}
