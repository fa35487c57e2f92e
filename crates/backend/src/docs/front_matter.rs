//! YAML front matter markdown файлов:
//!
//! ```text
//! ---
//! title: Installation
//! product: Web Kit
//! category: Getting Started
//! lastUpdate: 2024-05-01
//! order: 1
//! ---
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;

use contracts::docs::{Category, DocumentData};

use super::error::DocsError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub product: String,
    pub last_update: String,
    #[serde(default)]
    pub order: Option<f64>,
}

/// Разделить файл на YAML блок и тело документа
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Дата последнего обновления: RFC 3339 или просто `YYYY-MM-DD` (полночь UTC)
pub fn parse_last_update(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub fn parse_front_matter(path: &Path, content: &str) -> Result<FrontMatter, DocsError> {
    let (yaml, _body) = split_front_matter(content)
        .ok_or_else(|| DocsError::MissingFrontMatter(path.to_path_buf()))?;

    serde_yaml::from_str(yaml).map_err(|source| DocsError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })
}

impl FrontMatter {
    pub fn into_document_data(self, path: &Path) -> Result<DocumentData, DocsError> {
        let last_update =
            parse_last_update(&self.last_update).ok_or_else(|| DocsError::LastUpdate {
                path: path.to_path_buf(),
                value: self.last_update.clone(),
            })?;

        // Пустая категория = без категории
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(DocumentData {
            title: self.title,
            category: Category::from(category),
            product: self.product,
            last_update,
            order: self.order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = "---\ntitle: Installation\nproduct: Web Kit\ncategory: Getting Started\nlastUpdate: 2024-05-01\norder: 2\n---\n# Installation\n";

    #[test]
    fn test_split_front_matter() {
        let (yaml, body) = split_front_matter(SAMPLE).unwrap();
        assert!(yaml.starts_with("title: Installation\n"));
        assert!(yaml.ends_with("order: 2\n"));
        assert_eq!(body, "# Installation\n");
    }

    #[test]
    fn test_split_requires_delimiters() {
        assert_eq!(split_front_matter("# Just markdown"), None);
        assert_eq!(split_front_matter("---\ntitle: x\n"), None);
        assert_eq!(split_front_matter("---\r\n---\r\nbody"), Some(("", "body")));
    }

    #[test]
    fn test_parse_last_update() {
        assert_eq!(
            parse_last_update("2024-05-01"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_last_update("2024-05-01T10:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(parse_last_update("yesterday"), None);
    }

    #[test]
    fn test_into_document_data() {
        let path = Path::new("web-kit/install.md");
        let data = parse_front_matter(path, SAMPLE)
            .unwrap()
            .into_document_data(path)
            .unwrap();

        assert_eq!(data.title, "Installation");
        assert_eq!(data.product, "Web Kit");
        assert_eq!(data.category, Category::Named("Getting Started".into()));
        assert_eq!(data.order, Some(2.0));
    }

    #[test]
    fn test_missing_category_becomes_none() {
        let path = Path::new("cli/intro.md");
        let content = "---\ntitle: Intro\nproduct: CLI\ncategory: \"\"\nlastUpdate: 2024-01-01\n---\n";
        let data = parse_front_matter(path, content)
            .unwrap()
            .into_document_data(path)
            .unwrap();
        assert_eq!(data.category, Category::None);
        assert_eq!(data.order, None);
    }

    #[test]
    fn test_fractional_order() {
        let path = Path::new("cli/between.md");
        let content = "---\ntitle: Between\nproduct: CLI\nlastUpdate: 2024-01-01\norder: 1.5\n---\n";
        let data = parse_front_matter(path, content)
            .unwrap()
            .into_document_data(path)
            .unwrap();
        assert_eq!(data.order, Some(1.5));
    }

    #[test]
    fn test_errors() {
        let path = Path::new("broken.md");
        assert!(matches!(
            parse_front_matter(path, "no front matter"),
            Err(DocsError::MissingFrontMatter(_))
        ));
        assert!(matches!(
            parse_front_matter(path, "---\ntitle: [unclosed\n---\n"),
            Err(DocsError::FrontMatter { .. })
        ));

        let fm = parse_front_matter(
            path,
            "---\ntitle: T\nproduct: P\nlastUpdate: soon\n---\n",
        )
        .unwrap();
        assert!(matches!(
            fm.into_document_data(path),
            Err(DocsError::LastUpdate { .. })
        ));
    }
}
