use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Тег коллекции, которой принадлежат все документы
pub const COLLECTION_DOCS: &str = "docs";

/// Порядок для документов без явного поля `order`
pub const DEFAULT_ORDER: f64 = 999.0;

/// Документ в том виде, в котором он приходит из загрузчика контента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    pub data: DocumentData,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    pub title: String,
    #[serde(default)]
    pub category: Category,
    pub product: String,
    pub last_update: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

fn default_collection() -> String {
    COLLECTION_DOCS.to_string()
}

impl Document {
    pub fn new(id: impl Into<String>, file_path: impl Into<String>, data: DocumentData) -> Self {
        Self {
            id: id.into(),
            collection: default_collection(),
            data,
            file_path: file_path.into(),
        }
    }

    /// Порядок, используемый при сортировке (999, если не задан)
    pub fn effective_order(&self) -> f64 {
        self.data.order.unwrap_or(DEFAULT_ORDER)
    }

    /// Ссылка на страницу документа
    pub fn href(&self) -> String {
        format!("/docs/{}", self.file_path)
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(order: Option<f64>) -> Document {
        Document::new(
            "router/intro",
            "router/intro",
            DocumentData {
                title: "Intro".into(),
                category: Category::Named("Router".into()),
                product: "Web Kit".into(),
                last_update: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
                order,
            },
        )
    }

    #[test]
    fn test_href_uses_file_path() {
        assert_eq!(sample(None).href(), "/docs/router/intro");
    }

    #[test]
    fn test_effective_order_defaults_to_999() {
        assert_eq!(sample(None).effective_order(), DEFAULT_ORDER);
        assert_eq!(sample(Some(3.0)).effective_order(), 3.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "guide",
            "data": {
                "title": "Guide",
                "category": "_noCategory",
                "product": "Web Kit",
                "lastUpdate": "2024-05-01T12:00:00Z"
            },
            "filePath": "web-kit/guide"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.collection, COLLECTION_DOCS);
        assert_eq!(doc.data.category, Category::None);
        assert_eq!(doc.data.order, None);
        assert_eq!(doc.href(), "/docs/web-kit/guide");
    }

    #[test]
    fn test_deserialize_integer_and_fractional_order() {
        let json = r#"[
            {"id": "a", "data": {"title": "A", "product": "P", "lastUpdate": "2024-05-01T12:00:00Z", "order": 2},
             "filePath": "p/a"},
            {"id": "b", "data": {"title": "B", "product": "P", "lastUpdate": "2024-05-01T12:00:00Z", "order": 1.5},
             "filePath": "p/b"}
        ]"#;
        let docs: Vec<Document> = serde_json::from_str(json).unwrap();
        assert_eq!(docs[0].effective_order(), 2.0);
        assert_eq!(docs[1].effective_order(), 1.5);
        assert_eq!(docs[0].data.category, Category::None);
    }
}
