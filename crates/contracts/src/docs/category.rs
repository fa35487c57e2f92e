use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::collation::locale_compare;

/// Ключ, которым загрузчик контента помечает документы без категории
pub const NO_CATEGORY_KEY: &str = "_noCategory";

/// Категории, которые всегда идут первыми, в этом порядке
pub const PRIORITY_CATEGORIES: [&str; 5] =
    ["Getting Started", "Application", "Router", "Event", "Types"];

/// Категория документа.
///
/// На проводе это обычная строка: `"_noCategory"` означает отсутствие
/// категории, любое другое значение - именованную категорию.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    None,
    Named(String),
}

impl Category {
    /// Заголовок для отображения; у документов без категории заголовка нет
    pub fn heading(&self) -> Option<&str> {
        match self {
            Category::None => None,
            Category::Named(name) => Some(name),
        }
    }

    pub fn as_key(&self) -> &str {
        match self {
            Category::None => NO_CATEGORY_KEY,
            Category::Named(name) => name,
        }
    }

    /// Позиция в списке приоритетных категорий
    pub fn priority(&self) -> Option<usize> {
        let name = self.heading()?;
        PRIORITY_CATEGORIES.iter().position(|p| *p == name)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == NO_CATEGORY_KEY {
            Category::None
        } else {
            Category::Named(value)
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Option<String>> for Category {
    fn from(value: Option<String>) -> Self {
        value.map(Category::from).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::None => NO_CATEGORY_KEY.to_string(),
            Category::Named(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Порядок категорий в боковой панели:
/// без категории -> приоритетные по списку -> остальные по алфавиту
pub fn compare_categories(a: &Category, b: &Category) -> Ordering {
    match (a, b) {
        (Category::None, Category::None) => Ordering::Equal,
        (Category::None, _) => Ordering::Less,
        (_, Category::None) => Ordering::Greater,
        (Category::Named(name_a), Category::Named(name_b)) => {
            match (a.priority(), b.priority()) {
                (Some(pa), Some(pb)) => pa.cmp(&pb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => locale_compare(name_a, name_b),
            }
        }
    }
}
