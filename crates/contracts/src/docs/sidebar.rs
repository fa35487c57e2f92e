use indexmap::IndexMap;

use super::category::Category;
use super::document::Document;

/// Категория -> документы одного продукта
pub type CategoryMap = IndexMap<Category, Vec<Document>>;

/// Продукт -> категории -> документы.
///
/// Порядок ключей сохраняется таким, каким его отдал загрузчик, но для
/// отображения категории и документы всегда пересортировываются.
pub type Sidebar = IndexMap<String, CategoryMap>;

/// Варианты для выпадающего списка продуктов (в порядке загрузчика)
pub fn product_names(sidebar: &Sidebar) -> Vec<String> {
    sidebar.keys().cloned().collect()
}

/// Пары (значение, подпись) для выпадающего списка
pub fn product_options(sidebar: &Sidebar) -> Vec<(String, String)> {
    sidebar
        .keys()
        .map(|name| (name.clone(), name.clone()))
        .collect()
}

/// Первый по алфавиту продукт (обычное сравнение строк)
pub fn first_product(sidebar: &Sidebar) -> Option<&str> {
    sidebar.keys().map(String::as_str).min()
}

/// Сгруппировать плоский список документов по продукту и категории
pub fn group_documents<I>(docs: I) -> Sidebar
where
    I: IntoIterator<Item = Document>,
{
    let mut sidebar = Sidebar::new();
    for doc in docs {
        sidebar
            .entry(doc.data.product.clone())
            .or_default()
            .entry(doc.data.category.clone())
            .or_default()
            .push(doc);
    }
    sidebar
}
