use std::cmp::Ordering;

use super::category::{compare_categories, Category};
use super::collation::locale_compare;
use super::document::Document;
use super::sidebar::CategoryMap;

/// По `order` (999 по умолчанию), при равенстве - по заголовку
pub fn compare_documents(a: &Document, b: &Document) -> Ordering {
    a.effective_order()
        .total_cmp(&b.effective_order())
        .then_with(|| locale_compare(a.title(), b.title()))
}

/// Категории продукта в порядке отображения
pub fn sort_categories(categories: &CategoryMap) -> Vec<(&Category, &[Document])> {
    let mut entries: Vec<(&Category, &[Document])> = categories
        .iter()
        .map(|(category, docs)| (category, docs.as_slice()))
        .collect();
    entries.sort_by(|(a, _), (b, _)| compare_categories(a, b));
    entries
}

/// Документы одной категории в порядке отображения
pub fn sort_documents(docs: &[Document]) -> Vec<&Document> {
    let mut sorted: Vec<&Document> = docs.iter().collect();
    sorted.sort_by(|a, b| compare_documents(a, b));
    sorted
}
