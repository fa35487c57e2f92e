use serde::{Deserialize, Serialize};

use super::ordering::{sort_categories, sort_documents};
use super::sidebar::Sidebar;

/// Готовая к отрисовке панель одного продукта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub product: String,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    /// `None` для документов без категории
    pub heading: Option<String>,
    pub links: Vec<DocLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    pub href: String,
    pub label: String,
}

/// Отсортированные категории и ссылки активного продукта.
/// Остальные продукты не отображаются.
pub fn build_product_view(sidebar: &Sidebar, product: &str) -> Option<ProductView> {
    let categories = sidebar.get(product)?;

    let categories = sort_categories(categories)
        .into_iter()
        .map(|(category, docs)| CategoryView {
            heading: category.heading().map(str::to_string),
            links: sort_documents(docs)
                .into_iter()
                .map(|doc| DocLink {
                    href: doc.href(),
                    label: doc.data.title.clone(),
                })
                .collect(),
        })
        .collect();

    Some(ProductView {
        product: product.to_string(),
        categories,
    })
}
