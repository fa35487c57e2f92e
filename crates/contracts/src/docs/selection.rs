//! Выбор активного продукта.
//!
//! Начальный выбор вычисляется один раз из пути страницы и дальше меняется
//! только через выпадающий список; последующие переходы его не пересчитывают.

use super::sidebar::{first_product, Sidebar};
use super::view::{build_product_view, ProductView};

/// Сегмент продукта из пути: `/docs/my-product/page` -> `my-product`
pub fn path_product_segment(pathname: &str) -> Option<&str> {
    pathname.split('/').nth(2).filter(|segment| !segment.is_empty())
}

/// `My-Product` -> `my product`
pub fn normalize_segment(segment: &str) -> String {
    segment.to_lowercase().replace('-', " ")
}

/// Продукт, который нужно показать при открытии страницы `pathname`.
///
/// Если сегмент пути совпадает с ключом продукта (без учёта регистра,
/// дефисы = пробелы), возвращается этот ключ в исходном написании,
/// иначе - первый по алфавиту продукт. Для пустой панели `None`.
pub fn initial_product(sidebar: &Sidebar, pathname: &str) -> Option<String> {
    if let Some(segment) = path_product_segment(pathname) {
        let normalized = normalize_segment(segment);
        if let Some(product) = sidebar
            .keys()
            .find(|product| product.to_lowercase() == normalized)
        {
            return Some(product.clone());
        }
    }
    first_product(sidebar).map(str::to_string)
}

/// Состояние выбора продукта одного экземпляра боковой панели
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSelection {
    current: Option<String>,
}

impl ProductSelection {
    pub fn from_location(sidebar: &Sidebar, pathname: &str) -> Self {
        Self {
            current: initial_product(sidebar, pathname),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Значение для выпадающего списка; пустая строка, если ничего не выбрано
    pub fn value(&self) -> String {
        self.current().unwrap_or_default().to_string()
    }

    /// Категории и ссылки выбранного продукта
    pub fn product_view(&self, sidebar: &Sidebar) -> Option<ProductView> {
        build_product_view(sidebar, self.current()?)
    }

    /// Переключить продукт. Принимаются только ключи, которые есть в панели.
    pub fn select(&mut self, sidebar: &Sidebar, product: &str) -> bool {
        if !sidebar.contains_key(product) {
            return false;
        }
        self.current = Some(product.to_string());
        true
    }
}
