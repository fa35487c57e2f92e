//! Документация: модель данных боковой панели, выбор продукта и сортировка.

pub mod category;
pub mod collation;
pub mod document;
pub mod ordering;
pub mod selection;
pub mod sidebar;
pub mod view;

pub use category::Category;
pub use document::{Document, DocumentData};
pub use sidebar::{CategoryMap, Sidebar};
