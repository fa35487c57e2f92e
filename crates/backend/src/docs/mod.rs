//! Загрузка документации из каталога контента и построение боковой панели

pub mod error;
pub mod front_matter;
pub mod loader;
pub mod service;

pub use error::DocsError;
