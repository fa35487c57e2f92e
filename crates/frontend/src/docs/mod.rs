pub mod api;
pub mod page;
pub mod sidebar;

pub use page::DocsPage;
pub use sidebar::DocsSidebar;
