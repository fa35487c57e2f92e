use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::RwLock;

use contracts::docs::Sidebar;

use super::loader::load_sidebar;

struct DocsState {
    content_dir: PathBuf,
    sidebar: RwLock<Sidebar>,
}

static DOCS_STATE: OnceCell<DocsState> = OnceCell::new();

fn state() -> anyhow::Result<&'static DocsState> {
    DOCS_STATE
        .get()
        .ok_or_else(|| anyhow::anyhow!("Docs service has not been initialized"))
}

async fn scan(content_dir: PathBuf) -> anyhow::Result<Sidebar> {
    let sidebar = tokio::task::spawn_blocking(move || load_sidebar(&content_dir)).await??;
    Ok(sidebar)
}

/// Первичная загрузка документации при старте сервера
pub async fn initialize(content_dir: PathBuf) -> anyhow::Result<()> {
    let sidebar = scan(content_dir.clone()).await?;
    tracing::info!(
        "Docs loaded from {}: {} products",
        content_dir.display(),
        sidebar.len()
    );

    DOCS_STATE
        .set(DocsState {
            content_dir,
            sidebar: RwLock::new(sidebar),
        })
        .map_err(|_| anyhow::anyhow!("Docs service already initialized"))?;
    Ok(())
}

/// Текущая структура боковой панели
pub fn sidebar() -> anyhow::Result<Sidebar> {
    let state = state()?;
    let sidebar = state
        .sidebar
        .read()
        .map_err(|_| anyhow::anyhow!("Docs state lock poisoned"))?;
    Ok(sidebar.clone())
}

/// Перечитать каталог контента. Возвращает число продуктов.
pub async fn reload() -> anyhow::Result<usize> {
    let state = state()?;
    let fresh = scan(state.content_dir.clone()).await?;
    let products = fresh.len();

    let mut sidebar = state
        .sidebar
        .write()
        .map_err(|_| anyhow::anyhow!("Docs state lock poisoned"))?;
    *sidebar = fresh;

    tracing::info!("Docs reloaded: {} products", products);
    Ok(products)
}
