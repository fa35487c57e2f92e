use std::fs;
use std::path::{Path, PathBuf};

use contracts::docs::sidebar::group_documents;
use contracts::docs::{Document, Sidebar};

use super::error::DocsError;
use super::front_matter::parse_front_matter;

const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Путь документа относительно каталога контента, без расширения,
/// через `/`: `content/web-kit/router/intro.md` -> `web-kit/router/intro`
pub fn slug_for(content_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    let relative = relative.with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_doc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DOC_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DocsError> {
    let entries = fs::read_dir(dir).map_err(|e| DocsError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| DocsError::io(dir, e))?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else if is_doc_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

pub fn parse_document(content_dir: &Path, path: &Path, content: &str) -> Result<Document, DocsError> {
    let data = parse_front_matter(path, content)?.into_document_data(path)?;
    let slug = slug_for(content_dir, path);
    Ok(Document::new(slug.clone(), slug, data))
}

/// Все документы каталога.
///
/// Файлы с некорректным front matter пропускаются с предупреждением;
/// ошибка возвращается только если не удалось прочитать сам каталог.
pub fn load_documents(content_dir: &Path) -> Result<Vec<Document>, DocsError> {
    if !content_dir.exists() {
        tracing::warn!("Docs directory not found: {}", content_dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    collect_files(content_dir, &mut files)?;
    files.sort();

    let mut docs = Vec::with_capacity(files.len());
    for path in files {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        match parse_document(content_dir, &path, &content) {
            Ok(doc) => docs.push(doc),
            Err(e) => tracing::warn!("Skipping document: {}", e),
        }
    }

    tracing::debug!(
        "Loaded {} documents from {}",
        docs.len(),
        content_dir.display()
    );
    Ok(docs)
}

pub fn load_sidebar(content_dir: &Path) -> Result<Sidebar, DocsError> {
    Ok(group_documents(load_documents(content_dir)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::docs::Category;
    use tempfile::{tempdir, TempDir};

    fn write(dir: &TempDir, relative: &str, content: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn front_matter(title: &str, product: &str, category: Option<&str>) -> String {
        let category = category
            .map(|c| format!("category: {}\n", c))
            .unwrap_or_default();
        format!(
            "---\ntitle: {}\nproduct: {}\n{}lastUpdate: 2024-05-01\n---\nBody\n",
            title, product, category
        )
    }

    #[test]
    fn test_slug_for() {
        let root = Path::new("/content");
        assert_eq!(
            slug_for(root, Path::new("/content/web-kit/router/intro.md")),
            "web-kit/router/intro"
        );
        assert_eq!(slug_for(root, Path::new("/content/index.mdx")), "index");
    }

    #[test]
    fn test_load_sidebar_groups_by_product_and_category() {
        let dir = tempdir().unwrap();
        write(&dir, "web-kit/intro.md", &front_matter("Intro", "Web Kit", None));
        write(
            &dir,
            "web-kit/router/routes.mdx",
            &front_matter("Routes", "Web Kit", Some("Router")),
        );
        write(&dir, "cli/flags.md", &front_matter("Flags", "CLI", Some("Types")));
        write(&dir, "notes.txt", "not a doc");

        let sidebar = load_sidebar(dir.path()).unwrap();
        assert_eq!(sidebar.len(), 2);

        let web_kit = &sidebar["Web Kit"];
        assert_eq!(web_kit[&Category::None][0].file_path, "web-kit/intro");
        assert_eq!(
            web_kit[&Category::from("Router")][0].href(),
            "/docs/web-kit/router/routes"
        );
        assert_eq!(sidebar["CLI"][&Category::from("Types")][0].data.title, "Flags");
    }

    #[test]
    fn test_broken_documents_are_skipped() {
        let dir = tempdir().unwrap();
        write(&dir, "good.md", &front_matter("Good", "CLI", None));
        write(&dir, "bad.md", "# no front matter");

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "good");
    }

    #[test]
    fn test_fractional_order_is_loaded() {
        let dir = tempdir().unwrap();
        write(
            &dir,
            "cli/between.md",
            "---\ntitle: Between\nproduct: CLI\nlastUpdate: 2024-05-01\norder: 1.5\n---\n",
        );
        write(&dir, "cli/first.md", &front_matter("First", "CLI", None));

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 2);
        let between = docs.iter().find(|d| d.id == "cli/between").unwrap();
        assert_eq!(between.data.order, Some(1.5));
    }

    #[test]
    fn test_missing_directory_gives_empty_sidebar() {
        let sidebar = load_sidebar(Path::new("/definitely/not/here")).unwrap();
        assert!(sidebar.is_empty());
    }
}
