//! Адрес backend'а для запросов из браузера.
//!
//! В сборке, которую раздаёт сам backend, запросы идут на тот же origin.
//! При запуске через dev-сервер (trunk и т.п.) - на тот же хост, порт 3000.

/// Порт backend'а по умолчанию (см. `[server] port` в config.toml)
pub const BACKEND_PORT: &str = "3000";

/// Базовый URL для API запросов.
///
/// Пустая строка означает "тот же origin" (относительные пути).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port.is_empty() || port == BACKEND_PORT {
        return String::new();
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Полный URL для пути API (`/api/...`)
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
