use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use contracts::docs::Sidebar;

use crate::docs::service;

/// GET /api/docs/sidebar
pub async fn get_sidebar() -> Result<Json<Sidebar>, StatusCode> {
    match service::sidebar() {
        Ok(sidebar) => Ok(Json(sidebar)),
        Err(e) => {
            tracing::error!("Failed to read docs sidebar: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/docs/reload
pub async fn reload() -> Result<Json<serde_json::Value>, StatusCode> {
    match service::reload().await {
        Ok(products) => Ok(Json(json!({ "products": products }))),
        Err(e) => {
            tracing::error!("Failed to reload docs: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
