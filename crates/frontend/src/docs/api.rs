use contracts::docs::Sidebar;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const API_BASE: &str = "/api/docs";

/// Получить структуру боковой панели (продукт -> категория -> документы)
pub async fn fetch_sidebar() -> Result<Sidebar, String> {
    let url = api_url(&format!("{}/sidebar", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Sidebar = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
