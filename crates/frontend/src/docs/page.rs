use contracts::docs::Sidebar;
use leptos::prelude::*;

use super::api::fetch_sidebar;
use super::sidebar::DocsSidebar;

/// Страница документации: загружает структуру и показывает боковую панель
#[component]
pub fn DocsPage() -> impl IntoView {
    let (sidebar, set_sidebar) = signal(None::<Sidebar>);
    let (error, set_error) = signal(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_sidebar().await {
            Ok(data) => {
                log::debug!("docs sidebar loaded: {} products", data.len());
                set_sidebar.set(Some(data));
            }
            Err(e) => {
                log::error!("failed to load docs sidebar: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="docs-layout">
            <aside class="docs-layout__sidebar">
                {move || {
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="docs-layout__error">{err}</div>
                        }.into_any();
                    }
                    match sidebar.get() {
                        // Панель монтируется один раз, когда данные пришли
                        Some(data) => view! { <DocsSidebar sidebar=data /> }.into_any(),
                        None => view! {
                            <div class="docs-layout__loading">"Loading..."</div>
                        }.into_any(),
                    }
                }}
            </aside>
            <main class="docs-layout__content" id="docs-content"></main>
        </div>
    }
}
