use crate::docs::DocsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <DocsPage />
    }
}
