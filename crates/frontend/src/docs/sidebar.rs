//! Боковая панель документации: выбор продукта и список документов

use contracts::docs::selection::ProductSelection;
use contracts::docs::sidebar::product_options;
use contracts::docs::view::CategoryView;
use contracts::docs::Sidebar;
use leptos::prelude::*;

use crate::shared::components::ui::Select;

/// Текущий путь страницы (`/docs/my-product/page`)
fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn DocsSidebar(
    /// Структура документов; не меняется за время жизни компонента
    sidebar: Sidebar,
) -> impl IntoView {
    // Путь читается один раз при создании компонента.
    // Дальнейшие переходы без пересоздания выбор не меняют.
    let pathname = current_pathname();
    let initial = ProductSelection::from_location(&sidebar, &pathname);
    log::debug!(
        "docs sidebar: path={} initial product={:?}",
        pathname,
        initial.current()
    );

    let sidebar = StoredValue::new(sidebar);
    let selection = RwSignal::new(initial);

    let options = Signal::derive(move || sidebar.with_value(product_options));
    let value = Signal::derive(move || selection.with(ProductSelection::value));

    let on_change = Callback::new(move |product: String| {
        sidebar.with_value(|sb| {
            selection.update(|s| {
                if s.select(sb, &product) {
                    log::debug!("docs sidebar: product switched to {}", product);
                } else {
                    log::warn!("docs sidebar: unknown product {}", product);
                }
            });
        });
    });

    let product_view = Memo::new(move |_| {
        selection.with(|s| sidebar.with_value(|sb| s.product_view(sb)))
    });

    view! {
        <div class="docs-sidebar">
            <p class="docs-sidebar__label">"제품 선택"</p>
            <Select
                value=value
                options=options
                on_change=on_change
                placeholder="문서를 볼 제품을 선택하세요"
                class="docs-sidebar__select"
            />
            <ul class="docs-sidebar__products">
                {move || product_view.get().map(|pv| view! {
                    <li>
                        <ul class="docs-sidebar__categories">
                            {pv.categories.into_iter().map(category_block).collect_view()}
                        </ul>
                    </li>
                })}
            </ul>
        </div>
    }
}

fn category_block(category: CategoryView) -> impl IntoView {
    view! {
        <li>
            {category.heading.map(|heading| view! {
                <h4 class="docs-sidebar__heading">{heading}</h4>
            })}
            <ul>
                {category.links.into_iter().map(|link| view! {
                    <li class="docs-sidebar__item">
                        <a href=link.href class="docs-sidebar__link">
                            {link.label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </li>
    }
}
