//! Site header with navigation and theme toggle

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Header(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
    dark: ReadSignal<bool>,
    set_dark: WriteSignal<bool>,
) -> impl IntoView {
    let nav_items = [(Page::Gallery, "Posters"), (Page::About, "About")];

    view! {
        <header class="header">
            <div class="header-inner">
                <h1 class="brand" on:click=move |_| set_current_page.set(Page::Gallery)>
                    "SANTIAGO.POSTERS"
                </h1>

                <nav class="nav">
                    {nav_items
                        .into_iter()
                        .map(|(page, label)| {
                            view! {
                                <button
                                    class="nav-link"
                                    class:active=move || current_page.get() == page
                                    on:click=move |_| set_current_page.set(page)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    class="theme-toggle"
                    on:click=move |_| set_dark.update(|d| *d = !*d)
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
