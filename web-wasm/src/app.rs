//! Main application component

use leptos::prelude::*;

use crate::components::{
    art_gallery::ArtGallery,
    footer::Footer,
    header::Header,
    pages::{about::AboutPage, privacy::PrivacyPage, terms::TermsPage},
};

/// Top-level navigation target
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Gallery,
    About,
    Privacy,
    Terms,
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Gallery);
    let (dark, set_dark) = signal(false);

    view! {
        <div class=move || {
            if dark.get() { "app dark" } else { "app" }
        }>
            <Header
                current_page=current_page
                set_current_page=set_current_page
                dark=dark
                set_dark=set_dark
            />

            <main class="content">
                {move || match current_page.get() {
                    Page::Gallery => view! { <ArtGallery /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Privacy => view! { <PrivacyPage /> }.into_any(),
                    Page::Terms => view! { <TermsPage /> }.into_any(),
                }}
            </main>

            <Footer set_current_page=set_current_page />
        </div>
    }
}
