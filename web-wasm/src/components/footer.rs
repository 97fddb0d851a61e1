//! Site footer with quick links and legal navigation

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Footer(set_current_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>"SANTIAGO.POSTERS"</h3>
                    <p class="text-muted">
                        "Contemporary poster designer specializing in visual communication \
                         and graphic storytelling. Based in Barcelona, creating impactful \
                         designs that bridge art and commercial application."
                    </p>
                </div>

                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <nav>
                        <button on:click=move |_| set_current_page.set(Page::Gallery)>
                            "Poster Gallery"
                        </button>
                        <button on:click=move |_| set_current_page.set(Page::About)>
                            "About Santiago"
                        </button>
                        <a href="mailto:santiago@santiago.gallery">"Contact"</a>
                    </nav>
                </div>

                <div class="footer-links">
                    <h4>"Legal"</h4>
                    <nav>
                        <button on:click=move |_| set_current_page.set(Page::Privacy)>
                            "Privacy Policy"
                        </button>
                        <button on:click=move |_| set_current_page.set(Page::Terms)>
                            "Terms & Conditions"
                        </button>
                    </nav>
                </div>
            </div>

            <div class="footer-bottom">
                <p>"© 2025 Santiago Camiro. All rights reserved."</p>
                <p>"Poster Designer • Visual Communication • Print & Digital Design"</p>
            </div>
        </footer>
    }
}
