//! About page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let skills = [
        "Typography",
        "Layout Design",
        "Color Theory",
        "Digital Illustration",
        "Print Design",
        "Screen Printing",
        "Offset Printing",
        "Digital Art",
        "Concept Development",
        "Visual Identity",
        "Brand Design",
        "Event Posters",
        "Art Direction",
        "Visual Communication",
    ];

    view! {
        <div class="page">
            <div class="about-hero">
                <img
                    src="https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=500&h=600&fit=crop&crop=face"
                    alt="Santiago Camiro"
                />
                <div>
                    <h1>"About Santiago Camiro"</h1>
                    <p>
                        "Contemporary poster designer specializing in visual communication \
                         and impactful graphic design. My work bridges the gap between \
                         artistic expression and commercial application, creating posters \
                         that inform, inspire, and captivate audiences."
                    </p>
                    <ul class="about-facts">
                        <li>"Based in Barcelona, Spain"</li>
                        <li>"Designer since 2018"</li>
                        <li>"Poster Design & Visual Communication"</li>
                    </ul>
                </div>
            </div>

            <section class="about-section">
                <h2>"Design Philosophy"</h2>
                <div class="philosophy-grid">
                    <div>
                        <h3>"Clear Communication"</h3>
                        <p class="text-muted">
                            "Every poster delivers its message with clarity and impact, \
                             ensuring the intended communication reaches its audience \
                             effectively."
                        </p>
                    </div>
                    <div>
                        <h3>"Design Innovation"</h3>
                        <p class="text-muted">
                            "Combining traditional poster design principles with \
                             cutting-edge digital techniques to create memorable visual \
                             experiences."
                        </p>
                    </div>
                    <div>
                        <h3>"Cultural Connection"</h3>
                        <p class="text-muted">
                            "Drawing inspiration from diverse cultural experiences and \
                             global artistic traditions, especially Mediterranean \
                             influences."
                        </p>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <h2>"Design Journey"</h2>
                <div class="journey">
                    <div class="journey-entry">
                        <h3>"2024 · Poster Revolution"</h3>
                        <p class="text-muted">
                            "Launched Santiago.Posters as an independent design studio, \
                             focusing on the intersection of visual communication and \
                             artistic expression. This period marks a commitment to \
                             impactful, purpose-driven poster design."
                        </p>
                    </div>
                    <div class="journey-entry">
                        <h3>"2022–2023 · Mixed Media Exploration"</h3>
                        <p class="text-muted">
                            "Developed signature techniques combining oil painting with \
                             digital elements, creating works that challenge the boundaries \
                             between physical and virtual art spaces."
                        </p>
                    </div>
                    <div class="journey-entry">
                        <h3>"2018–2021 · Foundation Years"</h3>
                        <p class="text-muted">
                            "Established artistic practice with focus on contemporary \
                             themes, developing a unique voice in the independent art scene \
                             through extensive experimentation and study."
                        </p>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <h2>"Skills & Techniques"</h2>
                <ul class="skill-tags">
                    {skills
                        .into_iter()
                        .map(|skill| view! { <li>{skill}</li> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
