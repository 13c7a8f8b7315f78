use yew::prelude::*;

use crate::components::features::{FeaturesSection, SECTION_ANCHOR};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Climb the Ladder Faster"}</h1>
                <p class="hero-subtitle">
                    {"Coaching, drills and analytics built around the way you actually play."}
                </p>
                <a class="hero-cta" href={format!("#{}", SECTION_ANCHOR)}>{"See What's Inside"}</a>
            </section>

            <FeaturesSection />

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                    }

                    .hero {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem;
                    }

                    .hero h1 {
                        font-size: 3.2rem;
                        margin-bottom: 1rem;
                    }

                    .hero-subtitle {
                        font-size: 1.3rem;
                        max-width: 600px;
                        margin-bottom: 2rem;
                    }

                    .hero-cta {
                        padding: 1rem 2.5rem;
                        border-radius: 8px;
                        background: #0a84ff;
                        color: white;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Page not found"}</h1>
            </section>
        </div>
    }
}
