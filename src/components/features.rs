use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::icons::FeatureGlyph;
use crate::config::RevealConfig;
use crate::reveal::dom::SectionWatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRecord {
    pub icon: FeatureGlyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureRecord; 4] = [
    FeatureRecord {
        icon: FeatureGlyph::ChartLine,
        title: "Performance Analytics",
        description: "Detailed analysis of your game stats, identifying strengths and areas for improvement with actionable insights.",
    },
    FeatureRecord {
        icon: FeatureGlyph::Gamepad,
        title: "Mini-Games",
        description: "Fun, interactive mini-games designed to improve specific skills like last hitting, map awareness, and positioning.",
    },
    FeatureRecord {
        icon: FeatureGlyph::Robot,
        title: "AI Coaching",
        description: "Personalized advice and recommendations based on your unique playstyle and performance metrics.",
    },
    FeatureRecord {
        icon: FeatureGlyph::Trophy,
        title: "Rank Progression",
        description: "Track your improvement over time with detailed progress metrics and achievement badges to mark your growth.",
    },
];

pub const SECTION_ANCHOR: &str = "features";

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section_ref = use_node_ref();

    // Reveal the cards once, the first time the section scrolls into view
    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let watch = match SectionWatch::start(section_ref.cast::<Element>(), RevealConfig::default()) {
                    Ok(Some(watch)) => {
                        debug!("Features reveal state after mount: {:?}", watch.state());
                        Some(watch)
                    }
                    Ok(None) => None,
                    Err(err) => {
                        warn!("Feature cards will stay hidden: {}", err);
                        None
                    }
                };
                move || {
                    if let Some(watch) = watch {
                        watch.release();
                    }
                }
            },
            (), // Only on mount
        );
    }

    html! {
        <section id={SECTION_ANCHOR} class="features-section" ref={section_ref}>
            <div class="background-shape shape-1"></div>
            <div class="background-shape shape-2"></div>

            <h2 class="features-title">{"Key Features"}</h2>
            <p class="features-subtitle">
                {"Designed to help you improve every aspect of your League of Legends gameplay and reach your ranked goals faster"}
            </p>

            <div class="features-container">
                {
                    FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div key={index} class="feature-card">
                            <div class="feature-icon">{ feature.icon.render() }</div>
                            <h3 class="feature-title">{ feature.title }</h3>
                            <p class="feature-description">{ feature.description }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <style>{ FEATURES_CSS }</style>
        </section>
    }
}

const FEATURES_CSS: &str = r#"
    @keyframes features-fade-in {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    @keyframes features-pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); }
        100% { transform: scale(1); }
    }

    @keyframes features-spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }

    .features-section {
        --primary: #0a84ff;
        --accent: #c99b3c;
        --dark: #1a1a2e;
        --light: #f7f9fc;
        --text: #4a4a4a;
        padding: 120px 0;
        background-color: var(--light);
        position: relative;
        overflow: hidden;
    }

    .features-section::before {
        content: '';
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: url('/assets/images/pattern-light.png');
        opacity: 0.07;
        z-index: 0;
    }

    .features-title {
        text-align: center;
        margin-bottom: 1.5rem;
        position: relative;
        display: inline-block;
        padding-bottom: 15px;
        left: 50%;
        transform: translateX(-50%);
        font-size: 2.8rem;
        color: var(--dark);
    }

    .features-title::after {
        content: '';
        position: absolute;
        bottom: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 100px;
        height: 4px;
        background: linear-gradient(90deg, var(--primary), var(--accent));
        border-radius: 2px;
    }

    .features-subtitle {
        text-align: center;
        max-width: 700px;
        margin: 0 auto 4rem;
        color: var(--text);
        font-size: 1.2rem;
        line-height: 1.7;
    }

    .features-container {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 3rem;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 2rem;
        position: relative;
        z-index: 1;
    }

    .feature-card {
        background-color: white;
        border-radius: 12px;
        padding: 2.5rem 2rem;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.05);
        transition: all 0.4s cubic-bezier(0.175, 0.885, 0.32, 1.275);
        text-align: center;
        position: relative;
        z-index: 1;
        overflow: hidden;
    }

    .feature-card::before {
        content: '';
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 5px;
        background: linear-gradient(90deg, var(--primary), var(--accent));
        z-index: 2;
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.5s ease;
    }

    .feature-card:hover {
        transform: translateY(-15px);
        box-shadow: 0 15px 35px rgba(0, 0, 0, 0.1);
    }

    .feature-card:hover::before {
        transform: scaleX(1);
    }

    .feature-card:hover .feature-icon {
        animation: features-pulse 1.5s ease infinite;
        background: linear-gradient(135deg, var(--primary), var(--accent));
    }

    .feature-card:hover .feature-title::after {
        width: 50%;
    }

    .feature-card.fade-in {
        opacity: 0;
        animation: features-fade-in 0.8s forwards;
    }

    .feature-card.fade-in:nth-child(2) {
        animation-delay: 0.2s;
    }

    .feature-card.fade-in:nth-child(3) {
        animation-delay: 0.4s;
    }

    .feature-card.fade-in:nth-child(4) {
        animation-delay: 0.6s;
    }

    .feature-icon {
        width: 80px;
        height: 80px;
        background-color: var(--primary);
        color: white;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        margin: 0 auto 1.8rem;
        font-size: 2rem;
        position: relative;
        transition: all 0.5s ease;
        box-shadow: 0 10px 20px rgba(10, 132, 255, 0.2);
    }

    .feature-icon::before {
        content: '';
        position: absolute;
        top: -5px;
        left: -5px;
        right: -5px;
        bottom: -5px;
        border-radius: 50%;
        border: 2px dashed rgba(10, 132, 255, 0.3);
        animation: features-spin 20s linear infinite;
    }

    .feature-title {
        margin-bottom: 1rem;
        font-size: 1.7rem;
        color: var(--dark);
        position: relative;
        display: inline-block;
    }

    .feature-title::after {
        content: '';
        display: block;
        width: 0;
        height: 2px;
        background: var(--accent);
        transition: width 0.3s;
        margin: 5px auto 0;
    }

    .feature-description {
        color: #666;
        font-size: 1rem;
        line-height: 1.7;
    }

    .background-shape {
        position: absolute;
        border-radius: 50%;
        background: linear-gradient(135deg, rgba(10, 132, 255, 0.03), rgba(201, 155, 60, 0.02));
    }

    .background-shape.shape-1 {
        width: 500px;
        height: 500px;
        top: -250px;
        left: -100px;
    }

    .background-shape.shape-2 {
        width: 300px;
        height: 300px;
        bottom: -150px;
        right: -50px;
    }
"#;
