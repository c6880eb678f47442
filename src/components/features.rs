use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::data;
use crate::Route;

/// Service card grid shown on the home page; each card links to the full
/// service detail page.
#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id="features" class="features">
            <style>
                {r#"
                .features {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .features-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                }
                .features-heading .kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #22c55e;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .features-heading h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .features-heading p { color: #9ca3af; font-size: 1.1rem; }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    display: block;
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 16px;
                    text-decoration: none;
                    color: inherit;
                    transition: all 0.3s ease;
                }
                .theme-dark .feature-card { background: rgba(17, 24, 39, 0.6); border: 1px solid rgba(31, 41, 55, 0.7); }
                .theme-light .feature-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 8px 20px rgba(0,0,0,0.05); }
                .feature-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(34, 197, 94, 0.5);
                    box-shadow: 0 16px 36px rgba(34, 197, 94, 0.12);
                }
                .feature-icon {
                    width: 52px;
                    height: 52px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.25rem;
                    background: rgba(34, 197, 94, 0.12);
                }
                .feature-card h3 { margin: 0 0 0.75rem; font-size: 1.25rem; }
                .feature-card p { margin: 0 0 1.25rem; color: #9ca3af; line-height: 1.6; }
                .feature-more { color: #22c55e; font-size: 0.9rem; font-weight: 600; }
                "#}
            </style>
            <div class="features-heading">
                <Reveal>
                    <p class="kicker">{"Our Services"}</p>
                </Reveal>
                <Reveal delay={0.1}>
                    <h2>{"Discover our powerful tracks"}</h2>
                </Reveal>
                <Reveal delay={0.2}>
                    <p>{"Explore DevConnect's suite of programs built to sharpen your skills, accelerate innovation, and drive lasting success."}</p>
                </Reveal>
            </div>
            <div class="features-grid">
                { for data::SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <Reveal delay={0.1 * index as f32}>
                        <Link<Route>
                            to={Route::ServiceDetail { id: service.id.to_owned() }}
                            classes="feature-card"
                        >
                            <div class="feature-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.blurb }</p>
                            <span class="feature-more">{"Learn more →"}</span>
                        </Link<Route>>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
