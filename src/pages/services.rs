use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::data;
use crate::theme::use_theme;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    let ctx = use_theme();

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
        <div class={classes!("page", ctx.theme.class())}>
            <style>
                {r#"
                .services-page { max-width: 1200px; margin: 0 auto; padding: 9rem 1.5rem 4rem; }
                .services-back { margin-bottom: 2rem; }
                .services-back a {
                    color: #9ca3af;
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                }
                .services-back a:hover { color: #22c55e; }
                .services-heading {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 4rem;
                }
                .services-heading .kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #22c55e;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .services-heading h1 { font-size: clamp(2rem, 5vw, 3rem); margin: 0 0 1.25rem; }
                .services-heading p { color: #9ca3af; font-size: 1.15rem; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    box-sizing: border-box;
                    border-radius: 16px;
                    overflow: hidden;
                    text-decoration: none;
                    color: inherit;
                    transition: all 0.3s ease;
                }
                .theme-dark .service-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .service-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 8px 24px rgba(0,0,0,0.06); }
                .service-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(34, 197, 94, 0.5);
                    box-shadow: 0 18px 40px rgba(34, 197, 94, 0.12);
                }
                .service-card-image { height: 180px; overflow: hidden; }
                .service-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.6s ease;
                }
                .service-card:hover .service-card-image img { transform: scale(1.05); }
                .service-card-body { padding: 1.5rem; flex: 1; }
                .service-card-body h3 { margin: 0 0 0.6rem; display: flex; align-items: center; gap: 0.5rem; }
                .service-card-body p { margin: 0 0 1rem; color: #9ca3af; line-height: 1.6; }
                .service-card-footer {
                    padding: 0 1.5rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .service-price { font-weight: 700; color: #22c55e; }
                .service-more { color: #22c55e; font-size: 0.9rem; font-weight: 600; }
                "#}
            </style>
            <Navbar />
            <main class="services-page">
                <div class="services-back">
                    <Link<Route> to={Route::Home}>{"← Home"}</Link<Route>>
                </div>
                <div class="services-heading">
                    <Reveal>
                        <p class="kicker">{"Our Services"}</p>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <h1>{"Discover our powerful tracks"}</h1>
                    </Reveal>
                    <Reveal delay={0.2}>
                        <p>{"Explore DevConnect's suite of programs built to sharpen your skills, accelerate innovation, and drive lasting success."}</p>
                    </Reveal>
                </div>
                <div class="services-grid">
                    { for data::SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal delay={0.1 * index as f32}>
                            <Link<Route>
                                to={Route::ServiceDetail { id: service.id.to_owned() }}
                                classes="service-card"
                            >
                                <div class="service-card-image">
                                    <img src={service.image} alt={service.title} loading="lazy" />
                                </div>
                                <div class="service-card-body">
                                    <h3><span>{ service.icon }</span>{ service.title }</h3>
                                    <p>{ service.blurb }</p>
                                </div>
                                <div class="service-card-footer">
                                    <span class="service-price">{ service.price }</span>
                                    <span class="service-more">{"View details →"}</span>
                                </div>
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>
            </main>
            <Footer />
        </div>
    }
}
