use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::components::slider::ImageSlider;
use crate::config;
use crate::data::{self, Service};
use crate::theme::use_theme;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Benefits,
    Steps,
}

impl DetailTab {
    fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Benefits => "What you get",
            DetailTab::Steps => "How it works",
        }
    }
}

const TABS: &[DetailTab] = &[DetailTab::Overview, DetailTab::Benefits, DetailTab::Steps];

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: AttrValue,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let ctx = use_theme();
    let active_tab = use_state(|| DetailTab::Overview);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let Some(service) = data::find_service(&props.id) else {
        return html! {
            <div class={classes!("page", ctx.theme.class())}>
                <Navbar />
                <main style="min-height:60vh;display:flex;align-items:center;justify-content:center;padding-top:6rem;">
                    <p>
                        {"Service not found. "}
                        <Link<Route> to={Route::Services}>{"Back to services"}</Link<Route>>
                    </p>
                </main>
                <Footer />
            </div>
        };
    };

    let position = data::SERVICES
        .iter()
        .position(|s| s.id == service.id)
        .unwrap_or(0);
    let prev: &Service = &data::SERVICES[(position + data::SERVICES.len() - 1) % data::SERVICES.len()];
    let next: &Service = &data::SERVICES[(position + 1) % data::SERVICES.len()];

    let gallery: Vec<AttrValue> = service
        .gallery
        .iter()
        .map(|src| AttrValue::from(*src))
        .collect();

    html! {
        <div class={classes!("page", ctx.theme.class())}>
            <style>
                {r#"
                .detail-page { max-width: 1100px; margin: 0 auto; padding: 9rem 1.5rem 4rem; }
                .detail-back { margin-bottom: 2rem; }
                .detail-back a { color: #9ca3af; text-decoration: none; font-size: 0.9rem; }
                .detail-back a:hover { color: #22c55e; }
                .detail-header { margin-bottom: 3rem; }
                .detail-header .icon { font-size: 2.5rem; margin-bottom: 1rem; }
                .detail-header h1 { font-size: clamp(2rem, 5vw, 3rem); margin: 0 0 1rem; }
                .detail-header p { color: #9ca3af; font-size: 1.15rem; max-width: 680px; }
                .detail-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                @media (max-width: 860px) { .detail-grid { grid-template-columns: 1fr; } }
                .detail-tabs { display: flex; gap: 0.5rem; margin: 2.5rem 0 1.5rem; }
                .detail-tab {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid rgba(107, 114, 128, 0.35);
                    background: transparent;
                    color: inherit;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .detail-tab.active { background: #16a34a; border-color: #16a34a; color: #fff; }
                .detail-panel { color: #9ca3af; line-height: 1.7; }
                .detail-panel ul { margin: 0; padding-left: 0; list-style: none; }
                .detail-panel li {
                    padding: 0.6rem 0 0.6rem 1.75rem;
                    position: relative;
                }
                .detail-panel li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #22c55e;
                    font-weight: 700;
                }
                .detail-panel ol {
                    margin: 0;
                    padding-left: 0;
                    list-style: none;
                    counter-reset: step;
                }
                .detail-panel ol li::before {
                    content: counter(step);
                    counter-increment: step;
                    width: 20px;
                    height: 20px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.15);
                    color: #22c55e;
                    font-size: 0.75rem;
                    top: 0.55rem;
                }
                .price-card {
                    border-radius: 16px;
                    padding: 1.75rem;
                    position: sticky;
                    top: 6.5rem;
                }
                .theme-dark .price-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .price-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 12px 32px rgba(0,0,0,0.07); }
                .price-card .amount { font-size: 2rem; font-weight: 700; color: #22c55e; }
                .price-card .term { color: #9ca3af; font-size: 0.9rem; margin-bottom: 1.5rem; }
                .price-card .apply {
                    display: block;
                    padding: 0.9rem;
                    border-radius: 10px;
                    text-align: center;
                    text-decoration: none;
                    font-weight: 600;
                    color: #fff;
                    background: linear-gradient(to right, #16a34a, #4ade80);
                    transition: filter 0.3s ease;
                }
                .price-card .apply:hover { filter: brightness(1.08); }
                .detail-nav {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(107, 114, 128, 0.25);
                }
                .detail-nav a {
                    text-decoration: none;
                    color: inherit;
                    transition: color 0.3s ease;
                }
                .detail-nav a:hover { color: #22c55e; }
                .detail-nav .hint { display: block; font-size: 0.8rem; color: #6b7280; }
                .detail-nav .next { text-align: right; }
                "#}
            </style>
            <Navbar />
            <main class="detail-page">
                <div class="detail-back">
                    <Link<Route> to={Route::Services}>{"← All services"}</Link<Route>>
                </div>
                <Reveal>
                    <header class="detail-header">
                        <div class="icon">{ service.icon }</div>
                        <h1>{ service.title }</h1>
                        <p>{ service.blurb }</p>
                    </header>
                </Reveal>
                <div class="detail-grid">
                    <div>
                        <Reveal delay={0.1}>
                            <ImageSlider key={service.id} images={gallery} />
                        </Reveal>
                        <div class="detail-tabs">
                            { for TABS.iter().map(|tab| {
                                let active_tab = active_tab.clone();
                                let tab = *tab;
                                let onclick = {
                                    let active_tab = active_tab.clone();
                                    Callback::from(move |_: MouseEvent| active_tab.set(tab))
                                };
                                html! {
                                    <button
                                        class={classes!("detail-tab", (*active_tab == tab).then(|| "active"))}
                                        {onclick}
                                    >{ tab.label() }</button>
                                }
                            }) }
                        </div>
                        <div class="detail-panel">
                            {
                                match *active_tab {
                                    DetailTab::Overview => html! {
                                        <p>{ service.long_description }</p>
                                    },
                                    DetailTab::Benefits => html! {
                                        <ul>
                                            { for service.benefits.iter().map(|benefit| html! {
                                                <li>{ *benefit }</li>
                                            }) }
                                        </ul>
                                    },
                                    DetailTab::Steps => html! {
                                        <ol>
                                            { for service.steps.iter().map(|step| html! {
                                                <li>{ *step }</li>
                                            }) }
                                        </ol>
                                    },
                                }
                            }
                        </div>
                    </div>
                    <Reveal delay={0.2}>
                        <aside class="price-card">
                            <div class="amount">
                                {
                                    if service.price == "Free" {
                                        service.price.to_owned()
                                    } else {
                                        format!("₦{}", service.price)
                                    }
                                }
                            </div>
                            <div class="term">
                                {
                                    if service.months == "ongoing" {
                                        "Ongoing · community membership".to_owned()
                                    } else {
                                        format!("{} months · hands-on cohort", service.months)
                                    }
                                }
                            </div>
                            <a
                                class="apply"
                                href={config::APPLY_FORM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >{"Apply for this track"}</a>
                        </aside>
                    </Reveal>
                </div>
                <nav class="detail-nav">
                    <Link<Route> to={Route::ServiceDetail { id: prev.id.to_owned() }}>
                        <span class="hint">{"Previous"}</span>
                        { format!("← {}", prev.title) }
                    </Link<Route>>
                    <Link<Route> to={Route::ServiceDetail { id: next.id.to_owned() }} classes="next">
                        <span class="hint">{"Next"}</span>
                        { format!("{} →", next.title) }
                    </Link<Route>>
                </nav>
            </main>
            <Footer />
        </div>
    }
}
