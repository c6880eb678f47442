use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    margin-top: 4rem;
                    padding: 4rem 1.5rem 2rem;
                    border-top: 1px solid rgba(107, 114, 128, 0.25);
                }
                .footer-inner { max-width: 1100px; margin: 0 auto; }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2.5rem;
                    margin-bottom: 3rem;
                }
                @media (max-width: 768px) { .footer-grid { grid-template-columns: 1fr 1fr; } }
                .footer-brand .logo { font-size: 1.3rem; margin-bottom: 0.75rem; }
                .footer-brand .logo .light { color: #22c55e; font-weight: 300; }
                .footer-brand .logo .bold { color: #16a34a; font-weight: 700; }
                .footer-brand p { color: #9ca3af; font-size: 0.95rem; line-height: 1.6; max-width: 280px; }
                .footer-col h4 {
                    margin: 0 0 1rem;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                }
                .footer-col a {
                    display: block;
                    margin-bottom: 0.6rem;
                    color: inherit;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }
                .footer-col a:hover { color: #22c55e; }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(107, 114, 128, 0.2);
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="logo">
                            <span class="light">{"Dev"}</span>
                            <span class="bold">{"Connect"}</span>
                        </div>
                        <p>{"A coding hub and innovation community building the next generation of tech leaders."}</p>
                    </div>
                    <div class="footer-col">
                        <h4>{"Site"}</h4>
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                        <a href="/#events">{"Events"}</a>
                        <a href="/#roadmap">{"Roadmap"}</a>
                    </div>
                    <div class="footer-col">
                        <h4>{"Community"}</h4>
                        <a href={config::COMMUNITY_TWITTER_URL} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                        <a href={config::COMMUNITY_GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={config::APPLY_FORM_URL} target="_blank" rel="noopener noreferrer">{"Apply"}</a>
                    </div>
                    <div class="footer-col">
                        <h4>{"Contact"}</h4>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"Email us"}</a>
                        <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">{"Book a call"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{ format!("© {year} DevConnect. All rights reserved.") }</span>
                    <span>{"Built by the community, for the community."}</span>
                </div>
            </div>
        </footer>
    }
}
