use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::data::{self, EventKind};

#[function_component(Events)]
pub fn events() -> Html {
    let upcoming = data::events();

    html! {
        <section id="events" class="events">
            <style>
                {r#"
                .events {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    text-align: center;
                }
                .events h2 {
                    font-size: 2.5rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #22c55e;
                    margin: 0 0 0.75rem;
                }
                .events .subtitle { font-size: 1.4rem; margin: 0 0 3rem; }
                .events-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }
                .event-card {
                    width: 360px;
                    display: flex;
                    flex-direction: column;
                    border-radius: 16px;
                    overflow: hidden;
                    text-align: left;
                    transition: all 0.3s ease;
                }
                .theme-dark .event-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .event-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 8px 24px rgba(0,0,0,0.06); }
                .event-card:hover { border-color: rgba(34, 197, 94, 0.45); }
                .event-body { padding: 1.5rem; flex: 1; }
                .event-body h3 { margin: 0 0 0.5rem; color: #22c55e; }
                .event-body .description { margin: 0 0 1.25rem; color: #9ca3af; }
                .event-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.9rem;
                    padding: 0.9rem;
                    border-radius: 10px;
                    border: 1px solid rgba(107, 114, 128, 0.3);
                    margin-bottom: 1.25rem;
                }
                .event-meta .bell { font-size: 1.2rem; }
                .event-meta .where { font-weight: 600; font-size: 0.9rem; }
                .event-meta .when { color: #9ca3af; font-size: 0.85rem; }
                .event-badge {
                    margin-left: auto;
                    padding: 0.4rem 1rem;
                    border-radius: 8px;
                    border: none;
                    font-size: 0.8rem;
                    font-weight: 700;
                    color: #fff;
                }
                .event-badge.free { background: #16a34a; }
                .event-badge.paid { background: #ca8a04; }
                .event-image { border-radius: 12px; overflow: hidden; }
                .event-image img { display: block; width: 100%; height: 160px; object-fit: cover; }
                .event-register {
                    display: block;
                    margin: 0 1.5rem 1.5rem;
                    padding: 0.8rem;
                    border-radius: 10px;
                    text-align: center;
                    text-decoration: none;
                    font-weight: 600;
                    color: #fff;
                    background: #16a34a;
                    transition: background 0.3s ease;
                }
                .event-register:hover { background: #15803d; }
                "#}
            </style>
            <Reveal>
                <h2>{"Our Upcoming Events"}</h2>
            </Reveal>
            <Reveal delay={0.1}>
                <p class="subtitle">{"Supercharge your workflow"}</p>
            </Reveal>
            <div class="events-grid">
                { for upcoming.iter().enumerate().map(|(index, event)| html! {
                    <Reveal delay={0.1 * index as f32}>
                        <div class="event-card">
                            <div class="event-body">
                                <h3>{ event.name }</h3>
                                <p class="description">{ event.description }</p>
                                <div class="event-meta">
                                    <span class="bell">{"🔔"}</span>
                                    <div>
                                        <div class="where">{ event.location }</div>
                                        <div class="when">
                                            { format!("{} · {}", event.date.format("%b %e, %Y"), event.time) }
                                        </div>
                                    </div>
                                    <span class={classes!(
                                        "event-badge",
                                        if event.kind == EventKind::Paid { "paid" } else { "free" },
                                    )}>
                                        { if event.kind == EventKind::Paid { "Paid" } else { "Free" } }
                                    </span>
                                </div>
                                <div class="event-image">
                                    <img src={event.image} alt={event.name} loading="lazy" />
                                </div>
                            </div>
                            <a
                                class="event-register"
                                href={config::BOOKING_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >{"✓ Register"}</a>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
