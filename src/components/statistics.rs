use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data;

#[function_component(Statistics)]
pub fn statistics() -> Html {
    html! {
        <section class="statistics">
            <style>
                {r#"
                .statistics {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .statistics-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                }
                .statistics-heading h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .statistics-heading h2 .accent { color: #22c55e; }
                .statistics-heading p { color: #9ca3af; font-size: 1.1rem; }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .stat-card {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 14px;
                    text-align: center;
                    transition: all 0.4s ease;
                }
                .theme-dark .stat-card { background: rgba(17, 24, 39, 0.85); border: 1px solid rgba(55, 65, 81, 0.4); }
                .theme-light .stat-card { background: rgba(255, 255, 255, 0.85); border: 1px solid rgba(229, 231, 235, 0.6); box-shadow: 0 8px 20px rgba(0,0,0,0.06); }
                .stat-card:hover { transform: translateY(-3px); border-color: rgba(34, 197, 94, 0.4); }
                .stat-icon { font-size: 1.75rem; margin-bottom: 1rem; }
                .stat-value {
                    font-size: 2.4rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(135deg, #16a34a, #4ade80);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat-label { color: #9ca3af; font-size: 1rem; }
                .stats-footer { margin-top: 3.5rem; text-align: center; }
                .stats-footer .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    color: #22c55e;
                    border: 1px solid rgba(34, 197, 94, 0.35);
                    background: rgba(34, 197, 94, 0.08);
                }
                "#}
            </style>
            <div class="statistics-heading">
                <Reveal>
                    <h2>{"Our Impact in "}<span class="accent">{"Numbers"}</span></h2>
                </Reveal>
                <Reveal delay={0.1}>
                    <p>{"See the real-world impact of DevConnect on builders and teams around the globe."}</p>
                </Reveal>
            </div>
            <div class="stats-grid">
                { for data::STATS.iter().enumerate().map(|(index, stat)| html! {
                    <Reveal delay={0.1 * index as f32}>
                        <div class="stat-card">
                            <div class="stat-icon">{ stat.icon }</div>
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    </Reveal>
                }) }
            </div>
            <Reveal delay={0.5}>
                <div class="stats-footer">
                    <span class="pill">
                        <span>{"🚀"}</span>
                        <span>{"Growing every day with new members and integrations"}</span>
                    </span>
                </div>
            </Reveal>
        </section>
    }
}
