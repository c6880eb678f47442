use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <style>
                {r#"
                .cta {
                    padding: 5rem 1.5rem;
                }
                .cta-card {
                    position: relative;
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    border-radius: 24px;
                    overflow: hidden;
                    text-align: center;
                }
                .theme-dark .cta-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(55, 65, 81, 0.4); }
                .theme-light .cta-card { background: rgba(255, 255, 255, 0.85); border: 1px solid rgba(255, 255, 255, 0.4); box-shadow: 0 24px 60px rgba(0,0,0,0.1); }
                .cta-card::before {
                    content: '';
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 100%;
                    height: 2px;
                    background: linear-gradient(to right, transparent, #4ade80, transparent);
                }
                .cta-card h2 { font-size: 2.4rem; margin: 0 0 1.25rem; }
                .cta-card p { color: #9ca3af; font-size: 1.15rem; margin: 0 auto 2rem; max-width: 560px; }
                .cta-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .cta-button {
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .cta-button.primary {
                    color: #fff;
                    background: linear-gradient(to right, #16a34a, #4ade80);
                    box-shadow: 0 12px 28px rgba(34, 197, 94, 0.25);
                }
                .cta-button.primary:hover { filter: brightness(1.08); }
                .cta-button.ghost {
                    color: inherit;
                    border: 1px solid rgba(107, 114, 128, 0.4);
                }
                .cta-button.ghost:hover { border-color: #22c55e; }
                "#}
            </style>
            <div class="cta-card">
                <Reveal>
                    <h2>{"Ready to transform your experience?"}</h2>
                </Reveal>
                <Reveal delay={0.1}>
                    <p>{"Join thousands of developers and innovators at DevConnect to learn, build, and boost your productivity. Be part of the movement today."}</p>
                </Reveal>
                <Reveal delay={0.2}>
                    <div class="cta-buttons">
                        <a
                            class="cta-button primary"
                            href={config::BOOKING_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >{"Get Started Free"}</a>
                        <a
                            class="cta-button ghost"
                            href={config::APPLY_FORM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >{"Apply to a Track"}</a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
