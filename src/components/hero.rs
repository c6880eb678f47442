use yew::prelude::*;

use crate::components::particles::ParticleField;
use crate::components::reveal::Reveal;
use crate::config;
use crate::theme::use_theme;

#[function_component(Hero)]
pub fn hero() -> Html {
    let ctx = use_theme();
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                loaded.set(true);
                || ()
            },
            (),
        );
    }

    let backdrop = if ctx.theme.is_dark() {
        "radial-gradient(circle at 50% 50%, rgba(34, 197, 94, 0.15) 0%, rgba(0, 0, 0, 0) 50%)"
    } else {
        "radial-gradient(circle at 50% 50%, rgba(187, 247, 208, 0.4) 0%, rgba(255, 255, 255, 0) 50%)"
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    padding: 10rem 1.5rem 5rem;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    transition: opacity 1s ease;
                }
                .hero-orb {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    transition: opacity 1s ease;
                    animation: orb-float 8s ease-in-out infinite alternate;
                }
                .hero-orb.left { top: 25%; left: 15%; }
                .hero-orb.right { bottom: 25%; right: 15%; animation-delay: 2s; }
                .theme-dark .hero-orb.left { background: rgba(21, 128, 61, 0.12); }
                .theme-dark .hero-orb.right { background: rgba(37, 99, 235, 0.1); }
                .theme-light .hero-orb.left { background: rgba(134, 239, 172, 0.25); }
                .theme-light .hero-orb.right { background: rgba(191, 219, 254, 0.25); }
                @keyframes orb-float {
                    from { transform: translateY(0); }
                    to { transform: translateY(-24px); }
                }
                .hero-inner {
                    position: relative;
                    z-index: 2;
                    max-width: 880px;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.35rem 0.9rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    border: 1px solid rgba(34, 197, 94, 0.35);
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.08);
                }
                .hero-badge .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #22c55e;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 6vw, 3.8rem);
                    line-height: 1.15;
                    margin: 0 0 1.5rem;
                }
                .hero h1 .accent { color: #22c55e; }
                .hero-sub {
                    max-width: 620px;
                    margin: 0 auto 2.5rem;
                    color: #9ca3af;
                    font-size: 1.05rem;
                    line-height: 1.6;
                }
                .hero-cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3.5rem;
                }
                .hero-cta {
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    font-size: 1.05rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-cta.primary {
                    background: #000;
                    color: #fff;
                    border: 1px solid #16a34a;
                    box-shadow: 0 0 24px rgba(34, 197, 94, 0.25);
                }
                .hero-cta.primary:hover { background: #111827; }
                .hero-cta.outline {
                    border: 1px solid #374151;
                    color: inherit;
                    background: transparent;
                }
                .hero-cta.outline:hover { border-color: #22c55e; }
                .hero-panel {
                    position: relative;
                    height: clamp(240px, 45vw, 480px);
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(34, 197, 94, 0.2);
                    background: linear-gradient(135deg, rgba(34, 197, 94, 0.12), rgba(37, 99, 235, 0.08));
                    transition: transform 0.5s ease;
                }
                .hero-panel:hover { transform: scale(1.01); }
                .hero-panel-copy {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .hero-panel-copy .mark { font-size: 3rem; }
                .hero-panel-copy p { color: #9ca3af; margin: 0; }
                "#}
            </style>
            <div
                class="hero-backdrop"
                style={format!(
                    "background:{};opacity:{};",
                    backdrop,
                    if *loaded { 1 } else { 0 }
                )}
            ></div>
            <div class="hero-orb left" style={format!("opacity:{};", if *loaded { 1 } else { 0 })}></div>
            <div class="hero-orb right" style={format!("opacity:{};", if *loaded { 1 } else { 0 })}></div>
            <div class="hero-inner">
                <Reveal delay={0.1}>
                    <div class="hero-badge">
                        <span class="dot"></span>
                        <span>{"Introducing DevConnect"}</span>
                    </div>
                </Reveal>
                <Reveal delay={0.2}>
                    <h1>
                        {"The "}<span class="accent">{"Next Generation"}</span>{" of Tech Leaders"}
                    </h1>
                </Reveal>
                <Reveal delay={0.3}>
                    <p class="hero-sub">
                        {"Empower your future by learning, building, and collaborating — scaling your impact in Africa's fastest-growing developer network."}
                    </p>
                </Reveal>
                <Reveal delay={0.4}>
                    <div class="hero-cta-row">
                        <a
                            class="hero-cta primary"
                            href={config::APPLY_FORM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >{"Apply"}</a>
                        <a
                            class="hero-cta outline"
                            href={config::BOOKING_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >{"Enquiries"}</a>
                    </div>
                </Reveal>
                <Reveal delay={0.5}>
                    <div class="hero-panel">
                        <ParticleField count={18} />
                        <div class="hero-panel-copy">
                            <span class="mark">{"⌬"}</span>
                            <p>{"Learn. Build. Connect."}</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
