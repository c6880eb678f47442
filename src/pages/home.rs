use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::book_call::BookCall;
use crate::components::brands::AssociatedBrands;
use crate::components::call_to_action::CallToAction;
use crate::components::events::Events;
use crate::components::faq::Faq;
use crate::components::features::FeaturesSection;
use crate::components::footer::Footer;
use crate::components::gallery::MasonryGallery;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::particles::ParticleField;
use crate::components::roadmap::Roadmap;
use crate::components::statistics::Statistics;
use crate::components::team::CoreTeam;
use crate::components::testimonials::Testimonials;
use crate::theme::use_theme;

#[function_component(Home)]
pub fn home() -> Html {
    let ctx = use_theme();
    let loading = use_state(|| true);

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

    // Intro overlay; the timeout is dropped on unmount so navigating away
    // early never flips state on a dead page.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(2200, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={classes!("page", ctx.theme.class())}>
            <style>
                {r#"
                .loader-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .theme-dark .loader-overlay { background: #030712; }
                .theme-light .loader-overlay { background: #f3f4f6; }
                .loader-middle { position: relative; z-index: 2; text-align: center; }
                .loader-orb {
                    width: 88px;
                    height: 88px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: loader-pop 1.2s ease-out;
                }
                .loader-orb .core {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #86efac, #22c55e);
                    animation: loader-pulse 2s ease-in-out infinite;
                }
                @keyframes loader-pop {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                @keyframes loader-pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(0.9); }
                }
                .loader-text { font-size: 2rem; animation: loader-rise 0.8s ease-out; }
                .loader-text .light { color: #22c55e; font-weight: 300; }
                .loader-text .bold { color: #16a34a; font-weight: 700; }
                @keyframes loader-rise {
                    from { transform: translateY(40px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            {
                if *loading {
                    html! {
                        <div class="loader-overlay">
                            <ParticleField count={30} />
                            <div class="loader-middle">
                                <div class="loader-orb"><div class="core"></div></div>
                                <div class="loader-text">
                                    <span class="light">{"Dev"}</span>
                                    <span class="bold">{"Connect"}</span>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <Navbar />
            <main>
                <Hero />
                <AssociatedBrands />
                <FeaturesSection />
                <Statistics />
                <MasonryGallery />
                <CoreTeam />
                <Testimonials />
                <Events />
                <Roadmap />
                <BookCall />
                <CallToAction />
                <Faq />
            </main>
            <Footer />
        </div>
    }
}
