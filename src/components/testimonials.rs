use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::{self, Testimonial};
use crate::engine::carousel::{Carousel, CarouselOptions};

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| {
        Carousel::new(data::TESTIMONIALS.len(), CarouselOptions::default())
    });

    // Exactly one autoplay timer. The effect is keyed on timer_key(), so any
    // index/pause/interval change drops the old interval before a new one is
    // armed, and a manual click restarts the period.
    {
        let key = carousel.timer_key();
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = if carousel.should_autoplay() {
                    let ms = carousel.interval_ms();
                    let carousel = carousel.clone();
                    Some(Interval::new(ms, move || {
                        let mut next = (*carousel).clone();
                        next.next();
                        carousel.set(next);
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            key,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.prev();
            carousel.set(next);
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.next();
            carousel.set(next);
        })
    };
    let on_controls_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.pause();
            carousel.set(next);
        })
    };
    let on_controls_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.resume();
            carousel.set(next);
        })
    };

    let active = carousel.active_index();

    html! {
        <section id="testimonials" class="testimonials">
            <style>
                {r#"
                .testimonials {
                    padding: 5rem 1.5rem;
                    position: relative;
                    overflow: hidden;
                }
                .testimonials-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }
                .testimonials-heading h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    color: #22c55e;
                }
                .testimonials-heading p {
                    color: #9ca3af;
                    font-size: 1.1rem;
                }
                .slides-viewport {
                    max-width: 720px;
                    margin: 0 auto;
                    overflow: hidden;
                }
                .slides-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .testimonial-card {
                    flex: 0 0 100%;
                    min-width: 0;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(34, 197, 94, 0.15);
                }
                .theme-dark .testimonial-card { background: rgba(17, 24, 39, 0.6); }
                .theme-light .testimonial-card { background: rgba(255, 255, 255, 0.85); box-shadow: 0 8px 24px rgba(0,0,0,0.08); }
                .testimonial-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .testimonial-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    background: rgba(34, 197, 94, 0.15);
                    color: #22c55e;
                    border: 2px solid rgba(34, 197, 94, 0.4);
                }
                .testimonial-name { font-weight: 600; }
                .testimonial-role { font-size: 0.85rem; color: #9ca3af; }
                .testimonial-stars { margin-left: auto; letter-spacing: 2px; }
                .star-filled { color: #eab308; }
                .star-empty { color: #4b5563; }
                .testimonial-quote { color: #9ca3af; line-height: 1.6; }
                .carousel-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .carousel-arrow {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 1px solid rgba(34, 197, 94, 0.4);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-arrow:hover:not(:disabled) { background: rgba(34, 197, 94, 0.15); }
                .carousel-arrow:disabled { opacity: 0.35; cursor: default; }
                .carousel-dots { display: flex; gap: 6px; }
                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    padding: 0;
                    border: none;
                    border-radius: 4px;
                    background: #4b5563;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot.active { width: 24px; background: #22c55e; }
                "#}
            </style>
            <Reveal>
                <div class="testimonials-heading">
                    <h2>{"What Our Members Say"}</h2>
                    <p>{"Discover how DevConnect brings innovators and developers together to shape the future of technology."}</p>
                </div>
            </Reveal>
            <div class="slides-viewport">
                <div
                    class="slides-track"
                    style={format!("transform:translateX(-{}%);", active * 100)}
                >
                    { for data::TESTIMONIALS.iter().map(testimonial_card) }
                </div>
            </div>
            <div
                class="carousel-controls"
                onmouseenter={on_controls_enter}
                onmouseleave={on_controls_leave}
            >
                <button
                    class="carousel-arrow"
                    onclick={on_prev}
                    disabled={!carousel.can_retreat()}
                    aria-label="Previous testimonial"
                >{"‹"}</button>
                <div class="carousel-dots">
                    { for (0..carousel.len()).map(|index| {
                        let carousel = carousel.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*carousel).clone();
                            next.go_to(index);
                            carousel.set(next);
                        });
                        html! {
                            <button
                                class={classes!("carousel-dot", (index == active).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                            ></button>
                        }
                    }) }
                </div>
                <button
                    class="carousel-arrow"
                    onclick={on_next}
                    disabled={!carousel.can_advance()}
                    aria-label="Next testimonial"
                >{"›"}</button>
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card">
            <div class="testimonial-header">
                <div class="testimonial-avatar">{ initials(testimonial.name) }</div>
                <div>
                    <div class="testimonial-name">{ testimonial.name }</div>
                    <div class="testimonial-role">
                        { format!("{}, {}", testimonial.role, testimonial.company) }
                    </div>
                </div>
                <div class="testimonial-stars">
                    { for (0..5u8).map(|i| html! {
                        <span class={if i < testimonial.rating { "star-filled" } else { "star-empty" }}>
                            {"★"}
                        </span>
                    }) }
                </div>
            </div>
            <p class="testimonial-quote">{ format!("\u{201c}{}\u{201d}", testimonial.quote) }</p>
        </div>
    }
}
