use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::engine::carousel::{Carousel, CarouselOptions};

#[derive(Properties, PartialEq)]
pub struct ImageSliderProps {
    pub images: Vec<AttrValue>,
    #[prop_or(true)]
    pub autoplay: bool,
    #[prop_or(5000)]
    pub interval_ms: u32,
}

/// Looping image slider used on the service detail pages. Same index state
/// machine as the testimonials carousel; hovering anywhere on the slider
/// pauses autoplay until the pointer leaves.
#[function_component(ImageSlider)]
pub fn image_slider(props: &ImageSliderProps) -> Html {
    let carousel = {
        let len = props.images.len();
        let options = CarouselOptions {
            autoplay: props.autoplay,
            interval_ms: props.interval_ms,
            looping: true,
        };
        use_state(move || Carousel::new(len, options))
    };

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
    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.pause();
            carousel.set(next);
        })
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.resume();
            carousel.set(next);
        })
    };

    let active = carousel.active_index();
    let many = props.images.len() > 1;

    html! {
        <div class="image-slider" onmouseenter={on_enter} onmouseleave={on_leave}>
            <style>
                {r#"
                .image-slider {
                    position: relative;
                    overflow: hidden;
                    border-radius: 16px;
                    aspect-ratio: 16 / 9;
                    border: 1px solid rgba(34, 197, 94, 0.2);
                }
                .image-slider .slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .image-slider .slide.active { opacity: 1; }
                .image-slider .slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .image-slider .slider-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 5;
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(0, 0, 0, 0.45);
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .image-slider .slider-arrow:hover { background: rgba(34, 197, 94, 0.6); }
                .image-slider .slider-arrow.prev { left: 0.75rem; }
                .image-slider .slider-arrow.next { right: 0.75rem; }
                .image-slider .slider-dots {
                    position: absolute;
                    bottom: 0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 6px;
                    z-index: 5;
                }
                .image-slider .slider-dot {
                    width: 8px;
                    height: 8px;
                    padding: 0;
                    border: none;
                    border-radius: 4px;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .image-slider .slider-dot.active { width: 20px; background: #22c55e; }
                "#}
            </style>
            { for props.images.iter().enumerate().map(|(index, src)| html! {
                <div class={classes!("slide", (index == active).then(|| "active"))}>
                    <img src={src.clone()} alt={format!("Slide {}", index + 1)} loading="lazy" />
                </div>
            }) }
            {
                if many {
                    html! {
                        <>
                            <button class="slider-arrow prev" onclick={on_prev} aria-label="Previous image">{"‹"}</button>
                            <button class="slider-arrow next" onclick={on_next} aria-label="Next image">{"›"}</button>
                            <div class="slider-dots">
                                { for (0..carousel.len()).map(|index| {
                                    let carousel = carousel.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        let mut next = (*carousel).clone();
                                        next.go_to(index);
                                        carousel.set(next);
                                    });
                                    html! {
                                        <button
                                            class={classes!("slider-dot", (index == active).then(|| "active"))}
                                            {onclick}
                                            aria-label={format!("Go to image {}", index + 1)}
                                        ></button>
                                    }
                                }) }
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
