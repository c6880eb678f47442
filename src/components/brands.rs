use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::{self, Brand};

fn brand_tile(brand: &Brand) -> Html {
    html! {
        <div class="brand-tile" title={brand.blurb}>
            <span class="brand-mark">
                { brand.name.chars().next().map(String::from).unwrap_or_default() }
            </span>
            <span class="brand-name">{ brand.name }</span>
        </div>
    }
}

#[function_component(AssociatedBrands)]
pub fn associated_brands() -> Html {
    html! {
        <section class="brands">
            <style>
                {r#"
                .brands {
                    padding: 3rem 0 4rem;
                    overflow: hidden;
                }
                .brands-heading {
                    text-align: center;
                    margin-bottom: 2.5rem;
                    color: #9ca3af;
                    font-size: 0.95rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .marquee {
                    overflow: hidden;
                    margin-bottom: 1.25rem;
                    -webkit-mask-image: linear-gradient(to right, transparent, #000 10%, #000 90%, transparent);
                    mask-image: linear-gradient(to right, transparent, #000 10%, #000 90%, transparent);
                }
                .marquee-track {
                    display: flex;
                    gap: 1.25rem;
                    width: max-content;
                    animation: marquee-slide 20s linear infinite;
                }
                .marquee.reverse .marquee-track { animation-direction: reverse; }
                @keyframes marquee-slide {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .brand-tile {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.9rem 1.5rem;
                    border-radius: 16px;
                    white-space: nowrap;
                }
                .theme-dark .brand-tile { background: rgba(17, 24, 39, 0.8); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .brand-tile { background: rgba(255, 255, 255, 0.9); border: 1px solid rgba(243, 244, 246, 0.9); box-shadow: 0 4px 12px rgba(0,0,0,0.05); }
                .brand-mark {
                    width: 32px;
                    height: 32px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 8px;
                    font-weight: 700;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.12);
                }
                .brand-name { font-size: 0.9rem; font-weight: 500; letter-spacing: 0.03em; }
                "#}
            </style>
            <Reveal>
                <p class="brands-heading">{"Trusted by teams across the ecosystem"}</p>
            </Reveal>
            <div class="marquee">
                <div class="marquee-track">
                    { for data::BRANDS.iter().chain(data::BRANDS.iter()).map(brand_tile) }
                </div>
            </div>
            <div class="marquee reverse">
                <div class="marquee-track">
                    { for data::BRANDS.iter().chain(data::BRANDS.iter()).map(brand_tile) }
                </div>
            </div>
        </section>
    }
}
