use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data;
use crate::engine::gallery::{Gallery, MediaItem, MediaKind};

#[derive(Properties, PartialEq)]
pub struct MasonryGalleryProps {
    #[prop_or_else(data::gallery_items)]
    pub items: Vec<MediaItem>,
}

type VideoRefs = Rc<RefCell<HashMap<String, NodeRef>>>;

fn video_node(refs: &VideoRefs, id: &str) -> Option<HtmlVideoElement> {
    refs.borrow()
        .get(id)
        .and_then(|node| node.cast::<HtmlVideoElement>())
}

/// Playback failures (autoplay restrictions and the like) are logged and
/// otherwise ignored; hover bookkeeping must keep working regardless.
fn play_video(refs: &VideoRefs, id: &str) {
    if let Some(video) = video_node(refs, id) {
        match video.play() {
            Ok(promise) => {
                let id = id.to_owned();
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        error!("video playback failed:", id);
                    }
                });
            }
            Err(_) => error!("video playback failed:", id),
        }
    }
}

fn pause_video(refs: &VideoRefs, id: &str) {
    if let Some(video) = video_node(refs, id) {
        let _ = video.pause();
    }
}

#[function_component(MasonryGallery)]
pub fn masonry_gallery(props: &MasonryGalleryProps) -> Html {
    let gallery = use_state(|| Gallery::new(props.items.clone()));
    let video_refs: VideoRefs = use_mut_ref(HashMap::new);

    let on_filter = |category: Option<String>| {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*gallery).clone();
            next.set_category(category.as_deref());
            gallery.set(next);
        })
    };

    let on_tile_enter = {
        let gallery = gallery.clone();
        let video_refs = video_refs.clone();
        Callback::from(move |id: String| {
            let mut next = (*gallery).clone();
            if let Some(previous) = next.hover(&id) {
                pause_video(&video_refs, &previous);
            }
            if next.hovered_video() == Some(id.as_str()) {
                play_video(&video_refs, &id);
            }
            gallery.set(next);
        })
    };

    let on_tile_leave = {
        let gallery = gallery.clone();
        let video_refs = video_refs.clone();
        Callback::from(move |id: String| {
            let mut next = (*gallery).clone();
            if next.hovered_video() == Some(id.as_str()) {
                pause_video(&video_refs, &id);
            }
            next.unhover(&id);
            gallery.set(next);
        })
    };

    let on_expand = {
        let gallery = gallery.clone();
        Callback::from(move |id: String| {
            let mut next = (*gallery).clone();
            next.expand(&id);
            gallery.set(next);
        })
    };

    let on_open_fullscreen = {
        let gallery = gallery.clone();
        let video_refs = video_refs.clone();
        Callback::from(move |id: String| {
            let mut next = (*gallery).clone();
            // the fullscreen view takes over playback from the grid tile
            if next.hovered_video() == Some(id.as_str()) {
                pause_video(&video_refs, &id);
            }
            if next.open_fullscreen(&id) {
                gallery.set(next);
            }
        })
    };

    let on_close_fullscreen = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*gallery).clone();
            next.close_fullscreen();
            gallery.set(next);
        })
    };

    let categories: Vec<String> = gallery.categories().iter().map(|c| c.to_string()).collect();
    let selected = gallery.selected_category().map(str::to_owned);
    let epoch = gallery.filter_epoch();

    html! {
        <section id="gallery" class="masonry-gallery">
            <style>
                {r#"
                .masonry-gallery {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .gallery-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .gallery-heading h2 { font-size: 2.5rem; margin-bottom: 1rem; color: #22c55e; }
                .gallery-heading p { color: #9ca3af; max-width: 560px; margin: 0 auto 2rem; }
                .gallery-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .gallery-filter {
                    padding: 0.6rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(34, 197, 94, 0.25);
                    background: transparent;
                    color: inherit;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    text-transform: capitalize;
                }
                .gallery-filter:hover { border-color: rgba(34, 197, 94, 0.6); }
                .gallery-filter.active {
                    background: #22c55e;
                    border-color: #22c55e;
                    color: #fff;
                    box-shadow: 0 8px 20px rgba(34, 197, 94, 0.25);
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    grid-auto-rows: 220px;
                    gap: 1.25rem;
                }
                @media (max-width: 900px) { .gallery-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 600px) { .gallery-grid { grid-template-columns: 1fr; } }
                .masonry-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 16px;
                    cursor: pointer;
                    animation: tile-in 0.7s cubic-bezier(0.22, 1, 0.36, 1) both;
                    transition: transform 0.4s ease, box-shadow 0.4s ease;
                }
                .masonry-item:hover { transform: scale(1.02); box-shadow: 0 18px 40px rgba(0,0,0,0.35); }
                @keyframes tile-in {
                    from { opacity: 0; transform: translateY(50px) scale(0.95); }
                    to { opacity: 1; transform: none; }
                }
                .masonry-item.span-wide { grid-column: span 2; grid-row: span 2; }
                .masonry-item.span-tall { grid-row: span 2; }
                .masonry-item.expanded { grid-column: span 2; grid-row: span 2; }
                @media (max-width: 600px) {
                    .masonry-item.span-wide, .masonry-item.expanded { grid-column: span 1; }
                }
                .masonry-item img, .masonry-item video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: opacity 0.5s ease, transform 0.7s ease;
                }
                .masonry-item:hover img.tile-image { transform: scale(1.05); }
                .masonry-item .layer-hidden { opacity: 0; }
                .tile-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: rgba(0, 0, 0, 0.55);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .masonry-item:hover .tile-overlay { opacity: 1; }
                .tile-kind {
                    width: 52px;
                    height: 52px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.9);
                    color: #16a34a;
                    font-size: 1.2rem;
                }
                .tile-expand {
                    border: none;
                    border-radius: 50%;
                    width: 34px;
                    height: 34px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #16a34a;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .tile-expand:hover { transform: scale(1.1); }
                .tile-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.25rem;
                    background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
                    color: #fff;
                    transform: translateY(100%);
                    transition: transform 0.3s ease;
                }
                .masonry-item:hover .tile-caption { transform: translateY(0); }
                .tile-caption .category { font-size: 0.8rem; color: #d1d5db; text-transform: capitalize; }
                .gallery-empty {
                    grid-column: 1 / -1;
                    text-align: center;
                    padding: 3rem 0;
                    color: #6b7280;
                }
                .fullscreen-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(4px);
                }
                .fullscreen-modal {
                    position: relative;
                    width: min(90vw, 1100px);
                    height: min(90vh, 720px);
                    animation: modal-in 0.4s ease-out;
                }
                @keyframes modal-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                .fullscreen-modal img, .fullscreen-modal video {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .fullscreen-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 5;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.12);
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .fullscreen-close:hover { background: rgba(255, 255, 255, 0.25); }
                .fullscreen-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
                    color: #fff;
                }
                "#}
            </style>
            <Reveal>
                <div class="gallery-heading">
                    <h2>{"Visual Showcase"}</h2>
                    <p>{"Explore our work through this curated collection of images and videos showcasing our projects and achievements."}</p>
                    <div class="gallery-filters">
                        <button
                            class={classes!("gallery-filter", selected.is_none().then(|| "active"))}
                            onclick={on_filter(None)}
                        >{"All"}</button>
                        { for categories.iter().map(|category| html! {
                            <button
                                class={classes!(
                                    "gallery-filter",
                                    (selected.as_deref() == Some(category.as_str())).then(|| "active"),
                                )}
                                onclick={on_filter(Some(category.clone()))}
                            >{ category }</button>
                        }) }
                    </div>
                </div>
            </Reveal>
            <div class="gallery-grid">
                {
                    if gallery.visible().is_empty() {
                        html! { <div class="gallery-empty">{"Nothing in this category yet."}</div> }
                    } else {
                        html! {
                            { for gallery.visible().into_iter().enumerate().map(|(index, item)| tile(
                                item,
                                index,
                                epoch,
                                gallery.hovered() == Some(item.id.as_str()),
                                gallery.expanded() == Some(item.id.as_str()),
                                &video_refs,
                                &on_tile_enter,
                                &on_tile_leave,
                                &on_expand,
                                &on_open_fullscreen,
                            )) }
                        }
                    }
                }
            </div>
            {
                if let Some(item) = gallery.fullscreen() {
                    fullscreen_modal(item, &on_close_fullscreen)
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn tile(
    item: &MediaItem,
    index: usize,
    epoch: u32,
    hovered: bool,
    expanded: bool,
    video_refs: &VideoRefs,
    on_enter: &Callback<String>,
    on_leave: &Callback<String>,
    on_expand: &Callback<String>,
    on_open: &Callback<String>,
) -> Html {
    let id = item.id.clone();
    let onmouseenter = {
        let on_enter = on_enter.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_enter.emit(id.clone()))
    };
    let onmouseleave = {
        let on_leave = on_leave.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(id.clone()))
    };
    let onclick = {
        let on_open = on_open.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };
    let on_expand_click = {
        let on_expand = on_expand.clone();
        let id = id.clone();
        Callback::from(move |event: MouseEvent| {
            // keep the expand button from also opening fullscreen
            event.stop_propagation();
            on_expand.emit(id.clone());
        })
    };

    let media = match item.kind {
        MediaKind::Image => html! {
            <img class="tile-image" src={item.source.clone()} alt={item.caption.clone()} loading="lazy" />
        },
        MediaKind::Video => {
            let node = video_refs
                .borrow_mut()
                .entry(item.id.clone())
                .or_default()
                .clone();
            html! {
                <>
                    {
                        if let Some(poster) = &item.thumbnail {
                            html! {
                                <img
                                    class={classes!(hovered.then(|| "layer-hidden"))}
                                    src={poster.clone()}
                                    alt={item.caption.clone()}
                                    loading="lazy"
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                    <video
                        ref={node}
                        class={classes!((!hovered).then(|| "layer-hidden"))}
                        src={item.source.clone()}
                        loop=true
                        muted=true
                        playsinline=true
                    />
                </>
            }
        }
    };

    html! {
        <div
            key={format!("{epoch}-{id}")}
            class={classes!(
                "masonry-item",
                (index % 5 == 0).then(|| "span-wide"),
                (index % 3 == 1).then(|| "span-tall"),
                expanded.then(|| "expanded"),
            )}
            style={format!("animation-delay:{:.2}s;", Gallery::stagger_delay(index))}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            { media }
            <div class="tile-overlay">
                <div class="tile-kind">
                    { if item.kind == MediaKind::Video { "▶" } else { "❏" } }
                </div>
                <button class="tile-expand" onclick={on_expand_click} aria-label="Toggle tile size">
                    {"⤢"}
                </button>
            </div>
            <div class="tile-caption">
                <p>{ &item.caption }</p>
                {
                    if let Some(category) = &item.category {
                        html! { <span class="category">{ category }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn fullscreen_modal(item: &MediaItem, on_close: &Callback<MouseEvent>) -> Html {
    html! {
        <div class="fullscreen-backdrop">
            <div class="fullscreen-modal">
                <button class="fullscreen-close" onclick={on_close.clone()} aria-label="Close fullscreen">
                    {"✕"}
                </button>
                {
                    match item.kind {
                        MediaKind::Image => html! {
                            <img src={item.source.clone()} alt={item.caption.clone()} />
                        },
                        MediaKind::Video => html! {
                            <video src={item.source.clone()} autoplay=true controls=true />
                        },
                    }
                }
                <div class="fullscreen-caption">
                    <p>{ &item.caption }</p>
                    {
                        if let Some(category) = &item.category {
                            html! { <span class="category">{ category }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
