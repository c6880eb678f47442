use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::theme::use_theme;
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let ctx = use_theme();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let mut listener: Option<(web_sys::Window, Closure<dyn FnMut()>)> = None;
                if let Some(window) = web_sys::window() {
                    let win = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let y = win.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(y > 20.0);
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        listener = Some((window, scroll_callback));
                    }
                }
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 2rem;
                    transition: all 0.5s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 2rem;
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                }
                .theme-dark .top-nav.scrolled { background: rgba(3, 7, 18, 0.55); border-bottom: 1px solid rgba(31, 41, 55, 0.5); }
                .theme-light .top-nav.scrolled { background: rgba(255, 255, 255, 0.6); border-bottom: 1px solid rgba(229, 231, 235, 0.5); }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: baseline;
                    gap: 2px;
                    text-decoration: none;
                    font-size: 1.3rem;
                }
                .nav-logo .light { color: #22c55e; font-weight: 300; }
                .nav-logo .bold { color: #16a34a; font-weight: 700; }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    text-decoration: none;
                    color: inherit;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }
                .nav-link:hover { color: #22c55e; }
                .nav-cta {
                    padding: 0.55rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid #16a34a;
                    background: #000;
                    color: #fff;
                    font-size: 0.9rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .nav-cta:hover { background: #111827; }
                .theme-toggle {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: 1px solid rgba(34, 197, 94, 0.35);
                    background: transparent;
                    cursor: pointer;
                    font-size: 1rem;
                    transition: all 0.3s ease;
                }
                .theme-toggle:hover { border-color: #22c55e; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: currentColor;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        position: absolute;
                        top: calc(100% + 0.5rem);
                        right: 1rem;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1.25rem;
                        border-radius: 12px;
                        display: none;
                    }
                    .theme-dark .nav-right { background: rgba(3, 7, 18, 0.95); border: 1px solid rgba(31, 41, 55, 0.6); }
                    .theme-light .nav-right { background: rgba(255, 255, 255, 0.97); border: 1px solid rgba(229, 231, 235, 0.8); }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="light">{"Dev"}</span>
                    <span class="bold">{"Connect"}</span>
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                    </div>
                    <a href="/#events" class="nav-link" onclick={close_menu.clone()}>{"Events"}</a>
                    <a href="/#faq" class="nav-link" onclick={close_menu}>{"FAQ"}</a>
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                        { if ctx.theme.is_dark() { "☀" } else { "🌙" } }
                    </button>
                    <a
                        class="nav-cta"
                        href={config::APPLY_FORM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >{"Apply"}</a>
                </div>
            </div>
        </nav>
    }
}
