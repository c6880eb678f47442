use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::engine::reveal::{RevealConfig, RevealDirection, RevealTarget};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or(0.0)]
    pub delay: f32,
    #[prop_or(0.3)]
    pub duration: f32,
    #[prop_or(0.1)]
    pub threshold: f32,
}

/// Wraps its children in a block that fades/slides in the first time it
/// scrolls into view. The element is watched with an IntersectionObserver
/// which is disconnected as soon as the reveal fires, and on unmount either
/// way, so nothing ever runs against a detached node.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = RevealConfig::new(props.direction, props.delay, props.duration, props.threshold);
    let target = use_state(|| RevealTarget::new(config));
    let node = use_node_ref();

    {
        let target = target.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observation: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node.cast::<Element>() {
                    let margin = target.config().root_margin();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let crossed = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if crossed {
                                let mut next = (*target).clone();
                                if next.notify_visible() {
                                    target.set(next);
                                }
                                // plays once; later crossings must not matter
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(&margin);
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        observation = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, callback)) = observation {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={target.style()}>
            { for props.children.iter() }
        </div>
    }
}
