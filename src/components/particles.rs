use web_sys::js_sys;
use yew::prelude::*;

use crate::engine::particles::{self, ParticleSpec};

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(12)]
    pub count: usize,
}

/// Decorative drifting specks behind a section. The descriptors are
/// generated once per mount and rendered declaratively, so unmounting the
/// section tears the whole field down with it.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let specs = use_state(|| particles::generate(props.count, js_sys::Math::random));

    html! {
        <div class="particle-field" aria-hidden="true">
            <style>
                {r#"
                .particle-field {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .particle-field .particle {
                    position: absolute;
                    opacity: 0;
                    background: rgba(34, 197, 94, 0.25);
                    animation-name: particle-drift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                }
                @keyframes particle-drift {
                    from { transform: translate(0, 0); opacity: 0.1; }
                    to { transform: translate(var(--drift-x), var(--drift-y)); opacity: var(--peak); }
                }
                "#}
            </style>
            { for specs.iter().map(particle) }
        </div>
    }
}

fn particle(spec: &ParticleSpec) -> Html {
    let style = format!(
        "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;\
         border-radius:{};--drift-x:{:.0}px;--drift-y:{:.0}px;--peak:{:.2};\
         animation-duration:{:.1}s;animation-delay:{:.1}s;",
        spec.left,
        spec.top,
        spec.size,
        spec.size,
        if spec.round { "50%" } else { "2px" },
        spec.drift_x,
        spec.drift_y,
        spec.opacity,
        spec.duration,
        spec.delay,
    );
    html! { <span class="particle" {style}></span> }
}
