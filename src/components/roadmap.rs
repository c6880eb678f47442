use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::{self, Milestone, MilestoneStatus};
use crate::engine::reveal::RevealDirection;

fn milestone_card(milestone: &Milestone) -> Html {
    html! {
        <div class={classes!("milestone-card", milestone.status.class())}>
            <div class="milestone-top">
                <span class={classes!("status-badge", milestone.status.class())}>
                    { milestone.status.label() }
                </span>
                <span class="milestone-quarter">{ milestone.quarter }</span>
            </div>
            <h3>{ milestone.title }</h3>
            <p>{ milestone.description }</p>
            {
                if milestone.status == MilestoneStatus::Current {
                    html! {
                        <div class="milestone-progress">
                            <div class="milestone-progress-fill" style="width:50%;"></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    html! {
        <section id="roadmap" class="roadmap">
            <style>
                {r#"
                .roadmap {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    position: relative;
                }
                .roadmap-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 4rem;
                }
                .roadmap-heading h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .roadmap-heading h2 .accent { color: #22c55e; }
                .roadmap-heading p { color: #9ca3af; font-size: 1.1rem; }
                .timeline { position: relative; }
                .timeline::before {
                    content: '';
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    transform: translateX(-50%);
                    background: linear-gradient(to bottom, rgba(34, 197, 94, 0.2), #22c55e, rgba(107, 114, 128, 0.3));
                    border-radius: 1px;
                }
                .timeline-row {
                    position: relative;
                    display: flex;
                    margin-bottom: 3rem;
                }
                .timeline-row.flipped { flex-direction: row-reverse; }
                .timeline-side { width: 45%; }
                .timeline-row .timeline-gap { flex: 1; }
                .timeline-dot {
                    position: absolute;
                    left: 50%;
                    top: 1rem;
                    transform: translateX(-50%);
                    width: 16px;
                    height: 16px;
                    border-radius: 50%;
                    z-index: 2;
                }
                .timeline-dot.completed { background: #22c55e; }
                .timeline-dot.current { background: #eab308; animation: dot-pulse 1.6s ease-in-out infinite; }
                .timeline-dot.upcoming { background: #4b5563; }
                @keyframes dot-pulse {
                    0%, 100% { box-shadow: 0 0 0 0 rgba(234, 179, 8, 0.45); }
                    50% { box-shadow: 0 0 0 10px rgba(234, 179, 8, 0); }
                }
                .milestone-card {
                    box-sizing: border-box;
                    padding: 1.5rem;
                    border-radius: 14px;
                    transition: all 0.3s ease;
                }
                .theme-dark .milestone-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .milestone-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 6px 18px rgba(0,0,0,0.05); }
                .milestone-card.completed { border-color: rgba(34, 197, 94, 0.3); }
                .milestone-card.current { border-color: rgba(234, 179, 8, 0.4); box-shadow: 0 10px 28px rgba(234, 179, 8, 0.1); }
                .milestone-card:hover h3 { color: #22c55e; }
                .milestone-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .status-badge {
                    padding: 0.25rem 0.8rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .status-badge.completed { background: rgba(34, 197, 94, 0.15); color: #22c55e; }
                .status-badge.current { background: rgba(234, 179, 8, 0.15); color: #eab308; animation: badge-pulse 2s ease-in-out infinite; }
                .status-badge.upcoming { background: rgba(107, 114, 128, 0.2); color: #9ca3af; }
                @keyframes badge-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.6; }
                }
                .milestone-quarter {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.1);
                    padding: 0.2rem 0.6rem;
                    border-radius: 6px;
                }
                .milestone-card h3 { margin: 0 0 0.5rem; font-size: 1.2rem; transition: color 0.3s ease; }
                .milestone-card p { margin: 0; color: #9ca3af; line-height: 1.6; }
                .milestone-progress {
                    margin-top: 1rem;
                    height: 6px;
                    border-radius: 3px;
                    background: rgba(107, 114, 128, 0.3);
                    overflow: hidden;
                }
                .milestone-progress-fill {
                    height: 100%;
                    border-radius: 3px;
                    background: #eab308;
                    animation: badge-pulse 2s ease-in-out infinite;
                }
                @media (max-width: 768px) {
                    .timeline::before { left: 8px; }
                    .timeline-dot { left: 8px; }
                    .timeline-row, .timeline-row.flipped { flex-direction: column; }
                    .timeline-side { width: auto; margin-left: 2rem; }
                    .timeline-gap { display: none; }
                }
                "#}
            </style>
            <div class="roadmap-heading">
                <Reveal>
                    <h2>{"Our "}<span class="accent">{"Roadmap"}</span></h2>
                </Reveal>
                <Reveal delay={0.1}>
                    <p>{"The journey ahead for DevConnect and how we're building the future of technology together."}</p>
                </Reveal>
            </div>
            <div class="timeline">
                { for data::ROADMAP.iter().enumerate().map(|(index, milestone)| {
                    let direction = if index % 2 == 0 {
                        RevealDirection::Left
                    } else {
                        RevealDirection::Right
                    };
                    html! {
                        <div class={classes!("timeline-row", (index % 2 == 1).then(|| "flipped"))}>
                            <span class={classes!("timeline-dot", milestone.status.class())}></span>
                            <Reveal
                                class="timeline-side"
                                {direction}
                                delay={0.15 * index as f32}
                            >
                                { milestone_card(milestone) }
                            </Reveal>
                            <div class="timeline-gap"></div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
