use yew::prelude::*;

use crate::components::particles::ParticleField;
use crate::components::reveal::Reveal;
use crate::data::{self, TeamMember};

/// Hover choreography on a member card. Entering `Hovering` plays the
/// forward transition, leaving plays the exact reverse; both are driven by
/// the same CSS transition set so the animation is replayable in either
/// direction.
#[derive(Clone, Copy, PartialEq, Eq)]
enum HoverPhase {
    Idle,
    Hovering,
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    pub index: usize,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member: &TeamMember = &data::TEAM[props.index];
    let phase = use_state(|| HoverPhase::Idle);

    let onmouseenter = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(HoverPhase::Hovering))
    };
    let onmouseleave = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(HoverPhase::Idle))
    };

    let social = |href: Option<&'static str>, label: &'static str, glyph: &'static str| {
        match href {
            Some(href) => html! {
                <a
                    class="member-social"
                    href={href}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={label}
                >{ glyph }</a>
            },
            None => html! {},
        }
    };

    html! {
        <div
            class={classes!(
                "member-card",
                (*phase == HoverPhase::Hovering).then(|| "hovering"),
            )}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="member-avatar">
                <img src={member.avatar} alt={member.name} loading="lazy" />
                <div class="member-glow"></div>
            </div>
            <h3>{ member.name }</h3>
            <p class="member-role">{ member.role }</p>
            <p class="member-bio">{ member.bio }</p>
            <div class="member-socials">
                { social(member.twitter, "Twitter", "𝕏") }
                { social(member.github, "GitHub", "{}") }
                { social(member.linkedin, "LinkedIn", "in") }
                {
                    match member.email {
                        Some(email) => html! {
                            <a
                                class="member-social"
                                href={format!("mailto:{email}")}
                                aria-label="Email"
                            >{"✉"}</a>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

#[function_component(CoreTeam)]
pub fn core_team() -> Html {
    html! {
        <section id="team" class="core-team">
            <style>
                {r#"
                .core-team {
                    position: relative;
                    padding: 5rem 1.5rem;
                    overflow: hidden;
                }
                .core-team-inner { max-width: 1100px; margin: 0 auto; position: relative; z-index: 2; }
                .core-team-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                }
                .core-team-heading h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .core-team-heading h2 .accent { color: #22c55e; }
                .core-team-heading p { color: #9ca3af; font-size: 1.1rem; }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .member-card {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem 1.5rem;
                    border-radius: 16px;
                    text-align: center;
                    transition: transform 0.4s ease, border-color 0.4s ease, box-shadow 0.4s ease;
                }
                .theme-dark .member-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .member-card { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 8px 20px rgba(0,0,0,0.05); }
                .member-card.hovering {
                    transform: translateY(-6px);
                    border-color: rgba(34, 197, 94, 0.5);
                    box-shadow: 0 20px 44px rgba(34, 197, 94, 0.15);
                }
                .member-avatar {
                    position: relative;
                    width: 96px;
                    height: 96px;
                    margin: 0 auto 1.25rem;
                }
                .member-avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 50%;
                    border: 3px solid rgba(34, 197, 94, 0.25);
                    transition: border-radius 0.4s ease, border-color 0.4s ease;
                }
                .member-card.hovering .member-avatar img {
                    border-radius: 20%;
                    border-color: #22c55e;
                }
                .member-glow {
                    position: absolute;
                    inset: -12px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(34, 197, 94, 0.45) 0%, rgba(34, 197, 94, 0) 70%);
                    filter: blur(12px);
                    opacity: 0;
                    transition: opacity 0.4s ease;
                    pointer-events: none;
                }
                .member-card.hovering .member-glow { opacity: 0.6; }
                .member-card h3 { margin: 0 0 0.25rem; font-size: 1.15rem; }
                .member-role { margin: 0 0 0.75rem; color: #22c55e; font-size: 0.9rem; font-weight: 600; }
                .member-bio { margin: 0 0 1rem; color: #9ca3af; font-size: 0.9rem; line-height: 1.6; }
                .member-socials {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    opacity: 0;
                    transform: translateY(8px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }
                .member-card.hovering .member-socials { opacity: 1; transform: translateY(0); }
                .member-social {
                    width: 32px;
                    height: 32px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    font-size: 0.85rem;
                    text-decoration: none;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.12);
                    transition: background 0.3s ease;
                }
                .member-social:hover { background: rgba(34, 197, 94, 0.3); }
                "#}
            </style>
            <ParticleField count={12} />
            <div class="core-team-inner">
                <div class="core-team-heading">
                    <Reveal>
                        <h2>{"Meet the "}<span class="accent">{"Core Team"}</span></h2>
                    </Reveal>
                    <Reveal delay={0.1}>
                        <p>{"The people building DevConnect and the community around it."}</p>
                    </Reveal>
                </div>
                <div class="team-grid">
                    { for (0..data::TEAM.len()).map(|index| html! {
                        <Reveal delay={0.1 * index as f32}>
                            <MemberCard {index} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
