use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question.to_string() }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer.to_string() }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq">
            <style>
                {r#"
                .faq {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .faq-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-heading h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .faq-heading h2 .accent { color: #22c55e; }
                .faq-heading p { color: #9ca3af; font-size: 1.1rem; }
                .faq-item {
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .theme-dark .faq-item { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .faq-item { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 4px 14px rgba(0,0,0,0.04); }
                .faq-item:hover { border-color: rgba(34, 197, 94, 0.4); }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: color 0.3s ease;
                }
                .faq-question:hover { color: #22c55e; }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #22c55e;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon { transform: rotate(180deg); }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }
                .faq-item.open .faq-answer { max-height: 400px; padding: 0 1.5rem 1.25rem; }
                .faq-answer p { margin: 0; color: #9ca3af; line-height: 1.7; }
                .faq-footer { margin-top: 3rem; text-align: center; }
                .faq-footer p { color: #9ca3af; margin: 0 0 1rem; }
                .faq-footer .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    color: #22c55e;
                    border: 1px solid rgba(34, 197, 94, 0.35);
                    background: rgba(34, 197, 94, 0.08);
                }
                "#}
            </style>
            <div class="faq-heading">
                <Reveal>
                    <h2>{"Frequently Asked "}<span class="accent">{"Questions"}</span></h2>
                </Reveal>
                <Reveal delay={0.1}>
                    <p>{"Everything you need to know about DevConnect and how it brings the tech community together."}</p>
                </Reveal>
            </div>
            { for data::FAQS.iter().enumerate().map(|(index, entry)| html! {
                <Reveal delay={0.1 * index as f32}>
                    <FaqItem question={entry.question} answer={entry.answer} />
                </Reveal>
            }) }
            <Reveal delay={0.6}>
                <div class="faq-footer">
                    <p>{"Still have questions?"}</p>
                    <span class="pill">
                        <span>{"💬"}</span>
                        <span>{"Contact our support team for more information"}</span>
                    </span>
                </div>
            </Reveal>
        </section>
    }
}
