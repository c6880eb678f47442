use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::toast::Toast;

const TIME_SLOTS: &[&str] = &[
    "9:00 AM - 10:00 AM",
    "11:00 AM - 12:00 PM",
    "1:00 PM - 2:00 PM",
    "3:00 PM - 4:00 PM",
    "5:00 PM - 6:00 PM",
];

const WHY_BOOK: &[(&str, &str, &str)] = &[
    (
        "💬",
        "Personalized Solutions",
        "Get tailored recommendations for your specific goals and challenges.",
    ),
    (
        "📞",
        "Expert Consultation",
        "Speak directly with our mentors with years of industry experience.",
    ),
    (
        "📅",
        "Flexible Scheduling",
        "Choose a time that works best for your availability.",
    ),
];

/// Booking form. Submitting performs no network call at all; it resets the
/// fields and raises a local confirmation toast.
#[function_component(BookCall)]
pub fn book_call() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let selected_time = use_state(String::new);
    let toast = use_state(|| None::<String>);

    let on_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let selected_time = selected_time.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            toast.set(Some(
                "We'll be in touch shortly to confirm your appointment.".to_owned(),
            ));
            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            message.set(String::new());
            selected_time.set(String::new());
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <section id="book-call" class="book-call">
            <style>
                {r#"
                .book-call {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .book-call-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                @media (max-width: 900px) { .book-call-grid { grid-template-columns: 1fr; } }
                .book-call-copy h3 { font-size: 2rem; margin: 0 0 1rem; }
                .book-call-copy .lede { color: #9ca3af; font-size: 1.1rem; margin: 0 0 2rem; }
                .why-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .theme-dark .why-item { background: rgba(17, 24, 39, 0.6); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .why-item { background: #fff; border: 1px solid rgba(229, 231, 235, 0.9); }
                .why-item:hover { border-color: rgba(34, 197, 94, 0.4); box-shadow: 0 8px 20px rgba(0,0,0,0.08); }
                .why-icon {
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 10px;
                    background: rgba(34, 197, 94, 0.12);
                }
                .why-item h5 { margin: 0 0 0.25rem; font-size: 1rem; }
                .why-item p { margin: 0; color: #9ca3af; font-size: 0.9rem; }
                .booking-card {
                    border-radius: 16px;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .theme-dark .booking-card { background: rgba(17, 24, 39, 0.7); border: 1px solid rgba(31, 41, 55, 0.8); }
                .theme-light .booking-card { background: rgba(255, 255, 255, 0.92); border: 1px solid rgba(229, 231, 235, 0.9); box-shadow: 0 16px 40px rgba(0,0,0,0.08); }
                .booking-card:hover { border-color: rgba(34, 197, 94, 0.35); }
                .booking-card-header {
                    padding: 1.5rem;
                    border-bottom: 1px solid rgba(107, 114, 128, 0.25);
                    font-size: 1.4rem;
                    font-weight: 700;
                }
                .booking-form { padding: 1.5rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                @media (max-width: 600px) { .form-row { grid-template-columns: 1fr; } }
                .form-field { margin-bottom: 1.25rem; }
                .form-field label {
                    display: block;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                    color: #9ca3af;
                }
                .form-field input, .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.7rem 0.9rem;
                    border-radius: 8px;
                    border: 1px solid rgba(107, 114, 128, 0.35);
                    background: transparent;
                    color: inherit;
                    font: inherit;
                    transition: border-color 0.3s ease;
                }
                .form-field input:focus, .form-field textarea:focus {
                    outline: none;
                    border-color: #22c55e;
                }
                .slot-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
                    gap: 0.6rem;
                }
                .slot {
                    padding: 0.55rem 0.5rem;
                    font-size: 0.8rem;
                    border-radius: 8px;
                    border: 1px solid rgba(107, 114, 128, 0.35);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .slot:hover { border-color: rgba(34, 197, 94, 0.5); }
                .slot.selected { background: #16a34a; border-color: #16a34a; color: #fff; }
                .booking-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 10px;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #fff;
                    cursor: pointer;
                    background: linear-gradient(to right, #16a34a, #4ade80);
                    box-shadow: 0 10px 24px rgba(34, 197, 94, 0.2);
                    transition: filter 0.3s ease;
                }
                .booking-submit:hover { filter: brightness(1.08); }
                .booking-note {
                    margin: 1rem 0 0;
                    text-align: center;
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                "#}
            </style>
            <div class="book-call-grid">
                <Reveal>
                    <div class="book-call-copy">
                        <Reveal delay={0.2}>
                            <h3>{"Let's discuss how DevConnect can transform your journey"}</h3>
                        </Reveal>
                        <Reveal delay={0.3}>
                            <p class="lede">
                                {"Schedule a personalized call with our team to explore how DevConnect can be tailored to your goals."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.4}>
                            <h4>{"Why book a call with us?"}</h4>
                        </Reveal>
                        <Reveal delay={0.5}>
                            <div>
                                { for WHY_BOOK.iter().map(|(icon, title, description)| html! {
                                    <div class="why-item">
                                        <div class="why-icon">{ *icon }</div>
                                        <div>
                                            <h5>{ *title }</h5>
                                            <p>{ *description }</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </Reveal>
                    </div>
                </Reveal>
                <Reveal delay={0.3}>
                    <div class="booking-card">
                        <div class="booking-card-header">{"Schedule Your Call"}</div>
                        <form class="booking-form" {onsubmit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="book-name">{"Your Name"}</label>
                                    <input
                                        id="book-name"
                                        value={(*name).clone()}
                                        oninput={on_input(&name)}
                                        placeholder="John Doe"
                                        required=true
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="book-email">{"Email Address"}</label>
                                    <input
                                        id="book-email"
                                        type="email"
                                        value={(*email).clone()}
                                        oninput={on_input(&email)}
                                        placeholder="john@example.com"
                                        required=true
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="book-phone">{"Phone Number"}</label>
                                <input
                                    id="book-phone"
                                    value={(*phone).clone()}
                                    oninput={on_input(&phone)}
                                    placeholder="+234 (555) 123-4567"
                                />
                            </div>
                            <div class="form-field">
                                <label>{"Preferred Time"}</label>
                                <div class="slot-grid">
                                    { for TIME_SLOTS.iter().map(|slot| {
                                        let selected_time = selected_time.clone();
                                        let value = (*slot).to_owned();
                                        let is_selected = *selected_time == value;
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            selected_time.set(value.clone());
                                        });
                                        html! {
                                            <button
                                                type="button"
                                                class={classes!("slot", is_selected.then(|| "selected"))}
                                                {onclick}
                                            >{ format!("🕐 {slot}") }</button>
                                        }
                                    }) }
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="book-message">{"How can we help?"}</label>
                                <textarea
                                    id="book-message"
                                    rows="4"
                                    value={(*message).clone()}
                                    oninput={on_message_input}
                                    placeholder="Tell us about your goals..."
                                ></textarea>
                            </div>
                            <button type="submit" class="booking-submit">
                                {"📞 Book Your Call Now"}
                            </button>
                            <p class="booking-note">{"We'll confirm your appointment within 24 hours"}</p>
                        </form>
                    </div>
                </Reveal>
            </div>
            {
                if let Some(message) = (*toast).clone() {
                    html! {
                        <Toast
                            title="Call Scheduled!"
                            message={message}
                            on_dismiss={dismiss_toast}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
