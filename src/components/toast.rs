use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Bottom-corner confirmation toast. Dismisses itself after a few seconds;
/// the timeout handle is dropped on unmount so it can never fire against a
/// closed toast.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(4000, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <style>
                {r#"
                .toast {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 120;
                    max-width: 340px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    background: rgba(17, 24, 39, 0.95);
                    border: 1px solid rgba(34, 197, 94, 0.4);
                    color: #fff;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                    animation: toast-in 0.3s ease-out;
                }
                @keyframes toast-in {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .toast-title {
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .toast-message {
                    margin: 0;
                    font-size: 0.9rem;
                    color: #d1d5db;
                }
                .toast-close {
                    position: absolute;
                    top: 0.4rem;
                    right: 0.6rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                    font-size: 0.9rem;
                }
                "#}
            </style>
            <div class="toast-title">{ props.title.to_string() }</div>
            <p class="toast-message">{ props.message.to_string() }</p>
            <button class="toast-close" onclick={dismiss}>{"✕"}</button>
        </div>
    }
}
