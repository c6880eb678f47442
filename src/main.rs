use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod theme;
mod engine {
    pub mod carousel;
    pub mod gallery;
    pub mod particles;
    pub mod reveal;
}
mod components {
    pub mod book_call;
    pub mod brands;
    pub mod call_to_action;
    pub mod events;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod navbar;
    pub mod particles;
    pub mod reveal;
    pub mod roadmap;
    pub mod slider;
    pub mod statistics;
    pub mod team;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod service_detail;
    pub mod services;
}

use pages::{home::Home, service_detail::ServiceDetail, services::Services};
use theme::{Theme, ThemeContext};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::ServiceDetail { id } => {
            info!("Rendering service detail page");
            html! { <ServiceDetail id={id} /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_state(|| Theme::Dark);
    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.flipped()))
    };
    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ThemeContext>>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
