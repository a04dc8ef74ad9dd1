use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod device;
mod reveal;
mod scene;
mod components {
    pub mod custom_cursor;
    pub mod footer;
    pub mod navigation;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod education;
    pub mod experience;
    pub mod hero;
    pub mod projects;
    pub mod skills;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        // Single page site, anything else lands on the portfolio
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // The reveal runtime must exist before any section mounts
    if !reveal::runtime::install() {
        info!("Reveal animations unavailable, content shown statically");
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
