use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod reveal {
    pub mod one_shot;
    pub mod dom;
}
mod components {
    pub mod features;
    pub mod icons;
}
mod pages {
    pub mod home;
}

use components::features::SECTION_ANCHOR;
use pages::home::{Home, NotFound};


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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"rankup"}
                </Link<Route>>
                <div class="nav-right">
                    <a class="nav-link" href={format!("/#{}", SECTION_ANCHOR)}>{"Features"}</a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
