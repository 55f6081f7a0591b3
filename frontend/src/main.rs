use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod countdown;
mod models;
mod plan_store;
mod tasks;
mod intake {
    pub mod validation;
}
mod components {
    pub mod countdown_widget;
    pub mod form_field;
}
mod pages {
    pub mod guide;
    pub mod intake;
    pub mod landing;
    pub mod not_found;
    pub mod success;
}

use pages::{
    guide::Guide,
    intake::Intake,
    landing::Landing,
    not_found::NotFound,
    success::Success,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/guia")]
    Guide,
    #[at("/cadastro")]
    Intake,
    #[at("/success")]
    Success,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Guide => {
            info!("Rendering Guide page");
            html! { <Guide /> }
        }
        Route::Intake => {
            info!("Rendering Intake page");
            html! { <Intake /> }
        }
        Route::Success => {
            info!("Rendering Success page");
            html! { <Success /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
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

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");

    info!("Starting PlannerRun, API at {}", config::get_api_url());
    yew::Renderer::<App>::new().render();
}
