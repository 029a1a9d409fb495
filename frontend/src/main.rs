use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod session;
mod motion {
    pub mod parallax;
    pub mod particles;
    pub mod progressive;
    pub mod tween;
    pub mod visibility;
}
mod audio {
    pub mod hooks;
    pub mod player;
    pub mod unlock;
}
mod components {
    pub mod celebration;
    pub mod music_toggle;
    pub mod particles;
    pub mod progressive_text;
    pub mod reveal;
}
mod pages {
    pub mod artifact;
    pub mod journey;
}

use pages::journey::Journey;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Journey,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Journey => {
            info!("Rendering Journey page");
            html! { <Journey /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to the journey");
            html! { <Redirect<Route> to={Route::Journey} /> }
        },
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting journey");
    yew::Renderer::<App>::new().render();
}
