use yew::prelude::*;
use log::{info, Level};

mod pages {
    pub mod landing;
}
mod interactions {
    pub mod anchors;
    pub mod cards;
    pub mod controller;
    pub mod reveal;
    pub mod scroll;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
