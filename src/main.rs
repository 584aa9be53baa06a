use yew::prelude::*;
use log::info;

mod config;
mod content;
mod pointer;
mod contact {
    pub mod form;
    pub mod transport;
    pub mod mailto;
}
mod components {
    pub mod nav;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod process;
    pub mod call_to_action;
    pub mod contact_form;
    pub mod contact_section;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
