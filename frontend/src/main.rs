use log::info;
use yew::prelude::*;

mod config;
mod rig {
    pub mod error;
    pub mod smoothing;
    pub mod part;
    pub mod pose;
    pub mod driver;
    pub mod scroll;
    pub mod ambient;
    pub mod render;
    pub mod canvas;
    pub mod frame_loop;
}
mod components {
    pub mod header;
    pub mod hero;
    pub mod services;
    pub mod contact_form;
    pub mod footer;
    pub mod robot_scene;
}

use components::{
    contact_form::ContactForm,
    footer::Footer,
    header::Header,
    hero::Hero,
    robot_scene::RobotScene,
    services::Services,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="app">
            <Header />
            <RobotScene />
            <Hero />
            <Services />
            <ContactForm />
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::DOMAIN);
    yew::Renderer::<App>::new().render();
}
