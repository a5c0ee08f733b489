//! Census dashboard frontend.
//!
//! Browser SPA for entering census/vaccination records and exploring
//! aggregated trends (record table, vaccination-by-age line chart,
//! gender-by-age bar chart).

use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod chart_data;
pub mod common;
pub mod components;
pub mod router;
pub mod settings;

use common::toast::ToastProvider;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Census Dashboard starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized");
}
