use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::record_form::RecordForm;
use crate::components::trends::Trends;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/form")]
    Form,
    #[at("/trends")]
    Trends,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Form => {
            log::trace!("Rendering Form page");
            html! { <Layout title="Census Management"><RecordForm /></Layout> }
        }
        Route::Trends => {
            log::trace!("Rendering Trends page");
            html! { <Layout title="Trends"><Trends /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1 class="text-2xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}
