use crate::routes::{self, MainRoute};
use yew::suspense::Suspense;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Suspense fallback={ html!{ <crate::components::loading::Loading/> } }>
            <BrowserRouter>
                <Switch<MainRoute> render={routes::switch} />
            </BrowserRouter>
        </Suspense>
    }
}
