use crate::{
    containers::layout::Layout,
    models::app_state::AppState,
    pages::{
        AdminPage, AdminRequired, DashboardPage, ErrorPage, LearningPage, LoginPage, PlayerPage,
        VideosPage,
    },
};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/videos")]
    Videos,
    #[at("/videos/:id")]
    Player { id: String },
    #[at("/learning")]
    Learning,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes that render without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Routes reserved for the admin role.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = *use_selector(AppState::is_authenticated);
    let is_admin = *use_selector(AppState::is_admin);
    let route = props.route.clone();

    if route.is_public() {
        return if is_authenticated {
            html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
        } else {
            html! { <LoginPage /> }
        };
    }
    if !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    if route.requires_admin() && !is_admin {
        return html! { <AdminRequired /> };
    }

    let page = match route.clone() {
        MainRoute::Dashboard => html! { <DashboardPage /> },
        MainRoute::Videos => html! { <VideosPage /> },
        MainRoute::Player { id } => html! { <PlayerPage {id} /> },
        MainRoute::Learning => html! { <LearningPage /> },
        MainRoute::Admin => html! { <AdminPage /> },
        MainRoute::Login | MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={route}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    tracing::debug!(?route, "switching route");
    html! { <MainRouteView {route} /> }
}
