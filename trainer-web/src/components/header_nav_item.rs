use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::{nav::NavPage, routes::MainRoute};

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub page: NavPage,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let page = props.page;
    let active_route_class = props
        .current_route
        .as_ref()
        .filter(|current| page.is_active(current))
        .map(|_| "btn-active");

    html! {
      <li>
          <Link<MainRoute> to={page.route()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              {i18n.t(page.label_key())}
          </Link<MainRoute>>
      </li>
    }
}
