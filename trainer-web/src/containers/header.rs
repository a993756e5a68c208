use crate::{
    components::{
        header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
        profile_menu::ProfileMenu,
    },
    nav::visible_pages,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::Session;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub session: Option<Session>,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Top navigation bar. Renders nothing without a session.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(session) = props.session.clone() else {
        return html! {};
    };

    let nav_items = visible_pages(Some(&session))
        .into_iter()
        .map(|page| {
            html! {
                <HeaderNavItem {page} current_route={props.current_route.clone()} />
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft" aria-label={i18n.t("header.menu")}>
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    {nav_items.clone()}
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                {nav_items}
            </ul>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                <ProfileMenu {session} on_logout={props.on_logout.clone()} />
            </div>
        </nav>
    }
}
