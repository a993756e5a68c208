use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::hooks::use_navigator;

/// Shown to signed-in users without the admin role who open an admin page:
/// alerts once, then returns to the dashboard.
#[function_component(AdminRequired)]
pub fn admin_required() -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();
    let message = i18n.t("errors.admin_required");

    use_effect_with((), move |()| {
        tracing::warn!("admin page requested without the admin role");
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(&message) {
                tracing::debug!(?err, "alert unavailable");
            }
        }
        if let Some(navigator) = navigator {
            navigator.replace(&MainRoute::Dashboard);
        }
        || ()
    });

    html! {}
}
