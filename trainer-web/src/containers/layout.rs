use crate::api::client;
use crate::containers::header::Header;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Callback, Children, Html, Properties, classes, function_component, html};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let session = use_selector(|state: &AppState| state.session.clone());
    let navigator = use_navigator();

    let on_logout = Callback::from(move |()| {
        if let Err(err) = client().logout() {
            tracing::warn!(error = %err, "could not clear the stored session");
        }
        dispatch.set(AppState::signed_out());
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Login);
        }
    });

    html! {
    <>
        <Header
            session={(*session).clone()}
            current_route={props.current_route.clone()}
            on_logout={Some(on_logout)}
        />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "container",
                "mx-auto"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("footer.text")}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
