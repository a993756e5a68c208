use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="flex flex-col items-center justify-center h-full p-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="mt-3">{i18n.t("app.loading")}</span>
        </div>
    }
}
