use crate::api::{client, error_text};
use crate::components::{CategoryTabs, VideoCard, loading::Loading};
use i18nrs::yew::use_translation;
use shared::ClientError;
use shared::models::{CategoryFilter, ProgressMap, Video, progress_for};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Video list with category tabs.
#[function_component(VideosPage)]
pub fn videos_page() -> Html {
    let (i18n, _) = use_translation();
    let filter = use_state(CategoryFilter::default);
    let videos = use_state(|| None::<Vec<Video>>);
    let progress = use_state(ProgressMap::new);
    let error = use_state(|| None::<Rc<ClientError>>);

    {
        let videos = videos.clone();
        let progress = progress.clone();
        let error = error.clone();
        use_effect_with((*filter).clone(), move |filter| {
            let filter = filter.clone();
            videos.set(None);
            error.set(None);
            spawn_local(async move {
                let api = client();
                match api.videos(&filter).await {
                    Ok(list) => {
                        tracing::debug!(%filter, count = list.len(), "videos loaded");
                        videos.set(Some(list));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "could not load videos");
                        videos.set(Some(Vec::new()));
                        error.set(Some(Rc::new(err)));
                    }
                }
                match api.progress().await {
                    Ok(map) => progress.set(map),
                    Err(err) => tracing::warn!(error = %err, "could not load progress"),
                }
            });
            || ()
        });
    }

    let on_select = {
        let filter = filter.clone();
        Callback::from(move |selected: CategoryFilter| filter.set(selected))
    };

    let body = match &*videos {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! {
            <p class="text-base-content/70">{ i18n.t("videos.empty") }</p>
        },
        Some(list) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for list.iter().map(|video| html! {
                    <VideoCard
                        key={video.id.clone()}
                        video={video.clone()}
                        progress={progress_for(&progress, &video.id)}
                    />
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("videos.title") }</h1>
            <CategoryTabs
                categories={client().categories()}
                selected={(*filter).clone()}
                {on_select}
            />
            if let Some(err) = &*error {
                <div class="alert alert-error">
                    <span>{ error_text(err, |key| i18n.t(key)) }</span>
                </div>
            }
            { body }
        </div>
    }
}
