use crate::api::{client, error_text, settle};
use crate::components::{ProgressBadge, loading::Loading};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::format::format_time;
use shared::ClientError;
use shared::models::{CategoryFilter, ProgressMap, Video, progress_for};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// "My learning": one row per video with the user's watch state.
#[function_component(LearningPage)]
pub fn learning_page() -> Html {
    let (i18n, _) = use_translation();
    let videos = use_state(|| None::<Vec<Video>>);
    let progress = use_state(ProgressMap::new);
    let error = use_state(|| None::<Rc<ClientError>>);

    {
        let videos = videos.clone();
        let progress = progress.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let api = client();
                let (map, progress_error) = settle(api.progress().await, "progress");
                let (list, videos_error) = settle(api.videos(&CategoryFilter::All).await, "videos");
                progress.set(map);
                error.set(videos_error.or(progress_error));
                videos.set(Some(list));
            });
            || ()
        });
    }

    let Some(list) = &*videos else {
        return html! { <Loading /> };
    };

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("learning.title") }</h1>
            if let Some(err) = &*error {
                <div class="alert alert-error">
                    <span>{ error_text(err, |key| i18n.t(key)) }</span>
                </div>
            } else if list.is_empty() {
                <p class="text-base-content/70">{ i18n.t("learning.empty") }</p>
            }
            if !list.is_empty() {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ i18n.t("learning.columns.video") }</th>
                                <th>{ i18n.t("learning.columns.status") }</th>
                                <th>{ i18n.t("learning.columns.position") }</th>
                                <th>{ i18n.t("learning.columns.last_watched") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for list.iter().map(|video| {
                                let record = progress_for(&progress, &video.id);
                                html! {
                                    <tr key={video.id.clone()}>
                                        <td>
                                            <Link<MainRoute> to={MainRoute::Player { id: video.id.clone() }} classes="link">
                                                { &video.title }
                                            </Link<MainRoute>>
                                        </td>
                                        <td><ProgressBadge status={record.status.clone()} /></td>
                                        <td>{ format!("{} / {}", format_time(record.timestamp), video.duration_label()) }</td>
                                        <td>{ record.last_watched.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
