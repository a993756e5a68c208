use crate::api::{client, error_text};
use crate::components::{ProgressBadge, loading::Loading};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::format::format_time;
use shared::models::{ProgressRecord, Video, WatchStatus};
use shared::{ClientError, ClientResult};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct PlayerPageProps {
    pub id: String,
}

/// Position to seek to when the media is ready. Completed videos start over.
fn resume_position(record: &ProgressRecord) -> Option<f64> {
    (record.status != WatchStatus::Completed && record.timestamp > 0.0).then_some(record.timestamp)
}

/// Media element events that record progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaEvent {
    Pause,
    Ended,
}

/// Status to save for `event`, or `None` when nothing should be sent.
/// Browsers pause right before `ended`; that pause is not saved so
/// `completed` stays final.
fn status_for_event(event: MediaEvent, element_ended: bool) -> Option<WatchStatus> {
    match event {
        MediaEvent::Pause if element_ended => None,
        MediaEvent::Pause => Some(WatchStatus::InProgress),
        MediaEvent::Ended => Some(WatchStatus::Completed),
    }
}

/// A loaded video together with the saved progress it resumes from. Both are
/// fetched before the media element is mounted so `loadedmetadata` always
/// sees the saved record.
#[derive(Debug, Clone)]
struct PlayerData {
    video: Result<Option<Video>, Rc<ClientError>>,
    record: ProgressRecord,
}

impl PlayerData {
    fn new(
        id: &str,
        video: ClientResult<Option<Video>>,
        record: ClientResult<ProgressRecord>,
    ) -> Self {
        let record = record.unwrap_or_else(|err| {
            tracing::warn!(error = %err, %id, "could not load progress");
            ProgressRecord::unwatched(id)
        });
        let video = video.map_err(|err| {
            tracing::warn!(error = %err, %id, "could not load video");
            Rc::new(err)
        });
        Self { video, record }
    }
}

fn save(video_id: String, timestamp: f64, status: WatchStatus) {
    spawn_local(async move {
        match client().save_progress(&video_id, timestamp, status.clone()).await {
            Ok(()) => tracing::debug!(%video_id, timestamp, %status, "progress saved"),
            Err(err) => tracing::warn!(error = %err, %video_id, "could not save progress"),
        }
    });
}

#[function_component(PlayerPage)]
pub fn player_page(props: &PlayerPageProps) -> Html {
    let (i18n, _) = use_translation();
    let data = use_state(|| None::<PlayerData>);
    let video_ref = use_node_ref();

    {
        let data = data.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            data.set(None);
            spawn_local(async move {
                let api = client();
                let record = api.video_progress(&id).await;
                let video = api.video(&id).await;
                data.set(Some(PlayerData::new(&id, video, record)));
            });
            || ()
        });
    }

    let record = (*data)
        .as_ref()
        .map_or_else(|| ProgressRecord::unwatched(props.id.clone()), |data| data.record.clone());

    let onloadedmetadata = {
        let video_ref = video_ref.clone();
        let resume = resume_position(&record);
        Callback::from(move |_: Event| {
            if let (Some(element), Some(position)) = (video_ref.cast::<HtmlVideoElement>(), resume) {
                element.set_current_time(position);
            }
        })
    };

    let on_media = |event: MediaEvent| {
        let video_ref = video_ref.clone();
        let id = props.id.clone();
        Callback::from(move |_: Event| {
            let Some(element) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if let Some(status) = status_for_event(event, element.ended()) {
                save(id.clone(), element.current_time(), status);
            }
        })
    };
    let onpause = on_media(MediaEvent::Pause);
    let onended = on_media(MediaEvent::Ended);

    let back = html! {
        <Link<MainRoute> to={MainRoute::Videos} classes="btn btn-ghost btn-sm">
            { i18n.t("player.back") }
        </Link<MainRoute>>
    };

    match (*data).as_ref().map(|data| &data.video) {
        None => html! { <Loading /> },
        Some(Err(err)) => html! {
            <div class="p-4 space-y-4">
                { back }
                <div class="alert alert-error">
                    <span>{ error_text(err, |key| i18n.t(key)) }</span>
                </div>
            </div>
        },
        Some(Ok(None)) => html! {
            <div class="p-4 space-y-4">
                { back }
                <p>{ i18n.t("player.not_found") }</p>
            </div>
        },
        Some(Ok(Some(video))) => html! {
            <div class="p-4 space-y-4">
                { back }
                <h1 class="text-2xl font-bold">{ &video.title }</h1>
                <video
                    ref={video_ref}
                    class="w-full rounded-box bg-black"
                    src={video.url.clone()}
                    controls=true
                    {onloadedmetadata}
                    {onpause}
                    {onended}
                />
                <div class="flex items-center gap-4 text-sm">
                    <ProgressBadge status={record.status.clone()} />
                    <span>{ format!("{} {}", i18n.t("player.duration"), video.duration_label()) }</span>
                    if let Some(position) = resume_position(&record) {
                        <span>{ format!("{} {}", i18n.t("player.resume"), format_time(position)) }</span>
                    }
                </div>
                <p class="text-base-content/80">{ video.description_or_empty() }</p>
            </div>
        },
    }
}
