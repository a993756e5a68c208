use crate::components::progress_badge::ProgressBadge;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::format::format_time;
use shared::models::{ProgressRecord, Video, WatchStatus};
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub progress: ProgressRecord,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let video = &props.video;
    let progress = &props.progress;

    html! {
        <div class="card bg-base-200 shadow-xl">
            if let Some(thumbnail) = video.thumbnail.clone() {
                <figure>
                    <img src={thumbnail} alt={video.title.clone()} class="aspect-video object-cover w-full" />
                </figure>
            }
            <div class="card-body">
                <h2 class="card-title">{&video.title}</h2>
                <p class="text-sm text-base-content/70">{video.description_or_empty()}</p>
                <div class="flex items-center gap-2 text-sm">
                    <span>{video.duration_label()}</span>
                    <ProgressBadge status={progress.status.clone()} />
                    if progress.status == WatchStatus::InProgress {
                        <span class="text-base-content/70">{format_time(progress.timestamp)}</span>
                    }
                </div>
                <div class="card-actions justify-end">
                    <Link<MainRoute> to={MainRoute::Player { id: video.id.clone() }} classes="btn btn-primary btn-sm">
                        {i18n.t("videos.watch")}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
