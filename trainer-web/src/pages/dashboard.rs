use crate::api::{client, error_text, settle};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::format::format_time;
use shared::ClientError;
use shared::models::{CategoryFilter, ProgressMap, ProgressSummary, Video, WatchStatus};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Videos the user started but has not finished, most recent first.
fn continue_watching<'a>(videos: &'a [Video], progress: &ProgressMap) -> Vec<(&'a Video, f64)> {
    let mut started: Vec<_> = videos
        .iter()
        .filter_map(|video| {
            progress
                .get(&video.id)
                .filter(|record| record.status == WatchStatus::InProgress)
                .map(|record| (video, record.timestamp, record.last_watched.clone()))
        })
        .collect();
    started.sort_by(|a, b| b.2.cmp(&a.2));
    started
        .into_iter()
        .map(|(video, timestamp, _)| (video, timestamp))
        .collect()
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let videos = use_state(Vec::<Video>::new);
    let progress = use_state(ProgressMap::new);
    let error = use_state(|| None::<Rc<ClientError>>);

    {
        let videos = videos.clone();
        let progress = progress.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let api = client();
                let (list, videos_error) = settle(api.videos(&CategoryFilter::All).await, "videos");
                let (map, progress_error) = settle(api.progress().await, "progress");
                videos.set(list);
                progress.set(map);
                error.set(videos_error.or(progress_error));
            });
            || ()
        });
    }

    let Some(session) = (*session).clone() else {
        return html! {};
    };
    let summary = ProgressSummary::from_videos(&videos, &progress);
    let resume = continue_watching(&videos, &progress);

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">
                { format!("{} {}", i18n.t("dashboard.welcome"), session.display_name()) }
            </h1>

            if let Some(err) = &*error {
                <div class="alert alert-error">
                    <span>{ error_text(err, |key| i18n.t(key)) }</span>
                </div>
            }

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineDocument} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.total") }</div>
                    <div class="stat-value text-primary">{ summary.total.to_string() }</div>
                    <div class="stat-desc">
                        { format!("{} {}%", i18n.t("dashboard.completion"), summary.completion_percent()) }
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.completed") }</div>
                    <div class="stat-value text-success">{ summary.completed.to_string() }</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Icon icon_id={IconId::HeroiconsOutlinePlay} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.in_progress") }</div>
                    <div class="stat-value text-warning">{ summary.in_progress.to_string() }</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{ i18n.t("dashboard.stats.unwatched") }</div>
                    <div class="stat-value">{ summary.unwatched.to_string() }</div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("dashboard.continue") }</h2>
                    if resume.is_empty() {
                        <p class="text-base-content/70">{ i18n.t("dashboard.continue_empty") }</p>
                    } else {
                        <ul class="menu">
                            { for resume.iter().map(|(video, timestamp)| html! {
                                <li>
                                    <Link<MainRoute> to={MainRoute::Player { id: video.id.clone() }}>
                                        <span>{ &video.title }</span>
                                        <span class="badge badge-warning">{ format_time(*timestamp) }</span>
                                    </Link<MainRoute>>
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            { i18n.t("dashboard.cards.videos.title") }
                        </h2>
                        <p>{ i18n.t("dashboard.cards.videos.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Videos} classes="btn btn-primary">
                                { i18n.t("dashboard.cards.videos.action") }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-6 h-6" />
                            { i18n.t("dashboard.cards.learning.title") }
                        </h2>
                        <p>{ i18n.t("dashboard.cards.learning.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Learning} classes="btn btn-secondary">
                                { i18n.t("dashboard.cards.learning.action") }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                if session.is_admin() {
                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="w-6 h-6" />
                                { i18n.t("dashboard.cards.admin.title") }
                            </h2>
                            <p>{ i18n.t("dashboard.cards.admin.description") }</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={MainRoute::Admin} classes="btn btn-outline">
                                    { i18n.t("dashboard.cards.admin.action") }
                                </Link<MainRoute>>
                            </div>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProgressRecord;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("강의 {id}"),
            description: None,
            url: format!("https://example.com/{id}.mp4"),
            thumbnail: None,
            duration: None,
            category: Some("required".to_string()),
            created_at: None,
        }
    }

    fn record(id: &str, status: WatchStatus, last: &str) -> ProgressRecord {
        ProgressRecord {
            user_email: "demo@test.com".to_string(),
            video_id: id.to_string(),
            timestamp: 42.0,
            status,
            last_watched: Some(last.to_string()),
        }
    }

    #[test]
    fn resumes_latest_started_video_first() {
        let videos = vec![video("v1"), video("v2"), video("v3")];
        let progress = ProgressMap::from([
            (
                "v1".to_string(),
                record("v1", WatchStatus::InProgress, "2024-01-01T09:00:00"),
            ),
            (
                "v2".to_string(),
                record("v2", WatchStatus::Completed, "2024-01-03T09:00:00"),
            ),
            (
                "v3".to_string(),
                record("v3", WatchStatus::InProgress, "2024-01-02T09:00:00"),
            ),
        ]);

        let ids: Vec<_> = continue_watching(&videos, &progress)
            .into_iter()
            .map(|(video, _)| video.id.as_str())
            .collect();
        assert_eq!(ids, ["v3", "v1"]);
    }

    #[test]
    fn nothing_to_resume_without_progress() {
        assert!(continue_watching(&[video("v1")], &ProgressMap::new()).is_empty());
    }
}
