use i18nrs::yew::use_translation;
use shared::models::WatchStatus;
use yew::{Html, Properties, classes, function_component, html};

/// Translation key for a watch status.
pub fn status_key(status: &WatchStatus) -> &'static str {
    match status {
        WatchStatus::Unwatched => "status.unwatched",
        WatchStatus::InProgress => "status.in_progress",
        WatchStatus::Completed => "status.completed",
        WatchStatus::Other(_) => "status.other",
    }
}

fn badge_class(status: &WatchStatus) -> &'static str {
    match status {
        WatchStatus::Completed => "badge-success",
        WatchStatus::InProgress => "badge-warning",
        WatchStatus::Unwatched | WatchStatus::Other(_) => "badge-ghost",
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBadgeProps {
    pub status: WatchStatus,
}

#[function_component(ProgressBadge)]
pub fn progress_badge(props: &ProgressBadgeProps) -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <span class={classes!("badge", badge_class(&props.status))}>
            {i18n.t(status_key(&props.status))}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label() {
        assert_eq!(status_key(&WatchStatus::Completed), "status.completed");
        assert_eq!(status_key(&WatchStatus::InProgress), "status.in_progress");
        assert_eq!(status_key(&WatchStatus::Unwatched), "status.unwatched");
        assert_eq!(
            status_key(&WatchStatus::Other("paused".to_string())),
            "status.other"
        );
    }

    #[test]
    fn completed_is_highlighted() {
        assert_eq!(badge_class(&WatchStatus::Completed), "badge-success");
        assert_eq!(badge_class(&WatchStatus::Unwatched), "badge-ghost");
    }
}
