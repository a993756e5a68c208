use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use super::video::Video;

/// Watch state of a video for one user.
///
/// The server stores the status as a free string; values other than the
/// three known ones are preserved untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WatchStatus {
    /// Never started.
    #[default]
    Unwatched,
    /// Started but not finished.
    InProgress,
    /// Played to the end.
    Completed,
    /// Status string this client does not know.
    Other(String),
}

impl WatchStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unwatched => "unwatched",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for WatchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "unwatched" => Self::Unwatched,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for WatchStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<WatchStatus> for String {
    fn from(value: WatchStatus) -> Self {
        match value {
            WatchStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-held watch state for one user and one video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressRecord {
    /// Owner of the record.
    #[serde(default)]
    pub user_email: String,
    /// Video the record belongs to.
    #[serde(default)]
    pub video_id: String,
    /// Last playback position in seconds.
    #[serde(default)]
    pub timestamp: f64,
    /// Watch status.
    #[serde(default)]
    pub status: WatchStatus,
    /// When the record was last written, ISO-8601.
    #[serde(default)]
    pub last_watched: Option<String>,
}

impl ProgressRecord {
    /// The record used for a video with no stored progress.
    #[must_use]
    pub fn unwatched(video_id: impl Into<String>) -> Self {
        Self {
            user_email: String::new(),
            video_id: video_id.into(),
            timestamp: 0.0,
            status: WatchStatus::Unwatched,
            last_watched: None,
        }
    }
}

/// All progress records of a user keyed by video id.
pub type ProgressMap = HashMap<String, ProgressRecord>;

/// Look up the record for a video, defaulting to unwatched at `0`.
#[must_use]
pub fn progress_for(map: &ProgressMap, video_id: &str) -> ProgressRecord {
    map.get(video_id)
        .cloned()
        .unwrap_or_else(|| ProgressRecord::unwatched(video_id))
}

/// Request body for `POST /progress`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressUpdate {
    /// Owner, taken from the session.
    pub email: String,
    /// Video being watched.
    pub video_id: String,
    /// Playback position in seconds.
    pub timestamp: f64,
    /// New status.
    pub status: WatchStatus,
}

/// Counts of watch states over a set of videos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Videos considered.
    pub total: usize,
    /// Videos marked completed.
    pub completed: usize,
    /// Videos started but not completed.
    pub in_progress: usize,
    /// Videos never started.
    pub unwatched: usize,
}

impl ProgressSummary {
    /// Summarize `videos` against the user's records.
    #[must_use]
    pub fn from_videos(videos: &[Video], progress: &ProgressMap) -> Self {
        videos.iter().fold(Self::default(), |mut summary, video| {
            summary.total += 1;
            match progress_for(progress, &video.id).status {
                WatchStatus::Completed => summary.completed += 1,
                WatchStatus::Unwatched => summary.unwatched += 1,
                WatchStatus::InProgress | WatchStatus::Other(_) => summary.in_progress += 1,
            }
            summary
        })
    }

    /// Completed share in whole percent.
    #[must_use]
    pub fn completion_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {id}"),
            description: None,
            url: format!("https://example.com/{id}.mp4"),
            thumbnail: None,
            duration: None,
            category: Some("required".to_string()),
            created_at: None,
        }
    }

    fn sample_map() -> ProgressMap {
        serde_json::from_value(json!({
            "v1": {
                "user_email": "demo@test.com",
                "video_id": "v1",
                "timestamp": 42.5,
                "status": "in_progress",
                "last_watched": "2024-01-01T10:00:00"
            },
            "v2": {
                "user_email": "demo@test.com",
                "video_id": "v2",
                "timestamp": 300.0,
                "status": "completed",
                "last_watched": "2024-01-02T10:00:00"
            }
        }))
        .unwrap()
    }

    #[test]
    fn parses_progress_map() {
        let map = sample_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["v1"].status, WatchStatus::InProgress);
        assert!((map["v1"].timestamp - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_record_defaults_to_unwatched() {
        let record = progress_for(&sample_map(), "v9");
        assert_eq!(record.video_id, "v9");
        assert_eq!(record.status, WatchStatus::Unwatched);
        assert!(record.timestamp.abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_status_survives_round_trip() {
        let status: WatchStatus = serde_json::from_value(json!("paused")).unwrap();
        assert_eq!(status, WatchStatus::Other("paused".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("paused"));
        assert_eq!(
            serde_json::to_value(WatchStatus::InProgress).unwrap(),
            json!("in_progress")
        );
    }

    #[test]
    fn update_serializes_to_server_shape() {
        let update = ProgressUpdate {
            email: "demo@test.com".to_string(),
            video_id: "v1".to_string(),
            timestamp: 12.0,
            status: WatchStatus::Completed,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "email": "demo@test.com",
                "video_id": "v1",
                "timestamp": 12.0,
                "status": "completed"
            })
        );
    }

    #[test]
    fn summary_counts_each_state() {
        let videos = vec![video("v1"), video("v2"), video("v3")];
        let summary = ProgressSummary::from_videos(&videos, &sample_map());
        assert_eq!(
            summary,
            ProgressSummary {
                total: 3,
                completed: 1,
                in_progress: 1,
                unwatched: 1,
            }
        );
        assert_eq!(summary.completion_percent(), 33);
        assert_eq!(ProgressSummary::default().completion_percent(), 0);
    }
}
