use serde::{Deserialize, Serialize};

/// Default duration sent with an upload when none is given.
pub const DEFAULT_DURATION: &str = "00:00";

/// A training video as returned by the API.
///
/// The server owns this shape; optional columns may be `null` or missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Server-assigned identifier (e.g. `v1700000000`).
    pub id: String,
    /// Title shown in lists.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Playable media URL.
    pub url: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Free-form duration label, usually `MM:SS`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Category id (`required`, `optional`, ...).
    #[serde(default)]
    pub category: Option<String>,
    /// ISO-8601 creation time as produced by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Video {
    /// Description or an empty string.
    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Duration label, defaulting to [`DEFAULT_DURATION`].
    #[must_use]
    pub fn duration_label(&self) -> &str {
        self.duration
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_DURATION)
    }

    /// Whether the video belongs to the given category id.
    #[must_use]
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category.as_deref() == Some(category_id)
    }
}

/// A file attached to a video upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name; the server keeps its extension.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Form data for `POST /videos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    /// Required title.
    pub title: String,
    /// Optional description; sent as an empty string when blank.
    pub description: String,
    /// Required category id.
    pub category: String,
    /// Duration label.
    pub duration: String,
    /// Thumbnail URL; the server substitutes a placeholder when blank.
    pub thumbnail: String,
    /// Media file. Without one the server falls back to a sample video.
    pub file: Option<UploadFile>,
}

impl NewVideo {
    /// Start a form with the two required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: category.into(),
            duration: DEFAULT_DURATION.to_string(),
            thumbnail: String::new(),
            file: None,
        }
    }

    /// Check the fields the server declares as required.
    ///
    /// # Errors
    /// Returns the name of the first missing field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title");
        }
        if self.category.trim().is_empty() {
            return Err("category");
        }
        Ok(())
    }
}

/// Acknowledgement returned by `DELETE /videos/{id}` and `POST /progress`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    /// `deleted` or `saved`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_server_record_with_nulls() {
        let video: Video = serde_json::from_value(json!({
            "id": "v1700000000",
            "title": "면접 기본",
            "description": null,
            "url": "http://localhost:8000/uploads/videos/v1700000000.mp4",
            "thumbnail": "https://via.placeholder.com/300x169.png?text=No+Image",
            "duration": null,
            "category": "required",
            "created_at": "2024-01-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(video.id, "v1700000000");
        assert_eq!(video.description_or_empty(), "");
        assert_eq!(video.duration_label(), DEFAULT_DURATION);
        assert!(video.in_category("required"));
        assert!(!video.in_category("optional"));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let video: Video = serde_json::from_value(json!({
            "id": "v1",
            "title": "t",
            "url": "https://example.com/a.mp4",
            "views": 10
        }))
        .unwrap();
        assert!(video.category.is_none());
        assert!(video.created_at.is_none());
    }

    #[test]
    fn new_video_defaults_and_validation() {
        let form = NewVideo::new("Intro", "required");
        assert_eq!(form.duration, "00:00");
        assert!(form.file.is_none());
        assert!(form.validate().is_ok());

        assert_eq!(NewVideo::new(" ", "required").validate(), Err("title"));
        assert_eq!(NewVideo::new("Intro", "").validate(), Err("category"));
    }
}
