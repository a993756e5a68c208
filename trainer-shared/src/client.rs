//! REST client for the training API.
//!
//! Each method issues at most one HTTP call. Transport failures and
//! non-success statuses come back as [`ClientError`]; callers show
//! [`ClientError::user_message`] and move on.

use reqwest::{Client, RequestBuilder, Response, StatusCode, multipart};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::models::{
    Category, CategoryFilter, ErrorResponse, LoginRequest, NewVideo, ProgressMap, ProgressRecord,
    ProgressUpdate, Session, StatusResponse, Video, WatchStatus, categories, progress_for,
};
use crate::store::SessionStore;

/// Lightweight API client bound to one session store.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: String,
    http: Client,
    store: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// Create a client for the configured base URL.
    #[must_use]
    pub fn new(config: &ClientConfig, store: S) -> Self {
        Self::with_http(config, store, Client::new())
    }

    /// Create a client around an existing `reqwest` client.
    #[must_use]
    pub fn with_http(config: &ClientConfig, store: S, http: Client) -> Self {
        Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            http,
            store,
        }
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store backing this client.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    ///
    /// # Errors
    /// Returns an error if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.map_err(|source| {
            tracing::warn!(operation, error = %source, "request did not complete");
            ClientError::from_reqwest(operation, source)
        })?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(operation, status = status.as_u16(), "request succeeded");
            Ok(response)
        } else {
            tracing::warn!(operation, status = status.as_u16(), "request failed");
            Err(ClientError::Status {
                operation,
                status: status.as_u16(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> ClientResult<T> {
        response
            .json()
            .await
            .map_err(|source| ClientError::from_reqwest(operation, source))
    }

    // --- Session ---

    /// Authenticate and store the returned payload as the session.
    ///
    /// # Errors
    /// `LoginRejected` for a non-success status (with the server `detail`
    /// when present), `Unreachable` when the API cannot be reached, or a
    /// storage error.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let url = self.endpoint(&["login"])?;
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|source| {
                tracing::error!(error = %source, "login request did not complete");
                ClientError::Unreachable { source }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ErrorResponse = response.json().await.unwrap_or_default();
            tracing::info!(status = status.as_u16(), "login rejected");
            return Err(ClientError::LoginRejected {
                detail: body.message().map(str::to_string),
            });
        }

        let session: Session = Self::decode("login", response).await?;
        self.store.save(&session)?;
        tracing::info!(email = %session.email, role = %session.role, "signed in");
        Ok(session)
    }

    /// Delete the stored session.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> ClientResult<()> {
        self.store.clear()?;
        tracing::info!("signed out");
        Ok(())
    }

    /// The stored session, if any.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.store.load()
    }

    /// The stored session, or `NotSignedIn`.
    ///
    /// # Errors
    /// Returns `NotSignedIn` when there is no session.
    pub fn require_auth(&self) -> ClientResult<Session> {
        self.current_session().ok_or(ClientError::NotSignedIn)
    }

    /// The stored session if it carries the admin role.
    ///
    /// # Errors
    /// Returns `NotSignedIn` or `Forbidden`.
    pub fn require_admin(&self) -> ClientResult<Session> {
        let session = self.require_auth()?;
        if session.is_admin() {
            Ok(session)
        } else {
            Err(ClientError::Forbidden)
        }
    }

    // --- Videos ---

    /// List videos, optionally restricted to one category.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn videos(&self, filter: &CategoryFilter) -> ClientResult<Vec<Video>> {
        let url = self.endpoint(&["videos"])?;
        let mut request = self.http.get(url);
        if let Some(category) = filter.query_value() {
            request = request.query(&[("category", category)]);
        }
        let response = self.send("list videos", request).await?;
        Self::decode("list videos", response).await
    }

    /// Fetch one video; `None` when the server does not know the id.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status other
    /// than 404.
    pub async fn video(&self, id: &str) -> ClientResult<Option<Video>> {
        let url = self.endpoint(&["videos", id])?;
        match self.send("get video", self.http.get(url)).await {
            Ok(response) => Self::decode("get video", response).await.map(Some),
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// The fixed category list.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        categories()
    }

    /// Upload a video as multipart form data.
    ///
    /// # Errors
    /// Returns `MissingField` for a blank title or category, otherwise an
    /// error on transport failure or non-success status.
    pub async fn add_video(&self, video: NewVideo) -> ClientResult<Video> {
        video
            .validate()
            .map_err(|field| ClientError::MissingField { field })?;
        let url = self.endpoint(&["videos"])?;

        let mut form = multipart::Form::new()
            .text("title", video.title)
            .text("description", video.description)
            .text("category", video.category)
            .text("duration", video.duration)
            .text("thumbnail", video.thumbnail);
        if let Some(file) = video.file {
            tracing::debug!(file_name = %file.file_name, bytes = file.bytes.len(), "attaching upload");
            form = form.part(
                "file",
                multipart::Part::bytes(file.bytes).file_name(file.file_name),
            );
        }

        let response = self
            .send("upload video", self.http.post(url).multipart(form))
            .await?;
        Self::decode("upload video", response).await
    }

    /// Delete a video.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn delete_video(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["videos", id])?;
        let response = self.send("delete video", self.http.delete(url)).await?;
        let ack: StatusResponse = Self::decode("delete video", response).await?;
        tracing::debug!(video_id = id, status = %ack.status, "video deleted");
        Ok(())
    }

    // --- Progress ---

    /// All progress records of the signed-in user; empty when signed out.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn progress(&self) -> ClientResult<ProgressMap> {
        let Some(session) = self.current_session() else {
            return Ok(ProgressMap::new());
        };
        let url = self.endpoint(&["progress", &session.email])?;
        let response = self.send("get progress", self.http.get(url)).await?;
        Self::decode("get progress", response).await
    }

    /// Progress of one video, defaulting to unwatched at `0`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn video_progress(&self, video_id: &str) -> ClientResult<ProgressRecord> {
        let all = self.progress().await?;
        Ok(progress_for(&all, video_id))
    }

    /// Record the playback position of a video. Does nothing when signed out.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn save_progress(
        &self,
        video_id: &str,
        timestamp: f64,
        status: WatchStatus,
    ) -> ClientResult<()> {
        let Some(session) = self.current_session() else {
            tracing::debug!(video_id, "not signed in; progress not saved");
            return Ok(());
        };
        let payload = ProgressUpdate {
            email: session.email,
            video_id: video_id.to_string(),
            timestamp,
            status,
        };
        let url = self.endpoint(&["progress"])?;
        self.send("save progress", self.http.post(url).json(&payload))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;

    fn client(base: &str) -> ApiClient<MemorySessionStore> {
        ApiClient::new(&ClientConfig::new(base).unwrap(), MemorySessionStore::new())
    }

    #[test]
    fn endpoint_joins_segments() {
        let api = client("http://localhost:8000/api");
        assert_eq!(
            api.endpoint(&["videos", "v1"]).unwrap().as_str(),
            "http://localhost:8000/api/videos/v1"
        );
        assert_eq!(api.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn endpoint_encodes_path_segments() {
        let api = client("https://trainer.example.com/api/");
        assert_eq!(
            api.endpoint(&["progress", "a b/c@test.com"]).unwrap().as_str(),
            "https://trainer.example.com/api/progress/a%20b%2Fc@test.com"
        );
    }

    #[test]
    fn require_auth_without_session() {
        let api = client("http://localhost:8000/api");
        assert!(matches!(api.require_auth(), Err(ClientError::NotSignedIn)));
        assert!(matches!(api.require_admin(), Err(ClientError::NotSignedIn)));
        assert_eq!(api.categories().len(), 3);
    }
}
