//! # Client Error Types
//!
//! Every failure a client call can produce, plus the mapping onto the short
//! localized messages shown to users. Transport failures and non-success
//! statuses are not told apart in the UI; the variants exist for logging.

use thiserror::Error;

/// Shown when the login endpoint rejects the credentials without a detail.
pub const LOGIN_FAILED: &str = "로그인 실패";
/// Shown when the API could not be reached.
pub const CONNECTION_FAILED: &str = "서버 연결 오류";
/// Shown for any other failed request.
pub const REQUEST_FAILED: &str = "요청을 처리하지 못했습니다.";
/// Shown when an action needs a session and there is none.
pub const NOT_SIGNED_IN: &str = "로그인이 필요합니다.";
/// Shown when a non-admin opens an admin-only view.
pub const ADMIN_REQUIRED: &str = "관리자 권한이 필요합니다.";
/// Shown when a required form field is blank.
pub const FIELD_REQUIRED: &str = "필수 항목을 입력하세요.";
/// Shown when a selected upload could not be read.
pub const FILE_UNREADABLE: &str = "선택한 파일을 읽을 수 없습니다.";

/// Errors raised while reading or writing the session blob.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage medium cannot be used (private browsing, no window, ...).
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),

    /// The session could not be encoded.
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),

    /// A session file could not be read or written.
    #[error("session file error at {path}: {source}")]
    Io {
        /// File involved.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::ApiClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// `POST /login` answered with a non-success status.
    #[error("login rejected: {}", detail.as_deref().unwrap_or("no detail"))]
    LoginRejected {
        /// `detail` from the error body, when it was a string.
        detail: Option<String>,
    },

    /// The request never produced a response.
    #[error("could not reach the API: {source}")]
    Unreachable {
        /// Transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A non-success status for anything other than login.
    #[error("{operation} failed with HTTP {status}")]
    Status {
        /// Operation name for logs.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("{operation} returned an unreadable body: {source}")]
    Decode {
        /// Operation name for logs.
        operation: &'static str,
        /// Decoding error.
        #[source]
        source: reqwest::Error,
    },

    /// The base URL and path did not form a valid URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// The session store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The action requires a session.
    #[error("no active session")]
    NotSignedIn,

    /// The action requires the admin role.
    #[error("admin role required")]
    Forbidden,

    /// A required form field was blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// A file picked for upload could not be read.
    #[error("could not read {name}: {reason}")]
    File {
        /// File name as reported by the picker or file system.
        name: String,
        /// Why the read failed.
        reason: String,
    },
}

impl ClientError {
    /// Wrap a transport error, distinguishing body decoding from connection
    /// failures.
    pub(crate) fn from_reqwest(operation: &'static str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::Decode { operation, source }
        } else {
            Self::Unreachable { source }
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Translation key for the generic message of this error.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::LoginRejected { .. } => "errors.login_failed",
            Self::Unreachable { .. } => "errors.connection_failed",
            Self::NotSignedIn => "errors.not_signed_in",
            Self::Forbidden => "errors.admin_required",
            Self::MissingField { .. } => "errors.field_required",
            Self::File { .. } => "errors.file_unreadable",
            Self::Status { .. } | Self::Decode { .. } | Self::InvalidUrl(_) | Self::Storage(_) => {
                "errors.request_failed"
            }
        }
    }

    /// Server-provided text that should be shown instead of the generic
    /// message.
    #[must_use]
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::LoginRejected { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Localized message for display.
    #[must_use]
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.server_detail() {
            return detail.to_string();
        }
        match self.message_key() {
            "errors.login_failed" => LOGIN_FAILED,
            "errors.connection_failed" => CONNECTION_FAILED,
            "errors.not_signed_in" => NOT_SIGNED_IN,
            "errors.admin_required" => ADMIN_REQUIRED,
            "errors.field_required" => FIELD_REQUIRED,
            "errors.file_unreadable" => FILE_UNREADABLE,
            _ => REQUEST_FAILED,
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejection_prefers_server_detail() {
        let err = ClientError::LoginRejected {
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.message_key(), "errors.login_failed");

        let err = ClientError::LoginRejected { detail: None };
        assert_eq!(err.user_message(), LOGIN_FAILED);
        assert!(err.to_string().contains("no detail"));
    }

    #[test]
    fn status_failures_collapse_to_generic_message() {
        let err = ClientError::Status {
            operation: "list videos",
            status: 500,
        };
        assert_eq!(err.user_message(), REQUEST_FAILED);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "list videos failed with HTTP 500");
    }

    #[test]
    fn access_errors_have_their_own_messages() {
        assert_eq!(ClientError::NotSignedIn.user_message(), NOT_SIGNED_IN);
        assert_eq!(ClientError::Forbidden.user_message(), ADMIN_REQUIRED);
        assert_eq!(
            ClientError::MissingField { field: "title" }.user_message(),
            FIELD_REQUIRED
        );
    }

    #[test]
    fn unreadable_upload_names_the_file() {
        let err = ClientError::File {
            name: "intro.mp4".to_string(),
            reason: "NotReadableError".to_string(),
        };
        assert_eq!(err.message_key(), "errors.file_unreadable");
        assert_eq!(err.user_message(), FILE_UNREADABLE);
        assert_eq!(err.to_string(), "could not read intro.mp4: NotReadableError");
    }

    #[test]
    fn storage_errors_are_generic() {
        let err = ClientError::from(StoreError::Unavailable("no window".to_string()));
        assert_eq!(err.user_message(), REQUEST_FAILED);
        assert!(err.to_string().contains("no window"));
    }
}
