use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use shared::models::SESSION_STORAGE_KEY;
use shared::{ApiClient, ClientConfig, ClientError, ClientResult, SessionStore, StoreError};
use std::rc::Rc;
use wasm_bindgen::JsValue;

thread_local! {
    static SHARED_CLIENT: OnceCell<TrainerClient> = OnceCell::new();
}

/// Client used by every page of the browser app.
pub type TrainerClient = ApiClient<BrowserSessionStore>;

/// Session store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

fn unavailable(err: &JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SessionStore for BrowserSessionStore {
    fn load_raw(&self) -> Result<Option<String>, StoreError> {
        // The blob is read as text; decoding happens in `SessionStore::load`.
        let raw = LocalStorage::raw()
            .get_item(SESSION_STORAGE_KEY)
            .map_err(|err| unavailable(&err))?;
        Ok(raw)
    }

    fn save_raw(&self, blob: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(SESSION_STORAGE_KEY, blob)
            .map_err(|err| unavailable(&err))
    }

    fn clear(&self) -> Result<(), StoreError> {
        LocalStorage::delete(SESSION_STORAGE_KEY);
        Ok(())
    }
}

/// The shared API client, created on first use.
pub fn client() -> TrainerClient {
    SHARED_CLIENT.with(|cell| {
        cell.get_or_init(|| ApiClient::new(&ClientConfig::default(), BrowserSessionStore))
            .clone()
    })
}

/// Text to show for a failed call: the server's own detail when it sent one,
/// otherwise the translated generic message.
pub fn error_text(err: &ClientError, translate: impl Fn(&str) -> String) -> String {
    err.server_detail()
        .map_or_else(|| translate(err.message_key()), str::to_string)
}

/// Split a fetch result into what to render and the error to show above it.
/// A failed load renders as empty.
pub fn settle<T: Default>(result: ClientResult<T>, what: &str) -> (T, Option<Rc<ClientError>>) {
    match result {
        Ok(value) => (value, None),
        Err(err) => {
            tracing::warn!(error = %err, "could not load {what}");
            (T::default(), Some(Rc::new(err)))
        }
    }
}

#[cfg(test)]
mod error_text_tests {
    use super::*;

    #[test]
    fn server_detail_wins() {
        let err = ClientError::LoginRejected {
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(error_text(&err, str::to_uppercase), "Invalid credentials");
    }

    #[test]
    fn falls_back_to_translation_key() {
        let err = ClientError::LoginRejected { detail: None };
        assert_eq!(error_text(&err, |key| format!("<{key}>")), "<errors.login_failed>");
        assert_eq!(
            error_text(&ClientError::Forbidden, |key| key.to_string()),
            "errors.admin_required"
        );
    }

    #[test]
    fn settled_success_clears_the_error() {
        let (videos, error) = settle(Ok(vec!["v1".to_string()]), "videos");
        assert_eq!(videos, ["v1"]);
        assert!(error.is_none());
    }

    #[test]
    fn settled_failure_renders_empty_with_message() {
        let (videos, error) = settle::<Vec<String>>(
            Err(ClientError::Status {
                operation: "list videos",
                status: 503,
            }),
            "videos",
        );
        assert!(videos.is_empty());
        let error = error.unwrap();
        assert_eq!(
            error_text(&error, |key| key.to_string()),
            "errors.request_failed"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::{Session, UserRole};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session() -> Session {
        Session {
            email: "demo@test.com".to_string(),
            name: "Demo User".to_string(),
            role: UserRole::User,
            token: "mock-user-token".to_string(),
            avatar: None,
            extra: serde_json::Map::new(),
        }
    }

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let store = BrowserSessionStore;
        store.clear().unwrap();
        assert!(store.load().is_none());

        store.save(&session()).unwrap();
        let raw = LocalStorage::raw().get_item(SESSION_STORAGE_KEY).unwrap();
        assert!(raw.unwrap().contains("\"email\":\"demo@test.com\""));
        assert_eq!(store.load(), Some(session()));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[wasm_bindgen_test]
    fn shared_client_uses_configured_base_url() {
        let api = client();
        assert_eq!(api.base_url(), ClientConfig::default().api_base_url());
    }
}
