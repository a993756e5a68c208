use gloo_storage::{LocalStorage, Storage};
use std::collections::HashMap;

/// Language the UI starts in.
pub const DEFAULT_LANGUAGE: &str = "ko";

/// Local storage key holding the last language picked in the header.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "ko",
            LanguageInfo {
                code: "ko",
                flag: "🇰🇷",
                translation: include_str!("../translations/ko.json"),
                native_name: "한국어",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

/// Supported language for a stored code, falling back to the default.
pub fn resolve_language(stored: Option<&str>) -> &'static str {
    stored
        .and_then(get_language_info)
        .map_or(DEFAULT_LANGUAGE, |info| info.code)
}

/// Language to start in: the remembered choice when it is still supported.
pub fn initial_language() -> &'static str {
    let stored = LocalStorage::raw().get_item(LANGUAGE_STORAGE_KEY).ok().flatten();
    resolve_language(stored.as_deref())
}

/// Remember `code` for the next visit.
pub fn remember_language(code: &str) {
    if let Err(err) = LocalStorage::raw().set_item(LANGUAGE_STORAGE_KEY, code) {
        tracing::warn!(?err, language = code, "could not remember language");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    #[test]
    fn default_language_is_supported() {
        let info = get_language_info(DEFAULT_LANGUAGE).unwrap();
        assert_eq!(info.native_name, "한국어");
        assert!(get_language_info("fr").is_none());
    }

    #[test]
    fn stored_language_is_used_when_supported() {
        assert_eq!(resolve_language(Some("en")), "en");
        assert_eq!(resolve_language(Some("fr")), DEFAULT_LANGUAGE);
        assert_eq!(resolve_language(None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn translations_share_keys() {
        let ko: serde_json::Value =
            serde_json::from_str(supported_languages()["ko"].translation).unwrap();
        let en: serde_json::Value =
            serde_json::from_str(supported_languages()["en"].translation).unwrap();
        for key in [
            "app.title",
            "nav.dashboard",
            "nav.admin",
            "header.logout",
            "errors.login_failed",
            "errors.connection_failed",
            "errors.request_failed",
            "errors.file_unreadable",
            "status.in_progress",
            "categories.required",
        ] {
            assert!(lookup(&ko, key).is_some(), "ko is missing {key}");
            assert!(lookup(&en, key).is_some(), "en is missing {key}");
        }
        assert_eq!(lookup(&ko, "errors.login_failed").unwrap(), "로그인 실패");
    }
}
