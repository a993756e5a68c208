use shared::SessionStore;
use shared::models::Session;
use yewdux::{Context, Store};

use crate::api::BrowserSessionStore;

/// Application-wide state shared through `yewdux`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
}

impl AppState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

// The store starts from whatever session survived the last page load.
impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self {
            session: BrowserSessionStore.load(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn session(role: UserRole) -> Session {
        Session {
            email: "admin@test.com".to_string(),
            name: "Admin User".to_string(),
            role,
            token: "mock-admin-token".to_string(),
            avatar: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn role_flags() {
        assert!(!AppState::signed_out().is_authenticated());
        assert!(!AppState::signed_out().is_admin());

        let admin = AppState::signed_in(session(UserRole::Admin));
        assert!(admin.is_authenticated());
        assert!(admin.is_admin());

        let user = AppState::signed_in(session(UserRole::User));
        assert!(user.is_authenticated());
        assert!(!user.is_admin());
    }
}
