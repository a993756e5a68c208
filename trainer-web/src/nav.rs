//! Header navigation entries and their visibility rules.

use shared::models::Session;
use strum::{EnumIter, IntoEnumIterator};

use crate::routes::MainRoute;

/// A page linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum NavPage {
    Dashboard,
    Videos,
    Learning,
    Admin,
}

impl NavPage {
    /// Route the link points at.
    pub fn route(self) -> MainRoute {
        match self {
            Self::Dashboard => MainRoute::Dashboard,
            Self::Videos => MainRoute::Videos,
            Self::Learning => MainRoute::Learning,
            Self::Admin => MainRoute::Admin,
        }
    }

    /// Translation key of the link label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Dashboard => "nav.dashboard",
            Self::Videos => "nav.videos",
            Self::Learning => "nav.learning",
            Self::Admin => "nav.admin",
        }
    }

    /// Only rendered for sessions with the admin role.
    pub fn admin_only(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether the link should be highlighted for `current`. The player
    /// belongs to the video list.
    pub fn is_active(self, current: &MainRoute) -> bool {
        match (self, current) {
            (Self::Videos, MainRoute::Player { .. }) => true,
            _ => &self.route() == current,
        }
    }
}

/// Links to render in the header for `session`; none when signed out.
pub fn visible_pages(session: Option<&Session>) -> Vec<NavPage> {
    let Some(session) = session else {
        return Vec::new();
    };
    NavPage::iter()
        .filter(|page| !page.admin_only() || session.is_admin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn session(role: UserRole) -> Session {
        Session {
            email: "demo@test.com".to_string(),
            name: "Demo User".to_string(),
            role,
            token: "mock-user-token".to_string(),
            avatar: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn signed_out_has_no_links() {
        assert!(visible_pages(None).is_empty());
    }

    #[test]
    fn admin_link_only_for_admins() {
        let user = session(UserRole::User);
        assert_eq!(
            visible_pages(Some(&user)),
            [NavPage::Dashboard, NavPage::Videos, NavPage::Learning]
        );

        let admin = session(UserRole::Admin);
        assert_eq!(visible_pages(Some(&admin)).last(), Some(&NavPage::Admin));
        assert_eq!(visible_pages(Some(&admin)).len(), 4);
    }

    #[test]
    fn active_link_follows_route() {
        assert!(NavPage::Dashboard.is_active(&MainRoute::Dashboard));
        assert!(!NavPage::Dashboard.is_active(&MainRoute::Videos));
        assert!(NavPage::Videos.is_active(&MainRoute::Player {
            id: "v1".to_string()
        }));
        assert!(!NavPage::Learning.is_active(&MainRoute::NotFound));
        assert!(NavPage::Admin.is_active(&MainRoute::Admin));
    }

    #[test]
    fn labels_are_namespaced() {
        for page in NavPage::iter() {
            assert!(page.label_key().starts_with("nav."));
        }
    }
}
