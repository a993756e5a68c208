use serde::{Deserialize, Serialize};
use std::fmt;

/// Category id meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// A video category shown as a filter tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Identifier stored on videos.
    pub id: String,
    /// Korean label.
    pub name: String,
}

impl Category {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// The fixed category list. There is no categories table on the server, so
/// the list is kept client-side for a consistent UI.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(ALL_CATEGORIES, "전체 보기"),
        Category::new("required", "필수 교육"),
        Category::new("optional", "선택 교육"),
    ]
}

/// Category selection for `GET /videos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every video.
    #[default]
    All,
    /// Only videos in this category.
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a tab id; `all` and blank mean no filter.
    #[must_use]
    pub fn from_id(id: impl AsRef<str>) -> Self {
        let id = id.as_ref().trim();
        if id.is_empty() || id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(id.to_string())
        }
    }

    /// Value for the `category` query parameter, if any.
    #[must_use]
    pub fn query_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id),
        }
    }

    /// Id of the tab this filter corresponds to.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(id) => id,
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, |id| Self::from_id(id))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_list_starts_with_all() {
        let list = categories();
        let ids: Vec<_> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["all", "required", "optional"]);
        assert_eq!(list[1].name, "필수 교육");
    }

    #[test]
    fn all_means_no_query() {
        assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.query_value(), None);
    }

    #[test]
    fn concrete_category_is_queried() {
        let filter = CategoryFilter::from(Some("required"));
        assert_eq!(filter.query_value(), Some("required"));
        assert_eq!(filter.to_string(), "required");
    }
}
