pub(crate) mod category_tabs;
pub(crate) mod header_nav_item;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod profile_menu;
pub(crate) mod progress_badge;
pub(crate) mod upload_form;
pub(crate) mod video_card;

pub use category_tabs::CategoryTabs;
pub use progress_badge::ProgressBadge;
pub use upload_form::UploadForm;
pub use video_card::VideoCard;
