mod admin;
mod admin_required;
mod dashboard;
mod error;
mod learning;
pub mod login;
mod player;
mod videos;

pub use admin::AdminPage;
pub use admin_required::AdminRequired;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use learning::LearningPage;
pub use login::LoginPage;
pub use player::PlayerPage;
pub use videos::VideosPage;
