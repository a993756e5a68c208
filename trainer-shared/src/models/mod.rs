pub mod category;
pub mod errors;
pub mod progress;
pub mod session;
pub mod video;

pub use category::{ALL_CATEGORIES, Category, CategoryFilter, categories};
pub use errors::ErrorResponse;
pub use progress::{
    ProgressMap, ProgressRecord, ProgressSummary, ProgressUpdate, WatchStatus, progress_for,
};
pub use session::{LoginRequest, SESSION_STORAGE_KEY, Session, UserRole};
pub use video::{DEFAULT_DURATION, NewVideo, StatusResponse, UploadFile, Video};
