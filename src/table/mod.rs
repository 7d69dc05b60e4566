/// Review table module
///
/// Column-oriented in-memory table plus the CSV loader and the
/// derived-input helpers that prepare it for scoring.

pub mod derive;
pub mod frame;
pub mod loader;
pub mod models;

pub use derive::{derive_age_in_days, derive_helpful_no, latest_date};
pub use frame::{Column, ReviewTable};
pub use loader::{load_reviews, read_reviews};
pub use models::columns;
