pub mod config;
pub mod error;
pub mod types;

pub use config::ScrubConfig;
pub use error::{Result, ScrubError};
pub use types::{hex_code, Category, Issue, Report, SummaryEntry};
