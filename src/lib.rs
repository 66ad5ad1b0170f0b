pub mod config;
pub mod error;
pub mod files;
pub mod platform;
pub mod utils;

pub use config::AppConfig;
pub use error::AppError;
pub use utils::fps::FpsCounter;
