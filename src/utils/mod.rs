pub mod error;
pub mod logger;
pub mod paint;
pub mod time;
pub mod validation;
