pub mod adapter;
pub mod listing;
pub mod request;

pub use crate::domain::model::{Outcome, Revision};
pub use crate::domain::ports::{Reporter, Storage, TagGenerator};
pub use crate::utils::error::Result;
