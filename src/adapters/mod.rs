// Adapters layer: concrete implementations of the domain ports (console, storage, tagging).

pub mod console;
pub mod storage;
pub mod tagging;
