//! Sandboxed note storage
//!
//! A flat directory of UTF-8 text files. Filenames are validated before any
//! filesystem access and always resolve to a direct child of the notes root.

pub mod render;
pub mod sanitize;
pub mod store;

pub use sanitize::NameError;
pub use store::{NoteStore, ReadOutcome, StoreError};
