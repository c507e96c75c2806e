//! Shared helpers: hashing, atomic writes, path/URL handling, and log text.

pub mod fs;
pub mod hash;
pub mod path;
mod plural;

pub use plural::plural_count;
