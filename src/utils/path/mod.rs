//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `to_locator`)
//! - [`route`]: URL utilities (`is_external_link`, `split_path_fragment`, `normalize_url_path`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, to_locator};
pub use route::{is_external_link, normalize_url_path, split_path_fragment};
