//! Configuration section definitions.
//!
//! Each module corresponds to a section in `cssagg.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `build` | `[build]`    | Artifact directory, minify, url rebasing  |
//! | `cache` | `[cache]`    | State file, map key, stale threshold      |

mod build;
mod cache;

pub use build::BuildConfig;
pub use cache::CacheConfig;
