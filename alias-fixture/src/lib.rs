//! alias-fixture library
//!
//! Two pairs of sibling modules expose a `helper` with the same name. Wrapper
//! functions reach them through qualified paths, aliased items, and aliased
//! modules so a consumer can check that it resolves each call to the right one.

pub mod app;
pub mod manifest;
pub mod module_app;
pub mod pkg_a;
pub mod pkg_b;
pub mod util_a;
pub mod util_b;

// Re-export main types for convenience
pub use manifest::{call_sites, CallSite, ImportStyle};
