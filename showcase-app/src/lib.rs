pub mod config;
pub mod domain;
pub mod prompt;

#[cfg(feature = "ssr")]
pub mod application;

#[cfg(feature = "ssr")]
pub mod infrastructure;

#[cfg(feature = "ssr")]
mod app_context;

#[cfg(feature = "ssr")]
pub use app_context::AppContext;

#[cfg(all(test, feature = "ssr"))]
mod test_support;
