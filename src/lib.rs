//! Fusion-Listeners Library
//!
//! Listener registry for the fusion-rs job scheduler: which job, trigger and
//! scheduler listeners are registered, and which jobs or triggers each one
//! is interested in.

pub mod config;
pub mod error;
pub mod listeners;
pub mod logger;
pub mod state;

pub use error::{AppError, AppResult};
pub use listeners::ListenerManager;
pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
