//! Terminal frontend for the fee impact explorer.
//!
//! The orchestration core lives in `feescope_core`; this crate adds the
//! ratatui UI, the background HTTP fetch worker, logging, and the CLI entry
//! point.

pub mod app;
pub mod components;
pub mod fetch;
pub mod logging;
pub mod state;

pub use app::App;
pub use logging::init_logging;
