//! Application module: exposes the dashboard model used by the TUI and
//! runtime.
//!
//! The `App` model lives in `app::model` and holds the instantiated
//! widgets, focus/hover state and the recent-notification log.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
