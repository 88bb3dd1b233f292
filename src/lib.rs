//! Navigation history and favorites for a multi-panel file browser.
//!
//! The [`coordinator::ViewCoordinator`] is the only entry point the view
//! layer talks to: it takes [`message::ViewEvent`]s and answers with queued
//! [`message::ViewCommand`]s.

pub mod config;
pub mod coordinator;
pub mod entry;
pub mod error;
pub mod io;
pub mod logging;
pub mod message;
pub mod state;

pub use coordinator::ViewCoordinator;
pub use error::ExplorerError;
