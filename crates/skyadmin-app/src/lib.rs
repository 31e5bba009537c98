//! skyadmin-app - Application state and orchestration for Skygarden Admin
//!
//! This crate implements the TEA (The Elm Architecture) pattern: screen state,
//! messages, the `update()` function, and the background actions that talk to
//! the CMS through [`skyadmin_api::CmsApi`]. Configuration loading lives here too.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod editor;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod list_view;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, Screen, UiMode};
