//! skyadmin-tui - Terminal UI for Skygarden Admin
//!
//! This crate provides the ratatui-based terminal interface. It builds the HTTP
//! client from the loaded settings, drives the TEA loop from skyadmin-app, and
//! renders every screen and dialog.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
