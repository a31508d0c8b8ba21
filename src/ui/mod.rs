//! The ratatui presentation layer.
//!
//! Renders workflow state and fires user intents into the controller; all
//! workflow transitions stay behind the controller's named operations.

pub mod app;
pub mod clipboard;
pub mod events;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
