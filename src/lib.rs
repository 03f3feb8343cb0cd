//! Retro desktop window manager for the terminal.
//!
//! The window core ([`window`], [`placement`], [`gesture`], [`shortcuts`])
//! works in pixels and knows nothing about terminals. [`desktop`] maps it onto
//! character cells and draws it with ratatui.

pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod gesture;
pub mod keybindings;
pub mod layout;
pub mod placement;
pub mod prefs;
pub mod registry;
pub mod runner;
pub mod shortcuts;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
