//! `rickview` library crate.
//!
//! The screen controller, its views and configuration. The binary
//! entrypoint in `main.rs` wires these to the real HTTP client and the
//! terminal.

pub mod config;
pub mod screen;
pub mod session;
pub mod terminal;
pub mod view;
