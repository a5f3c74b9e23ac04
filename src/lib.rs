//! Library exports for the hboard input core.
//!
//! Exposes the keyboard widget, its classifier and listener contracts, and
//! the supporting configuration/theme modules so hosts (and the demo binary)
//! can embed the board without going through the CLI.

pub mod config;
pub mod demo;
pub mod host;
pub mod input;
pub mod keyboard;
pub mod theme;

pub use config::Config;
