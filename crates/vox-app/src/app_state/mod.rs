//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window host and the mounted visual.

mod core;
mod event_handler;
mod init;
mod mount;
mod render;
mod shutdown;
mod window_host;

pub use core::VoxApp;
