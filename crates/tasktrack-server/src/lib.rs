//! TaskTrack Server Library
//!
//! This crate provides the HTTP surface for TaskTrack: the axum
//! router, request handlers, and the shared state holding the
//! in-memory task store.

pub mod config;
pub mod http;
pub mod state;

pub use config::Config;
pub use state::AppState;
