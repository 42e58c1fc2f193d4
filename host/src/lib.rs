//! Network host for `todo-core`.
//!
//! # Overview
//! The core only builds requests and applies responses. This crate runs the
//! round-trips: `Transport` executes a request, `UreqTransport` does so over
//! blocking HTTP, and `Session` drives a `TodoList` through a transport one
//! user action at a time. `Config` reads the store location from the
//! environment.

pub mod config;
pub mod session;
pub mod transport;

pub use config::{Config, ConfigError};
pub use session::Session;
pub use transport::{Transport, UreqTransport};
