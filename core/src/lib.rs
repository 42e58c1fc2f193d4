//! I/O-free core of the todo list client.
//!
//! # Overview
//! Holds the todo list state and keeps it in step with a remote store
//! reached over HTTP. Requests and responses are plain data (host-does-IO
//! pattern): the core builds requests and applies responses, the host runs
//! the round-trips.
//!
//! # Design
//! - `StoreClient` is stateless and maps each store route to a
//!   `build_*` / `parse_*` pair.
//! - `TodoList` owns the list, draft, edit mode, loading flag and theme.
//!   Its `begin_*` methods return `Command`s; `settle` applies outcomes.
//! - `view::render` turns the state into a drawable `View`.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::StoreClient;
pub use controller::{Command, EditMode, Pending, Theme, TodoList};
pub use error::{NetworkError, TodoError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, CreatedTodo, TodoCollection, TodoId, TodoItem, UpdateTodo};
