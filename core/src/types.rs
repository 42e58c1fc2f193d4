//! Wire DTOs for the todo store.
//!
//! # Design
//! Field names follow the store's JSON (`_id`, `todo`, `completed`) through
//! serde renames, while the Rust side uses `id` / `text`. Ids are opaque
//! strings: the store assigns them and the client only echoes them back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: TodoId,
    #[serde(rename = "todo")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `GET /todos`. A missing `todos` field decodes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoCollection {
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

/// Body of `POST /addtodo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub todo: String,
}

/// Body returned by `POST /addtodo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTodo {
    pub todo: TodoItem,
}

/// Body of `PUT /update`. Only the fields present in the JSON are applied;
/// omitted fields remain unchanged on the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    #[serde(rename = "todo", skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn text(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(id: TodoId, completed: bool) -> Self {
        Self {
            id,
            text: None,
            completed: Some(completed),
        }
    }
}
