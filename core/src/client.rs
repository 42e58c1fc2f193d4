//! Stateless request builder and response parser for the todo store.
//!
//! # Design
//! `StoreClient` holds only a `base_url`. Each store operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The host runs the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, CreatedTodo, TodoCollection, TodoId, TodoItem, UpdateTodo};

/// Builds requests for, and parses responses from, the todo store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_create(&self, text: &str) -> Result<HttpRequest, NetworkError> {
        let body = encode(&CreateTodo {
            todo: text.to_string(),
        })?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/addtodo", self.base_url),
            body,
        ))
    }

    pub fn build_delete(&self, id: &TodoId) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, format!("{}/delete/{id}", self.base_url))
    }

    pub fn build_update(&self, patch: &UpdateTodo) -> Result<HttpRequest, NetworkError> {
        let body = encode(patch)?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            format!("{}/update", self.base_url),
            body,
        ))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>, NetworkError> {
        check_status(&response)?;
        let collection: TodoCollection = decode(&response.body)?;
        Ok(collection.todos)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, NetworkError> {
        check_status(&response)?;
        let created: CreatedTodo = decode(&response.body)?;
        Ok(created.todo)
    }

    /// The store's delete body carries nothing the client needs.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }

    /// The update is applied locally from what was sent, so the body is ignored.
    pub fn parse_update(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, NetworkError> {
    serde_json::to_string(value).map_err(|e| NetworkError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::Decode(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `NetworkError` variant.
fn check_status(response: &HttpResponse) -> Result<(), NetworkError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(NetworkError::NotFound);
    }
    Err(NetworkError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
