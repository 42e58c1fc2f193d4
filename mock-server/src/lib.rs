use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub todo: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoCollection {
    pub todos: Vec<Todo>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub todo: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub message: String,
    pub todo: Todo,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    #[serde(rename = "_id")]
    pub id: String,
    pub todo: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Items in insertion order; the store lists them the way they were added.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos))
        .route("/addtodo", post(create_todo))
        .route("/delete/{id}", delete(delete_todo))
        .route("/update", put(update_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<TodoCollection> {
    let todos = db.read().await;
    Json(TodoCollection {
        todos: todos.clone(),
    })
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Created>) {
    let todo = Todo {
        id: Uuid::new_v4().simple().to_string(),
        todo: input.todo,
        completed: false,
    };
    db.write().await.push(todo.clone());
    tracing::debug!(id = %todo.id, "todo added");
    (
        StatusCode::CREATED,
        Json(Created {
            message: "Todo added".to_string(),
            todo,
        }),
    )
}

async fn update_todo(
    State(db): State<Db>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Message>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == input.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(text) = input.todo {
        todo.todo = text;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    tracing::debug!(id = %todo.id, "todo updated");
    Ok(Json(Message {
        message: "Todo updated".to_string(),
    }))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Message>, StatusCode> {
    let mut todos = db.write().await;
    let index = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(index);
    tracing::debug!(%id, "todo deleted");
    Ok(Json(Message {
        message: "Todo deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_store_field_names() {
        let todo = Todo {
            id: "abc".to_string(),
            todo: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["todo"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_rejects_missing_text() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":"wrong field"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_requires_id() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"_id":"abc","todo":"New text"}"#).unwrap();
        assert_eq!(input.id, "abc");
        assert_eq!(input.todo.as_deref(), Some("New text"));
        assert!(input.completed.is_none());
    }
}
