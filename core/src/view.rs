//! Presentation of a `TodoList` as plain data.
//!
//! The renderer owns no state; it reads the list and produces a `View`
//! that a front-end can draw. `Display` gives a plain-text rendering.

use std::fmt;

use crate::controller::{EditMode, Theme, TodoList};
use crate::types::TodoId;

pub const TITLE: &str = "My Todo App";
pub const LOADING_MESSAGE: &str = "Loading todos...";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub theme: Theme,
    pub draft: String,
    pub body: Body,
}

impl View {
    pub fn root_class(&self) -> Option<&'static str> {
        self.theme.root_class()
    }

    /// Icon on the theme button: the theme it switches to.
    pub fn theme_icon(&self) -> &'static str {
        if self.theme.is_dark() {
            "☀️"
        } else {
            "🌙"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    Items(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Text in the edit box, when this row is the one under edit.
    pub editing: Option<String>,
}

pub fn render(list: &TodoList) -> View {
    let body = if list.is_loading() {
        Body::Loading
    } else if list.items().is_empty() {
        Body::Empty
    } else {
        let rows = list
            .items()
            .iter()
            .map(|item| Row {
                id: item.id.clone(),
                text: item.text.clone(),
                completed: item.completed,
                editing: match list.edit_mode() {
                    EditMode::Editing { id, text } if id == &item.id => Some(text.clone()),
                    _ => None,
                },
            })
            .collect();
        Body::Items(rows)
    };
    View {
        theme: list.theme(),
        draft: list.draft().to_string(),
        body,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE} {}", self.theme_icon())?;
        writeln!(f, "> {}", self.draft)?;
        match &self.body {
            Body::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            Body::Empty => writeln!(f, "{EMPTY_MESSAGE}"),
            Body::Items(rows) => {
                for row in rows {
                    match &row.editing {
                        Some(text) => writeln!(f, "[~] {text}")?,
                        None => {
                            let mark = if row.completed { "x" } else { " " };
                            writeln!(f, "[{mark}] {}", row.text)?
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StoreClient;
    use crate::http::HttpResponse;

    fn list_with(body: &str) -> TodoList {
        let mut list = TodoList::new(StoreClient::new("http://store"));
        let cmd = list.begin_load();
        list.settle(cmd.pending, Ok(HttpResponse::new(200, body))).unwrap();
        list
    }

    #[test]
    fn unloaded_list_renders_loading() {
        let list = TodoList::new(StoreClient::new("http://store"));
        let view = render(&list);
        assert_eq!(view.body, Body::Loading);
        assert_eq!(view.root_class(), Some("dark"));
        assert_eq!(view.theme_icon(), "☀️");
    }

    #[test]
    fn loaded_empty_list_renders_empty_message() {
        let view = render(&list_with(r#"{"todos":[]}"#));
        assert_eq!(view.body, Body::Empty);
        assert!(view.to_string().contains(EMPTY_MESSAGE));
    }

    #[test]
    fn rows_mark_completion_and_edit() {
        let mut list = list_with(
            r#"{"todos":[{"_id":"a","todo":"walk dog","completed":true},{"_id":"b","todo":"feed cat","completed":false}]}"#,
        );
        let second = list.items()[1].clone();
        list.begin_edit(&second);
        list.set_edit_text("feed both cats");
        list.toggle_theme();

        let view = render(&list);
        let Body::Items(rows) = &view.body else {
            panic!("expected rows, got {:?}", view.body);
        };
        assert!(rows[0].completed);
        assert_eq!(rows[0].editing, None);
        assert_eq!(rows[1].editing.as_deref(), Some("feed both cats"));
        assert_eq!(view.root_class(), None);
        assert_eq!(view.theme_icon(), "🌙");

        let text = view.to_string();
        assert!(text.contains("[x] walk dog"));
        assert!(text.contains("[~] feed both cats"));
    }
}
