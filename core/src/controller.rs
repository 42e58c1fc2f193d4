//! In-memory todo list state and its synchronization with the store.
//!
//! # Design
//! `TodoList` never performs I/O. Every store operation is split in two:
//! a `begin_*` method returns a [`Command`] (the request to run plus the
//! [`Pending`] intent to apply), and [`TodoList::settle`] consumes the
//! host's outcome for that command. Local state only changes in `settle`,
//! and only when the round-trip succeeded, so a failed request leaves the
//! list exactly as it was.
//!
//! Several commands may be in flight at once. They are settled in whatever
//! order the host hands them back; the last one to settle wins.

use crate::client::StoreClient;
use crate::error::{NetworkError, TodoError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{TodoId, TodoItem, UpdateTodo};

/// Cosmetic colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class to put on the document root, if any.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }
}

/// At most one item is editable at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    NotEditing,
    Editing { id: TodoId, text: String },
}

/// What to apply to the list once a command's request succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Load,
    Create,
    Remove(TodoId),
    CommitEdit { id: TodoId, text: String },
    Toggle(TodoId),
}

impl Pending {
    pub fn name(&self) -> &'static str {
        match self {
            Pending::Load => "load",
            Pending::Create => "create",
            Pending::Remove(_) => "remove",
            Pending::CommitEdit { .. } => "commit_edit",
            Pending::Toggle(_) => "toggle_complete",
        }
    }
}

/// A request for the host to run, paired with its pending intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub request: HttpRequest,
    pub pending: Pending,
}

/// Owned state of the todo list screen.
#[derive(Debug, Clone)]
pub struct TodoList {
    client: StoreClient,
    items: Vec<TodoItem>,
    draft: String,
    edit: EditMode,
    loading: bool,
    theme: Theme,
}

impl TodoList {
    /// A list that has not been loaded yet.
    pub fn new(client: StoreClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            draft: String::new(),
            edit: EditMode::NotEditing,
            loading: true,
            theme: Theme::default(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn item(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Replace the text of the item under edit. Ignored when not editing.
    pub fn set_edit_text(&mut self, new_text: impl Into<String>) {
        if let EditMode::Editing { text, .. } = &mut self.edit {
            *text = new_text.into();
        }
    }

    pub fn begin_edit(&mut self, item: &TodoItem) {
        self.edit = EditMode::Editing {
            id: item.id.clone(),
            text: item.text.clone(),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::NotEditing;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn begin_load(&mut self) -> Command {
        self.loading = true;
        Command {
            request: self.client.build_list(),
            pending: Pending::Load,
        }
    }

    pub fn begin_create(&self, text: &str) -> Result<Command, TodoError> {
        if text.is_empty() {
            return Err(rejected("create", TodoError::EmptyText));
        }
        let request = self
            .client
            .build_create(text)
            .map_err(|e| rejected("create", e.into()))?;
        Ok(Command {
            request,
            pending: Pending::Create,
        })
    }

    pub fn begin_submit_draft(&self) -> Result<Command, TodoError> {
        self.begin_create(&self.draft)
    }

    pub fn begin_remove(&self, id: &TodoId) -> Command {
        Command {
            request: self.client.build_delete(id),
            pending: Pending::Remove(id.clone()),
        }
    }

    pub fn begin_commit_edit(&self, id: &TodoId) -> Result<Command, TodoError> {
        let text = match &self.edit {
            EditMode::Editing { id: editing, text } if editing == id => text.clone(),
            _ => return Err(rejected("commit_edit", TodoError::NotEditing(id.clone()))),
        };
        let request = self
            .client
            .build_update(&UpdateTodo::text(id.clone(), text.clone()))
            .map_err(|e| rejected("commit_edit", e.into()))?;
        Ok(Command {
            request,
            pending: Pending::CommitEdit {
                id: id.clone(),
                text,
            },
        })
    }

    pub fn begin_toggle(&self, id: &TodoId) -> Result<Command, TodoError> {
        let Some(item) = self.item(id) else {
            return Err(rejected("toggle_complete", TodoError::UnknownItem(id.clone())));
        };
        let request = self
            .client
            .build_update(&UpdateTodo::completed(id.clone(), !item.completed))
            .map_err(|e| rejected("toggle_complete", e.into()))?;
        Ok(Command {
            request,
            pending: Pending::Toggle(id.clone()),
        })
    }

    /// Apply the outcome of a command's round-trip.
    ///
    /// On failure the list is left untouched, except that a failed load
    /// clears it, and the error is logged and returned.
    pub fn settle(
        &mut self,
        pending: Pending,
        outcome: Result<HttpResponse, NetworkError>,
    ) -> Result<(), TodoError> {
        let op = pending.name();
        let result = self.apply(pending, outcome);
        match &result {
            Ok(()) => tracing::debug!(op, items = self.items.len(), "store request settled"),
            Err(error) => tracing::warn!(op, %error, "store request failed"),
        }
        result.map_err(TodoError::from)
    }

    fn apply(
        &mut self,
        pending: Pending,
        outcome: Result<HttpResponse, NetworkError>,
    ) -> Result<(), NetworkError> {
        match pending {
            Pending::Load => {
                self.loading = false;
                match outcome.and_then(|r| self.client.parse_list(r)) {
                    Ok(items) => {
                        self.items = items;
                        Ok(())
                    }
                    Err(e) => {
                        self.items.clear();
                        Err(e)
                    }
                }
            }
            Pending::Create => {
                let item = self.client.parse_create(outcome?)?;
                match self.items.iter_mut().find(|existing| existing.id == item.id) {
                    Some(existing) => *existing = item,
                    None => self.items.push(item),
                }
                self.draft.clear();
                Ok(())
            }
            Pending::Remove(id) => {
                self.client.parse_delete(outcome?)?;
                self.items.retain(|item| item.id != id);
                Ok(())
            }
            Pending::CommitEdit { id, text } => {
                self.client.parse_update(outcome?)?;
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.text = text;
                }
                self.edit = EditMode::NotEditing;
                Ok(())
            }
            Pending::Toggle(id) => {
                self.client.parse_update(outcome?)?;
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.completed = !item.completed;
                }
                Ok(())
            }
        }
    }
}

fn rejected(op: &'static str, error: TodoError) -> TodoError {
    tracing::warn!(op, %error, "request not sent");
    error
}
