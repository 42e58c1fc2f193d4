//! Drives a `TodoList` through a `Transport`, one round-trip per action.

use todo_core::view::{self, View};
use todo_core::{Command, StoreClient, Theme, TodoError, TodoId, TodoList};

use crate::config::Config;
use crate::transport::Transport;

/// A todo list paired with the transport that reaches its store.
///
/// Each method maps one user action onto the list. Network actions run
/// their request to completion before returning; failures are logged by
/// the list and handed back to the caller.
#[derive(Debug)]
pub struct Session<T> {
    list: TodoList,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self::with_list(TodoList::new(StoreClient::new(&config.base_url)), transport)
    }

    pub fn with_list(list: TodoList, transport: T) -> Self {
        Self { list, transport }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn view(&self) -> View {
        view::render(&self.list)
    }

    pub fn load(&mut self) -> Result<(), TodoError> {
        let command = self.list.begin_load();
        self.run(command)
    }

    pub fn create(&mut self, text: &str) -> Result<(), TodoError> {
        let command = self.list.begin_create(text)?;
        self.run(command)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.list.set_draft(text);
    }

    pub fn submit_draft(&mut self) -> Result<(), TodoError> {
        let command = self.list.begin_submit_draft()?;
        self.run(command)
    }

    pub fn remove(&mut self, id: &TodoId) -> Result<(), TodoError> {
        let command = self.list.begin_remove(id);
        self.run(command)
    }

    pub fn begin_edit(&mut self, id: &TodoId) -> Result<(), TodoError> {
        let item = self
            .list
            .item(id)
            .cloned()
            .ok_or_else(|| TodoError::UnknownItem(id.clone()))?;
        self.list.begin_edit(&item);
        Ok(())
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.list.set_edit_text(text);
    }

    pub fn commit_edit(&mut self, id: &TodoId) -> Result<(), TodoError> {
        let command = self.list.begin_commit_edit(id)?;
        self.run(command)
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
    }

    pub fn toggle_complete(&mut self, id: &TodoId) -> Result<(), TodoError> {
        let command = self.list.begin_toggle(id)?;
        self.run(command)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.list.toggle_theme()
    }

    fn run(&mut self, command: Command) -> Result<(), TodoError> {
        let Command { request, pending } = command;
        let outcome = self.transport.execute(request);
        self.list.settle(pending, outcome)
    }
}
