//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Category;

/// What the category form is editing
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryEdit {
    /// New category under the given parent (None = root)
    New { parent_id: Option<u32> },
    Existing(Category),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Category currently open in the form - read
    pub editing: ReadSignal<Option<CategoryEdit>>,
    /// Category currently open in the form - write
    set_editing: WriteSignal<Option<CategoryEdit>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        editing: (ReadSignal<Option<CategoryEdit>>, WriteSignal<Option<CategoryEdit>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Trigger a reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open the category form (None closes it)
    pub fn set_editing(&self, edit: Option<CategoryEdit>) {
        self.set_editing.set(edit);
    }
}
