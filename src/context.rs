//! Schedule Editor Context
//!
//! Shared state for the editor's components, provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ScheduleDefaults;
use crate::schedule::{commit, FieldSink, IntervalList, RowId};

/// Editor-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ScheduleContext {
    /// Current rows - read
    pub rows: ReadSignal<IntervalList>,
    /// Current rows - write
    set_rows: WriteSignal<IntervalList>,
    /// Hidden form field mirrored after every mutation
    field: StoredValue<Box<dyn FieldSink>, LocalStorage>,
    defaults: StoredValue<ScheduleDefaults>,
}

impl ScheduleContext {
    pub fn new(rows: IntervalList, field: Box<dyn FieldSink>, defaults: ScheduleDefaults) -> Self {
        let (rows, set_rows) = signal(rows);
        Self {
            rows,
            set_rows,
            field: StoredValue::new_local(field),
            defaults: StoredValue::new(defaults),
        }
    }

    /// Append a row with the configured start/end
    pub fn add_default_row(&self) {
        let defaults = self.defaults.get_value();
        self.mutate(|list| {
            list.add_default_row(&defaults);
        });
    }

    pub fn remove_row(&self, id: RowId) {
        self.mutate(|list| {
            list.remove_row(id);
        });
    }

    pub fn edit_start(&self, id: RowId, value: String) {
        self.mutate(|list| {
            list.set_start(id, value);
        });
    }

    pub fn edit_end(&self, id: RowId, value: String) {
        self.mutate(|list| {
            list.set_end(id, value);
        });
    }

    fn mutate(&self, f: impl FnOnce(&mut IntervalList)) {
        self.set_rows.update(f);
        self.commit();
    }

    /// Re-serialize the whole list into the form field
    fn commit(&self) {
        self.rows.with_untracked(|list| {
            self.field.with_value(|field| commit(list, field.as_ref()));
        });
    }
}
