//! Optimistic Task Toggle
//!
//! Per-widget active/paused state. A click flips the view at once; the
//! server's answer then confirms it, or a failure rolls it back. Every click
//! gets an epoch and only the newest click may settle the view, so slow
//! responses cannot overwrite a later choice.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ToggleLabels;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    /// What the widget currently shows
    local: bool,
    /// Epoch of the most recent click
    epoch: u64,
}

/// Issued per click, handed back when the request completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTicket {
    pub epoch: u64,
    /// Value shown right before this click
    pub prior: bool,
}

/// What a completed request did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Server value applied
    Confirmed(bool),
    /// Request failed; pre-click value restored
    Reverted(bool),
    /// A newer click owns the view; nothing changed
    Superseded,
}

impl ToggleState {
    pub fn new(is_active: bool) -> Self {
        Self { local: is_active, epoch: 0 }
    }

    pub fn is_active(&self) -> bool {
        self.local
    }

    /// Flip the view and open a new epoch
    pub fn begin(&mut self) -> ToggleTicket {
        let prior = self.local;
        self.local = !prior;
        self.epoch += 1;
        ToggleTicket { epoch: self.epoch, prior }
    }

    /// Apply a request outcome if it belongs to the latest click
    pub fn settle(&mut self, ticket: ToggleTicket, outcome: &Result<bool, UiError>) -> Settlement {
        if ticket.epoch != self.epoch {
            return Settlement::Superseded;
        }
        match outcome {
            Ok(server) => {
                self.local = *server;
                Settlement::Confirmed(*server)
            }
            Err(_) => {
                self.local = ticket.prior;
                Settlement::Reverted(ticket.prior)
            }
        }
    }
}

/// Visual facets of one state, applied together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub is_active: bool,
    pub class: String,
    pub stale_class: String,
    pub label: String,
}

impl ToggleView {
    pub fn new(is_active: bool, labels: &ToggleLabels) -> Self {
        let (class, stale_class, label) = if is_active {
            (&labels.active_class, &labels.inactive_class, &labels.active_label)
        } else {
            (&labels.inactive_class, &labels.active_class, &labels.inactive_label)
        };
        Self {
            is_active,
            class: class.clone(),
            stale_class: stale_class.clone(),
            label: label.clone(),
        }
    }
}

/// Where a toggle's view is drawn
pub trait ToggleSink {
    fn render(&self, view: &ToggleView);
}

/// One mounted widget: state, sink and diagnostics bound together.
/// Cloning shares the same widget.
pub struct OptimisticToggle<S: ToggleSink> {
    task_id: String,
    state: Rc<RefCell<ToggleState>>,
    labels: Rc<ToggleLabels>,
    sink: Rc<S>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl<S: ToggleSink> Clone for OptimisticToggle<S> {
    fn clone(&self) -> Self {
        Self {
            task_id: self.task_id.clone(),
            state: Rc::clone(&self.state),
            labels: Rc::clone(&self.labels),
            sink: Rc::clone(&self.sink),
            diagnostics: Rc::clone(&self.diagnostics),
        }
    }
}

impl<S: ToggleSink> OptimisticToggle<S> {
    /// Mount and draw the initial state
    pub fn mount(
        task_id: impl Into<String>,
        is_active: bool,
        labels: Rc<ToggleLabels>,
        sink: S,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        let toggle = Self {
            task_id: task_id.into(),
            state: Rc::new(RefCell::new(ToggleState::new(is_active))),
            labels,
            sink: Rc::new(sink),
            diagnostics,
        };
        toggle.render();
        toggle
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }

    /// User click: flip and draw synchronously, before any request
    pub fn toggle(&self) -> ToggleTicket {
        let ticket = self.state.borrow_mut().begin();
        self.render();
        ticket
    }

    /// Request finished: reconcile, roll back or ignore
    pub fn settle(&self, ticket: ToggleTicket, outcome: Result<bool, UiError>) -> Settlement {
        let settlement = self.state.borrow_mut().settle(ticket, &outcome);
        match settlement {
            Settlement::Superseded => {
                self.diagnostics.record(DiagnosticEvent::ToggleSuperseded {
                    task_id: self.task_id.clone(),
                    epoch: ticket.epoch,
                });
            }
            Settlement::Confirmed(_) => self.render(),
            Settlement::Reverted(_) => {
                if let Err(error) = outcome {
                    self.diagnostics.record(DiagnosticEvent::ToggleFailed {
                        task_id: self.task_id.clone(),
                        error,
                    });
                }
                self.render();
            }
        }
        settlement
    }

    fn render(&self) {
        let view = ToggleView::new(self.is_active(), &self.labels);
        self.sink.render(&view);
    }
}
