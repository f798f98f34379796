//! Diagnostics
//!
//! Recoverable problems are reported through an injected sink instead of a
//! hardwired console, so the state machines can be tested natively.

#[cfg(test)]
use std::cell::RefCell;

use crate::error::UiError;

/// Something worth recording that the user never sees directly
#[derive(Debug)]
pub enum DiagnosticEvent {
    /// Schedule field could not be read; the editor starts empty
    MalformedSchedule(UiError),
    /// One array element was not a `{start, end}` object and was skipped
    SkippedInterval { index: usize, reason: String },
    /// Toggle request failed and the widget rolled back
    ToggleFailed { task_id: String, error: UiError },
    /// A response arrived after a newer click and was ignored
    ToggleSuperseded { task_id: String, epoch: u64 },
    /// No CSRF cookie; the request goes out without the header
    MissingCsrfToken { cookie: String },
    /// Toggle widget without a usable `data-task-id`
    UnboundWidget,
    /// Toggle widget has no status label; only class and attribute update
    MissingToggleLabel { task_id: String, selector: String },
    /// Expected page element is absent
    MissingElement(String),
    /// Page-supplied config was rejected
    InvalidConfig(UiError),
}

/// Capability for recording diagnostic events
pub trait Diagnostics {
    fn record(&self, event: DiagnosticEvent);
}

/// Writes events to the browser console through `log`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::MalformedSchedule(err) => {
                log::warn!("[SCHEDULE] Discarding stored schedule: {err}");
            }
            DiagnosticEvent::SkippedInterval { index, reason } => {
                log::warn!("[SCHEDULE] Skipping interval #{index}: {reason}");
            }
            DiagnosticEvent::ToggleFailed { task_id, error } => {
                log::warn!("[TOGGLE] Task {task_id} toggle failed, rolled back: {error}");
            }
            DiagnosticEvent::ToggleSuperseded { task_id, epoch } => {
                log::debug!("[TOGGLE] Task {task_id} ignoring stale response for click {epoch}");
            }
            DiagnosticEvent::MissingCsrfToken { cookie } => {
                log::warn!("[TOGGLE] Cookie '{cookie}' not set, sending without CSRF token");
            }
            DiagnosticEvent::UnboundWidget => {
                log::warn!("[TOGGLE] Widget without data-task-id left unbound");
            }
            DiagnosticEvent::MissingToggleLabel { task_id, selector } => {
                log::warn!("[TOGGLE] Task {task_id} widget has no '{selector}' label");
            }
            DiagnosticEvent::MissingElement(what) => {
                log::debug!("[BOOT] {what} not on this page");
            }
            DiagnosticEvent::InvalidConfig(err) => {
                log::warn!("[BOOT] Using default config: {err}");
            }
        }
    }
}

/// Keeps events in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: RefCell<Vec<DiagnosticEvent>>,
}

#[cfg(test)]
impl RecordingDiagnostics {
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Whether any recorded event satisfies `pred`
    pub fn any(&self, pred: impl Fn(&DiagnosticEvent) -> bool) -> bool {
        self.events.borrow().iter().any(pred)
    }
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        self.events.borrow_mut().push(event);
    }
}
