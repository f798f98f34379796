//! Task Toggle Binding
//!
//! Attaches optimistic toggles to the server-rendered task widgets.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::commands;
use crate::config::UiConfig;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::toggle::{OptimisticToggle, ToggleSink, ToggleView};

/// Draws a toggle state onto its widget element
pub struct WidgetSink {
    element: Element,
    label: Option<Element>,
}

impl ToggleSink for WidgetSink {
    fn render(&self, view: &ToggleView) {
        dom_bind::swap_class(&self.element, &view.stale_class, &view.class);
        if let Some(label) = &self.label {
            label.set_text_content(Some(&view.label));
        }
        dom_bind::set_data_attr(&self.element, "is-active", if view.is_active { "true" } else { "false" });
    }
}

/// Templates render booleans as `True`/`False`, scripts as `true`/`false`
fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on")
}

/// Validate a widget's parts before binding. Returns the task id when the
/// widget can be bound.
fn check_widget(
    task_id: Option<String>,
    has_label: bool,
    label_selector: &str,
    diagnostics: &dyn Diagnostics,
) -> Option<String> {
    let Some(task_id) = task_id.filter(|id| !id.trim().is_empty()) else {
        diagnostics.record(DiagnosticEvent::UnboundWidget);
        return None;
    };
    if !has_label {
        diagnostics.record(DiagnosticEvent::MissingToggleLabel {
            task_id: task_id.clone(),
            selector: label_selector.to_string(),
        });
    }
    Some(task_id)
}

/// Bind every toggle widget on the page. Returns how many were bound.
pub fn bind_task_toggles(config: Rc<UiConfig>, diagnostics: Rc<dyn Diagnostics>) -> usize {
    let labels = Rc::new(config.labels.clone());
    let mut bound = 0;

    for widget in dom_bind::query_all(&config.toggle_selector) {
        let element = Element::from(widget);
        let label = dom_bind::query_within(&element, &config.toggle_label_selector);
        let Some(task_id) = check_widget(
            dom_bind::data_attr(&element, "task-id"),
            label.is_some(),
            &config.toggle_label_selector,
            diagnostics.as_ref(),
        ) else {
            continue;
        };
        let is_active = dom_bind::data_attr(&element, "is-active").is_some_and(|raw| parse_flag(&raw));
        let sink = WidgetSink {
            element: element.clone(),
            label,
        };
        let toggle = OptimisticToggle::mount(task_id, is_active, Rc::clone(&labels), sink, Rc::clone(&diagnostics));

        let config = Rc::clone(&config);
        let diagnostics = Rc::clone(&diagnostics);
        dom_bind::bind_click(&element, move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            let ticket = toggle.toggle();
            let toggle = toggle.clone();
            let config = Rc::clone(&config);
            let diagnostics = Rc::clone(&diagnostics);
            spawn_local(async move {
                let outcome = commands::toggle_task(&config, toggle.task_id(), diagnostics.as_ref()).await;
                toggle.settle(ticket, outcome);
            });
        });
        bound += 1;
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;

    #[test]
    fn test_check_widget_without_label_is_bound_and_reported() {
        let diagnostics = RecordingDiagnostics::default();
        let task_id = check_widget(Some("12".to_string()), false, ".task-status", &diagnostics);
        assert_eq!(task_id.as_deref(), Some("12"));
        assert!(diagnostics.any(|e| matches!(
            e,
            DiagnosticEvent::MissingToggleLabel { task_id, selector } if task_id == "12" && selector == ".task-status"
        )));
    }

    #[test]
    fn test_check_widget_complete_is_silent() {
        let diagnostics = RecordingDiagnostics::default();
        assert_eq!(check_widget(Some("5".to_string()), true, ".task-status", &diagnostics).as_deref(), Some("5"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_check_widget_without_task_id_is_skipped() {
        let diagnostics = RecordingDiagnostics::default();
        assert_eq!(check_widget(None, true, ".task-status", &diagnostics), None);
        assert_eq!(check_widget(Some("  ".to_string()), false, ".task-status", &diagnostics), None);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.any(|e| matches!(e, DiagnosticEvent::UnboundWidget)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("True"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("False"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes please"));
    }
}
