//! Page Configuration
//!
//! Selectors, endpoint and labels the behaviors rely on. Pages may override
//! any field through `window.BIDDER_UI_CONFIG`; the rest keep defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::UiError;

/// Name of the optional JS global holding overrides
pub const CONFIG_GLOBAL: &str = "BIDDER_UI_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Container the schedule editor mounts into
    pub schedule_container: String,
    /// Id of the hidden field holding the schedule JSON
    pub schedule_field_id: String,
    pub schedule: ScheduleDefaults,
    /// Selector for toggle widgets; each must carry `data-task-id`
    pub toggle_selector: String,
    /// Selector for the status label inside a toggle widget
    pub toggle_label_selector: String,
    /// Endpoint template, `{task_id}` is substituted
    pub toggle_endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub labels: ToggleLabels,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            schedule_container: "#schedule-editor".to_string(),
            schedule_field_id: "id_schedule_data".to_string(),
            schedule: ScheduleDefaults::default(),
            toggle_selector: ".task-toggle".to_string(),
            toggle_label_selector: ".task-status".to_string(),
            toggle_endpoint: "/task/{task_id}/toggle/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            labels: ToggleLabels::default(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Read overrides from the page, falling back to defaults when absent
    pub fn from_page() -> Result<Self, UiError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| UiError::Config(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Toggle URL for one task
    pub fn toggle_url(&self, task_id: &str) -> String {
        self.toggle_endpoint.replace("{task_id}", task_id)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Values for a freshly added interval row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleDefaults {
    pub start: String,
    pub end: String,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            start: "09:00".to_string(),
            end: "18:00".to_string(),
        }
    }
}

/// Classes and labels for the two toggle states
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    pub active_class: String,
    pub inactive_class: String,
    pub active_label: String,
    pub inactive_label: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            active_class: "is-active".to_string(),
            inactive_class: "is-inactive".to_string(),
            active_label: "Активен".to_string(),
            inactive_label: "На паузе".to_string(),
        }
    }
}
