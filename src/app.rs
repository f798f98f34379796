//! Page Boot
//!
//! Loads config, starts logging, then attaches each behavior whose elements
//! are present on the current page.

use std::rc::Rc;

use crate::components::{bind_task_toggles, mount_schedule_editor};
use crate::config::UiConfig;
use crate::diagnostics::{ConsoleDiagnostics, DiagnosticEvent, Diagnostics};
use crate::error::UiError;

pub fn start() {
    let loaded = UiConfig::from_page();
    let config = Rc::new(loaded.as_ref().cloned().unwrap_or_default());
    if let Some(message) = logger_warning(console_log::init_with_level(config.log_level())) {
        // No logger to report through, so go straight to the console
        web_sys::console::warn_1(&message.into());
    }

    let diagnostics: Rc<dyn Diagnostics> = Rc::new(ConsoleDiagnostics);
    if let Err(err) = loaded {
        diagnostics.record(DiagnosticEvent::InvalidConfig(err));
    }

    match mount_schedule_editor(&config, diagnostics.as_ref()) {
        Ok(rows) => log::info!("[BOOT] Schedule editor mounted with {} rows", rows),
        Err(UiError::MissingElement(what)) => diagnostics.record(DiagnosticEvent::MissingElement(what)),
        Err(err) => log::error!("[BOOT] Schedule editor not mounted: {}", err),
    }

    let bound = bind_task_toggles(Rc::clone(&config), Rc::clone(&diagnostics));
    log::info!("[BOOT] Bound {} task toggles", bound);
}

/// Message for a failed logger install, `None` when it went in
fn logger_warning(result: Result<(), log::SetLoggerError>) -> Option<String> {
    result
        .err()
        .map(|err| format!("[BOOT] Console logger not installed, log output is dropped: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl log::Log for Quiet {
        fn enabled(&self, _: &log::Metadata) -> bool {
            false
        }

        fn log(&self, _: &log::Record) {}

        fn flush(&self) {}
    }

    static QUIET: Quiet = Quiet;

    #[test]
    fn test_logger_installed_is_silent() {
        assert_eq!(logger_warning(Ok(())), None);
    }

    #[test]
    fn test_second_logger_install_is_reported() {
        // Whichever call wins, the one after it must fail
        let _ = log::set_logger(&QUIET);
        let message = logger_warning(log::set_logger(&QUIET)).unwrap();
        assert!(message.starts_with("[BOOT] Console logger not installed"));
    }
}
