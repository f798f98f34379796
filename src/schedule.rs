//! Schedule Interval List
//!
//! Ordered start/end rows behind the schedule editor. The hidden form field
//! always holds `serialize()` of the current rows; `commit` is the only code
//! that writes it.

use chrono::Weekday;

use crate::config::ScheduleDefaults;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::error::UiError;
use crate::models::{Interval, TimeOfDay};

/// Stable handle for one row; never reused within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u32);

/// One editable row, possibly incomplete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRow {
    pub id: RowId,
    pub start: String,
    pub end: String,
    /// Weekday restriction carried through from the stored schedule
    pub days: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalList {
    rows: Vec<IntervalRow>,
    next_id: u32,
}

impl IntervalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build rows from the stored field value. Never fails: bad input gives
    /// an empty list and a diagnostic.
    pub fn hydrate(stored: &str, diagnostics: &dyn Diagnostics) -> Self {
        let mut list = Self::new();
        if stored.trim().is_empty() {
            return list;
        }
        let elements = match parse_array(stored) {
            Ok(elements) => elements,
            Err(err) => {
                diagnostics.record(DiagnosticEvent::MalformedSchedule(err));
                return list;
            }
        };
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<Interval>(element) {
                Ok(interval) => {
                    list.push(interval);
                }
                Err(err) => diagnostics.record(DiagnosticEvent::SkippedInterval {
                    index,
                    reason: err.to_string(),
                }),
            }
        }
        list
    }

    /// Append a row and return its handle
    pub fn add_row(&mut self, start: impl Into<String>, end: impl Into<String>) -> RowId {
        self.push(Interval::new(start, end))
    }

    fn push(&mut self, interval: Interval) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(IntervalRow {
            id,
            start: interval.start,
            end: interval.end,
            days: interval.days,
        });
        id
    }

    pub fn add_default_row(&mut self, defaults: &ScheduleDefaults) -> RowId {
        self.add_row(defaults.start.clone(), defaults.end.clone())
    }

    /// Drop the row with this handle. Siblings keep their ids and values.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn set_start(&mut self, id: RowId, value: String) -> bool {
        self.row_mut(id).map(|row| row.start = value).is_some()
    }

    pub fn set_end(&mut self, id: RowId, value: String) -> bool {
        self.row_mut(id).map(|row| row.end = value).is_some()
    }

    pub fn rows(&self) -> &[IntervalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Complete intervals in display order
    pub fn intervals(&self) -> Vec<Interval> {
        self.rows
            .iter()
            .map(|row| Interval {
                start: row.start.clone(),
                end: row.end.clone(),
                days: row.days.clone(),
            })
            .filter(Interval::is_complete)
            .collect()
    }

    /// Canonical JSON for the backing field
    pub fn serialize(&self) -> String {
        // Vec<Interval> of plain strings always serializes
        serde_json::to_string(&self.intervals()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Whether the schedule allows running at `at` on `weekday`. No complete
    /// intervals means no restriction.
    pub fn covers(&self, at: TimeOfDay, weekday: Weekday) -> bool {
        let intervals = self.intervals();
        intervals.is_empty() || intervals.iter().any(|interval| interval.covers(at, weekday))
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut IntervalRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

fn parse_array(stored: &str) -> Result<Vec<serde_json::Value>, UiError> {
    match serde_json::from_str::<serde_json::Value>(stored)? {
        serde_json::Value::Array(elements) => Ok(elements),
        _ => Err(UiError::NotAnArray),
    }
}

/// The hidden form field the schedule is mirrored into
pub trait FieldSink {
    fn read(&self) -> String;
    fn write(&self, value: &str);
}

/// Write the serialized list into the field
pub fn commit(list: &IntervalList, field: &dyn FieldSink) {
    field.write(&list.serialize());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryField(RefCell<String>);

    impl FieldSink for MemoryField {
        fn read(&self) -> String {
            self.0.borrow().clone()
        }
        fn write(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    fn hydrate(stored: &str) -> (IntervalList, RecordingDiagnostics) {
        let diagnostics = RecordingDiagnostics::default();
        let list = IntervalList::hydrate(stored, &diagnostics);
        (list, diagnostics)
    }

    #[test]
    fn test_hydrate_renders_rows_in_order() {
        let (list, diagnostics) =
            hydrate(r#"[{"start":"09:00","end":"12:00"},{"start":"14:00","end":"18:00"}]"#);
        assert_eq!(list.len(), 2);
        assert_eq!(list.rows()[0].start, "09:00");
        assert_eq!(list.rows()[1].end, "18:00");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_hydrate_malformed_is_empty() {
        for stored in ["not json", "{}", "42", r#""09:00""#, "null"] {
            let (list, diagnostics) = hydrate(stored);
            assert!(list.is_empty(), "{stored} should hydrate empty");
            assert!(diagnostics.any(|e| matches!(e, DiagnosticEvent::MalformedSchedule(_))));
        }
    }

    #[test]
    fn test_hydrate_blank_is_silent() {
        let (list, diagnostics) = hydrate("   ");
        assert!(list.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_hydrate_skips_bad_elements() {
        let (list, diagnostics) =
            hydrate(r#"[{"start":"09:00"}, 5, {"start":"10:00","end":"11:00"}, {"start":1,"end":"x"}]"#);
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].start, "10:00");
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.any(|e| matches!(e, DiagnosticEvent::SkippedInterval { index: 1, .. })));
    }

    #[test]
    fn test_hydrate_remove_serialize_empty() {
        let (mut list, _) = hydrate(r#"[{"start":"09:00","end":"12:00"}]"#);
        let id = list.rows()[0].id;
        assert!(list.remove_row(id));
        assert_eq!(list.serialize(), "[]");
    }

    #[test]
    fn test_add_two_default_rows() {
        let (mut list, _) = hydrate("");
        let defaults = ScheduleDefaults::default();
        list.add_default_row(&defaults);
        list.add_default_row(&defaults);
        assert_eq!(
            list.serialize(),
            r#"[{"start":"09:00","end":"18:00"},{"start":"09:00","end":"18:00"}]"#
        );
    }

    #[test]
    fn test_incomplete_rows_stay_but_are_not_serialized() {
        let mut list = IntervalList::new();
        let first = list.add_row("08:00", "09:00");
        let second = list.add_row("10:00", "11:00");
        list.set_end(second, String::new());
        assert_eq!(list.len(), 2);
        assert_eq!(list.serialize(), r#"[{"start":"08:00","end":"09:00"}]"#);

        list.set_start(first, String::new());
        assert_eq!(list.serialize(), "[]");
        list.set_end(second, "12:00".to_string());
        assert_eq!(list.serialize(), r#"[{"start":"10:00","end":"12:00"}]"#);
    }

    #[test]
    fn test_remove_by_identity_keeps_siblings() {
        let mut list = IntervalList::new();
        let a = list.add_row("01:00", "02:00");
        let b = list.add_row("03:00", "04:00");
        let c = list.add_row("05:00", "06:00");
        assert!(list.remove_row(a));
        assert!(!list.remove_row(a));
        assert!(list.remove_row(c));
        assert_eq!(
            list.rows(),
            &[IntervalRow { id: b, start: "03:00".into(), end: "04:00".into(), days: None }]
        );

        let d = list.add_row("07:00", "08:00");
        assert!(d != a && d != b && d != c);
    }

    #[test]
    fn test_edit_unknown_row_is_noop() {
        let mut list = IntervalList::new();
        let id = list.add_row("01:00", "02:00");
        list.remove_row(id);
        assert!(!list.set_start(id, "03:00".to_string()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_serialize_matches_rendered_rows_after_mixed_edits() {
        let mut list = IntervalList::new();
        let a = list.add_row("09:00", "18:00");
        let b = list.add_row("", "");
        let c = list.add_row("20:00", "22:00");
        list.set_start(b, "12:00".to_string());
        list.set_end(b, "13:00".to_string());
        list.remove_row(a);
        list.set_end(c, "23:00".to_string());

        let decoded: Vec<Interval> = serde_json::from_str(&list.serialize()).unwrap();
        let expected: Vec<Interval> = list
            .rows()
            .iter()
            .filter(|row| !row.start.is_empty() && !row.end.is_empty())
            .map(|row| Interval::new(row.start.clone(), row.end.clone()))
            .collect();
        assert_eq!(decoded, expected);
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let inputs = [
            r#"[{"start":"09:00","end":"12:00"},{"start":"","end":"13:00"}]"#,
            r#"[ {"endTime":"02:00", "startTime":"22:00"} ]"#,
            "[]",
        ];
        for stored in inputs {
            let (first, _) = hydrate(stored);
            let once = first.serialize();
            let (second, _) = hydrate(&once);
            assert_eq!(second.serialize(), once);
        }
    }

    #[test]
    fn test_commit_writes_field() {
        let field = MemoryField::default();
        let mut list = IntervalList::hydrate(&field.read(), &RecordingDiagnostics::default());
        list.add_row("09:00", "10:00");
        commit(&list, &field);
        assert_eq!(field.read(), r#"[{"start":"09:00","end":"10:00"}]"#);
    }

    #[test]
    fn test_covers_empty_schedule_is_unrestricted() {
        let mut list = IntervalList::new();
        let noon = TimeOfDay::from_hm(12, 0).unwrap();
        assert!(list.covers(noon, Weekday::Tue));
        list.add_row("", "10:00");
        assert!(list.covers(noon, Weekday::Tue));
        list.add_row("08:00", "10:00");
        assert!(!list.covers(noon, Weekday::Tue));
        list.add_row("11:30", "12:30");
        assert!(list.covers(noon, Weekday::Tue));
    }

    #[test]
    fn test_covers_checks_weekdays() {
        let (list, _) = hydrate(r#"[{"start":"09:00","end":"18:00","days":[6,7]}]"#);
        let noon = TimeOfDay::from_hm(12, 0).unwrap();
        assert!(list.covers(noon, Weekday::Sat));
        assert!(!list.covers(noon, Weekday::Mon));
    }

    #[test]
    fn test_days_survive_edits() {
        let (mut list, _) = hydrate(
            r#"[{"start":"09:00","end":"18:00","days":[6,7]},{"start":"10:00","end":"11:00"}]"#,
        );
        let weekend = list.rows()[0].id;
        let other = list.rows()[1].id;
        list.set_end(weekend, "17:00".to_string());
        list.remove_row(other);
        list.add_row("20:00", "21:00");
        assert_eq!(
            list.serialize(),
            r#"[{"start":"09:00","end":"17:00","days":[6,7]},{"start":"20:00","end":"21:00"}]"#
        );
    }

    #[test]
    fn test_hydrate_mixed_key_element() {
        let (list, diagnostics) = hydrate(r#"[{"start":"09:00","startTime":"08:00","end":"18:00"}]"#);
        assert!(diagnostics.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.serialize(), r#"[{"start":"08:00","end":"18:00"}]"#);
    }
}
