//! Schedule Editor Component
//!
//! Replaces the raw schedule textarea with an editable list of intervals.
//! The textarea stays in the form (hidden by the page) and carries the JSON.

use chrono::Weekday;
use gloo_timers::callback::Interval as Ticker;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::IntervalRowEditor;
use crate::config::UiConfig;
use crate::context::ScheduleContext;
use crate::diagnostics::Diagnostics;
use crate::error::UiError;
use crate::models::TimeOfDay;
use crate::schedule::{FieldSink, IntervalList};

/// The schedule form field, whichever element the form renders
pub enum DomField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl TryFrom<Element> for DomField {
    type Error = UiError;

    fn try_from(el: Element) -> Result<Self, UiError> {
        let el = match el.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Ok(DomField::TextArea(textarea)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlInputElement>()
            .map(DomField::Input)
            .map_err(|el| UiError::Config(format!("#{} is not a text field", el.id())))
    }
}

impl FieldSink for DomField {
    fn read(&self) -> String {
        match self {
            DomField::TextArea(el) => el.value(),
            DomField::Input(el) => el.value(),
        }
    }

    fn write(&self, value: &str) {
        match self {
            DomField::TextArea(el) => el.set_value(value),
            DomField::Input(el) => el.set_value(value),
        }
    }
}

/// How often the "in schedule now" badge re-reads the clock
const CLOCK_TICK_MS: u32 = 30_000;

/// Browser-local wall clock time and weekday
fn local_now() -> Option<(TimeOfDay, Weekday)> {
    let now = js_sys::Date::new_0();
    let weekday = match now.get_day() {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    };
    TimeOfDay::from_hm(now.get_hours(), now.get_minutes()).map(|at| (at, weekday))
}

/// Hydrate from the form field and mount the editor into its container.
/// Returns the number of hydrated rows.
pub fn mount_schedule_editor(config: &UiConfig, diagnostics: &dyn Diagnostics) -> Result<usize, UiError> {
    let container = dom_bind::query(&config.schedule_container)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::MissingElement(config.schedule_container.clone()))?;
    let field = dom_bind::by_id(&config.schedule_field_id)
        .ok_or_else(|| UiError::MissingElement(format!("#{}", config.schedule_field_id)))?;
    let field = DomField::try_from(field)?;

    let rows = IntervalList::hydrate(&field.read(), diagnostics);
    let count = rows.len();
    let defaults = config.schedule.clone();

    mount_to(container, move || {
        provide_context(ScheduleContext::new(rows, Box::new(field), defaults));
        view! { <ScheduleEditor /> }
    })
    .forget();
    Ok(count)
}

/// Interval list with add button and an "in schedule now" badge
#[component]
pub fn ScheduleEditor() -> impl IntoView {
    let ctx = use_context::<ScheduleContext>().expect("ScheduleContext should be provided");

    // The editor lives as long as the page, so the ticker is never cancelled
    let (clock, set_clock) = signal(local_now());
    Ticker::new(CLOCK_TICK_MS, move || set_clock.set(local_now())).forget();

    let covers_now = move || {
        let now = clock.get();
        ctx.rows.with(|list| now.map_or(true, |(at, weekday)| list.covers(at, weekday)))
    };

    view! {
        <div class="schedule-editor">
            <div class="interval-list">
                <For
                    each=move || ctx.rows.with(|list| list.rows().to_vec())
                    key=|row| row.id
                    children=move |row| view! { <IntervalRowEditor row=row /> }
                />
            </div>
            <div class="schedule-footer">
                <button
                    type="button"
                    class="add-interval-btn"
                    on:click=move |_| ctx.add_default_row()
                >
                    "+ Добавить интервал"
                </button>
                <span class=move || if covers_now() { "schedule-now on" } else { "schedule-now off" }>
                    {move || if covers_now() { "Сейчас в расписании" } else { "Сейчас вне расписания" }}
                </span>
            </div>
        </div>
    }
}
