//! Interval Row Component
//!
//! One start/end pair in the schedule editor.

use leptos::prelude::*;

use crate::context::ScheduleContext;
use crate::schedule::IntervalRow;

/// A single editable interval row
#[component]
pub fn IntervalRowEditor(row: IntervalRow) -> impl IntoView {
    let ctx = use_context::<ScheduleContext>().expect("ScheduleContext should be provided");
    let id = row.id;

    view! {
        <div class="interval-row">
            <input
                type="time"
                class="interval-start"
                prop:value=row.start
                on:input=move |ev| ctx.edit_start(id, event_target_value(&ev))
            />
            <span class="interval-sep">"–"</span>
            <input
                type="time"
                class="interval-end"
                prop:value=row.end
                on:input=move |ev| ctx.edit_end(id, event_target_value(&ev))
            />
            <button
                type="button"
                class="remove-interval-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.remove_row(id);
                }
            >
                "×"
            </button>
        </div>
    }
}
