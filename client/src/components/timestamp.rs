//! Current year for the footer copyright line.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use leptos::prelude::*;

/// Current UTC year. Uses the JS clock when built for the browser.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn Timestamp() -> impl IntoView {
    current_year().to_string()
}
