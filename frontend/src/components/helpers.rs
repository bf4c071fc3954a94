//! Small utilities shared by the page shell and the dialog.
//!
//! - **Wording**: singular/plural labels for counters.
//! - **Dates & ids**: today's date formatted for segment cards, and the
//!   current timestamp used to derive segment ids.
//! - **User feedback**: the blocking confirmation shown after a save.

use common::collection::format_created_at;
use js_sys::Date;

/// Returns `word` or `word` + "s" depending on `count`.
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Today's local date formatted like `Oct 16, 2026`.
pub fn today_label() -> String {
    let now = Date::new_0();
    // `get_month` is zero-based
    format_created_at(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_ms() -> u64 {
    Date::now() as u64
}

/// Shows the blocking confirmation for a saved segment.
pub fn confirm_saved(name: &str) {
    if let Some(window) = web_sys::window() {
        window
            .alert_with_message(&format!("✅ Segment \"{}\" saved successfully!", name))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "segment"), "segments");
        assert_eq!(pluralize(1, "segment"), "segment");
        assert_eq!(pluralize(2, "attribute"), "attributes");
    }
}
