pub mod view_loader;

use chrono::{Local, NaiveDate};
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use leptos::*;
use shared::ScheduleView;

pub use view_loader::{slot_view, spawn_view_load};

const SCHEDULE_VIEW_KEY: &str = "household_schedule_view";
const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Today's date in the browser's timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Asks the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Last schedule sub-view the helper looked at.
pub fn stored_schedule_view() -> ScheduleView {
    LocalStorage::get::<String>(SCHEDULE_VIEW_KEY)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

pub fn store_schedule_view(view: ScheduleView) {
    if let Err(e) = LocalStorage::set(SCHEDULE_VIEW_KEY, view.as_str()) {
        log::warn!("could not remember schedule view: {}", e);
    }
}

/// Shows a success notice that clears itself after a few seconds.
pub fn flash(notice: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    notice.set(Some(message.clone()));
    let _ = Timeout::new(NOTICE_TIMEOUT_MS, move || {
        // a newer notice keeps its own timer
        if notice.get_untracked().as_deref() == Some(message.as_str()) {
            notice.set(None);
        }
    })
    .forget();
}

/// "Monday, January 15, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Jan 15, 2024"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_long_date(date), "Monday, January 15, 2024");
    }

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_short_date(date), "Mar 9, 2024");
    }
}
