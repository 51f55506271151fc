//! Per-view loading state.
//!
//! Every fetch for a view takes a [`Ticket`] from a [`RequestSequencer`]; when
//! responses arrive out of order only the latest ticket for a key is accepted.
//! Accepted results land in a [`ViewSlot`], which keeps the last good data when
//! a reload fails.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::FetchError;

/// Sub-views of the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScheduleView {
    #[default]
    Today,
    ThisWeek,
    NextWeek,
}

impl ScheduleView {
    pub const ALL: [ScheduleView; 3] = [
        ScheduleView::Today,
        ScheduleView::ThisWeek,
        ScheduleView::NextWeek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleView::Today => "today",
            ScheduleView::ThisWeek => "this_week",
            ScheduleView::NextWeek => "next_week",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleView::Today => "Today",
            ScheduleView::ThisWeek => "This Week",
            ScheduleView::NextWeek => "Next Week",
        }
    }

    /// Week offset for calendar views, `None` for the single-day view.
    pub fn week_offset(&self) -> Option<i64> {
        match self {
            ScheduleView::Today => None,
            ScheduleView::ThisWeek => Some(0),
            ScheduleView::NextWeek => Some(1),
        }
    }
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(ScheduleView::Today),
            "this_week" => Ok(ScheduleView::ThisWeek),
            "next_week" => Ok(ScheduleView::NextWeek),
            _ => Err(()),
        }
    }
}

/// Proof that a request for `key` was started, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    seq: u64,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Last-write-wins guard, one counter per view key.
#[derive(Debug, Clone)]
pub struct RequestSequencer<K> {
    latest: HashMap<K, u64>,
}

impl<K> Default for RequestSequencer<K> {
    fn default() -> Self {
        Self {
            latest: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RequestSequencer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `key`, superseding any earlier one for that key.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        let counter = self.latest.entry(key.clone()).or_insert(0);
        *counter += 1;
        Ticket { key, seq: *counter }
    }

    /// Whether `ticket` is still the newest one issued for its key.
    pub fn accept(&self, ticket: &Ticket<K>) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.seq)
    }
}

/// Loaded data for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSlot<T> {
    pub data: Option<T>,
    pub error: Option<FetchError>,
    pub loading: bool,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Stores a finished load. A failure keeps whatever data was shown before.
    pub fn apply(&mut self, result: Result<T, FetchError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(FetchError::user_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.begin(ScheduleView::Today);
        let second = sequencer.begin(ScheduleView::Today);

        assert!(!sequencer.accept(&first));
        assert!(sequencer.accept(&second));
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut sequencer = RequestSequencer::new();
        let today = sequencer.begin(ScheduleView::Today);
        let week = sequencer.begin(ScheduleView::ThisWeek);
        let _newer_week = sequencer.begin(ScheduleView::ThisWeek);

        assert!(sequencer.accept(&today));
        assert!(!sequencer.accept(&week));
        assert_eq!(week.key(), &ScheduleView::ThisWeek);
    }

    #[test]
    fn test_unknown_ticket_is_rejected() {
        let mut issuer = RequestSequencer::new();
        let foreign = issuer.begin("recipes");
        let fresh: RequestSequencer<&str> = RequestSequencer::new();
        assert!(!fresh.accept(&foreign));
    }

    #[test]
    fn test_failed_load_keeps_data() {
        let mut slot = ViewSlot::new();
        slot.start_loading();
        slot.apply(Ok(vec![1, 2, 3]));
        assert_eq!(slot.data, Some(vec![1, 2, 3]));
        assert!(!slot.loading);

        slot.start_loading();
        slot.apply(Err(FetchError::Network("offline".to_string())));
        assert_eq!(slot.data, Some(vec![1, 2, 3]));
        assert!(slot.error.is_some());
        assert!(slot.error_message().is_some());
        assert!(!slot.loading);

        slot.apply(Ok(vec![4]));
        assert_eq!(slot.data, Some(vec![4]));
        assert!(slot.error.is_none());
    }

    #[test]
    fn test_schedule_view_round_trip_names() {
        for view in ScheduleView::ALL {
            assert_eq!(view.as_str().parse(), Ok(view));
        }
        assert_eq!(ScheduleView::Today.week_offset(), None);
        assert_eq!(ScheduleView::NextWeek.week_offset(), Some(1));
        assert!("tomorrow".parse::<ScheduleView>().is_err());
    }
}
