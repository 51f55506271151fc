pub mod error;
pub mod filter;
pub mod priority;
pub mod schedule;
pub mod types;
pub mod view_state;

pub use error::FetchError;
pub use filter::{
    filter_zones, group_by_category, pending_items, RecipeFilter, DEFAULT_SHOPPING_CATEGORY,
};
pub use priority::{normalize_priority, Priority, RawPriority};
pub use schedule::{
    week_start, CalendarDay, DaySchedule, DayView, RecipeRef, RenderTask, ScheduleViewBuilder,
    Task, TaskCategory, TaskKind, TimeDisplayMode, ZoneRef, DAYS_PER_WEEK,
};
pub use types::*;
pub use view_state::{RequestSequencer, ScheduleView, Ticket, ViewSlot};
