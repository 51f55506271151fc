//! Schedule view model.
//!
//! Backend schedule records are normalized once into [`Task`] (legacy single
//! recipe / zone fields folded into lists, empty strings into `None`), and
//! [`ScheduleViewBuilder`] turns a day's tasks into a [`DayView`]: timed tasks
//! in chronological order followed by untimed tasks in backend order.

use chrono::{Datelike, Duration, NaiveDate};
use std::cmp::Ordering;

use crate::priority::Priority;
use crate::types::{DailySchedule, Id, ScheduleTask, TaskRecipe, TaskZone};

pub const ANYTIME_LABEL: &str = "Anytime";
pub const DETAIL_SEPARATOR: &str = ", ";

// ============================================================================
// Canonical task model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRef {
    pub id: Id,
    pub name: String,
    pub category: Option<String>,
}

impl From<TaskRecipe> for RecipeRef {
    fn from(recipe: TaskRecipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            category: non_empty(Some(recipe.category)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRef {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
}

impl ZoneRef {
    /// `"<name>: <description>"`, or just the name without a description.
    pub fn label(&self) -> String {
        match &self.description {
            Some(description) => format!("{}: {}", self.name, description),
            None => self.name.clone(),
        }
    }
}

impl From<TaskZone> for ZoneRef {
    fn from(zone: TaskZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            description: non_empty(Some(zone.description)),
            priority: zone.priority.normalize(),
        }
    }
}

/// Type-specific part of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Meal { recipes: Vec<RecipeRef> },
    Cleaning { zones: Vec<ZoneRef> },
    Childcare { end_time: Option<String> },
    /// Any task type this client does not know; the backend name is kept.
    Other { type_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    Meal,
    Cleaning,
    Childcare,
    Other,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Meal => "meal",
            TaskCategory::Cleaning => "cleaning",
            TaskCategory::Childcare => "childcare",
            TaskCategory::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskCategory::Meal => "🍽️",
            TaskCategory::Cleaning => "🧹",
            TaskCategory::Childcare => "👶",
            TaskCategory::Other => "📋",
        }
    }

    /// Whether the planned duration is worth showing for this category.
    pub fn shows_duration(&self) -> bool {
        matches!(self, TaskCategory::Childcare | TaskCategory::Other)
    }
}

/// A schedule task after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Id,
    pub title: String,
    pub kind: TaskKind,
    /// "HH:MM"; `None` means anytime.
    pub time: Option<String>,
    /// Planned minutes, `None` when unknown or zero.
    pub duration: Option<u32>,
    pub completed: bool,
    pub description: Option<String>,
}

impl Task {
    pub fn category(&self) -> TaskCategory {
        match self.kind {
            TaskKind::Meal { .. } => TaskCategory::Meal,
            TaskKind::Cleaning { .. } => TaskCategory::Cleaning,
            TaskKind::Childcare { .. } => TaskCategory::Childcare,
            TaskKind::Other { .. } => TaskCategory::Other,
        }
    }

    /// Backend type name, used for CSS classes and badges.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            TaskKind::Other { type_name } => type_name,
            _ => self.category().as_str(),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.time.is_some()
    }

    pub fn recipes(&self) -> &[RecipeRef] {
        match &self.kind {
            TaskKind::Meal { recipes } => recipes,
            _ => &[],
        }
    }

    pub fn zones(&self) -> &[ZoneRef] {
        match &self.kind {
            TaskKind::Cleaning { zones } => zones,
            _ => &[],
        }
    }

    /// Description shown for the task.
    ///
    /// Meals list their recipes and cleaning tasks their zone labels; a meal or
    /// cleaning task with nothing attached, and every other type, falls back to
    /// the free-text description.
    pub fn description_text(&self) -> String {
        match &self.kind {
            TaskKind::Meal { recipes } if !recipes.is_empty() => recipes
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(DETAIL_SEPARATOR),
            TaskKind::Cleaning { zones } if !zones.is_empty() => zones
                .iter()
                .map(ZoneRef::label)
                .collect::<Vec<_>>()
                .join(DETAIL_SEPARATOR),
            _ => self.description.clone().unwrap_or_default(),
        }
    }

    pub fn time_display(&self, mode: TimeDisplayMode) -> String {
        let Some(time) = &self.time else {
            return match mode {
                TimeDisplayMode::FallbackToAnytime => ANYTIME_LABEL.to_string(),
                TimeDisplayMode::BlankIfAbsent => String::new(),
            };
        };
        match &self.kind {
            TaskKind::Childcare {
                end_time: Some(end_time),
            } => format!("{} - {}", time, end_time),
            _ => time.clone(),
        }
    }

    pub fn displayed_duration(&self) -> Option<u32> {
        self.duration.filter(|_| self.category().shows_duration())
    }
}

impl From<ScheduleTask> for Task {
    fn from(raw: ScheduleTask) -> Self {
        let kind = match raw.task_type.trim().to_lowercase().as_str() {
            "meal" => {
                let mut recipes: Vec<RecipeRef> = raw.recipes.into_iter().map(Into::into).collect();
                if recipes.is_empty() {
                    recipes.extend(raw.recipe.map(RecipeRef::from));
                }
                TaskKind::Meal { recipes }
            }
            "cleaning" => {
                let mut zones: Vec<ZoneRef> = raw.zones.into_iter().map(Into::into).collect();
                if zones.is_empty() {
                    zones.extend(raw.zone.map(ZoneRef::from));
                }
                TaskKind::Cleaning { zones }
            }
            "childcare" => TaskKind::Childcare {
                end_time: non_empty(raw.end_time),
            },
            "" => TaskKind::Other {
                type_name: TaskCategory::Other.as_str().to_string(),
            },
            _ => TaskKind::Other {
                type_name: raw.task_type,
            },
        };

        Self {
            id: raw.id,
            title: raw.title,
            kind,
            time: non_empty(raw.time),
            duration: raw
                .duration
                .and_then(|d| u32::try_from(d).ok())
                .filter(|d| *d > 0),
            completed: raw.completed,
            description: non_empty(raw.description),
        }
    }
}

/// One calendar day of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

impl From<DailySchedule> for DaySchedule {
    fn from(raw: DailySchedule) -> Self {
        Self {
            date: raw.date.date_naive(),
            tasks: raw.tasks.into_iter().map(Task::from).collect(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// View model
// ============================================================================

/// How a task without a time is labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeDisplayMode {
    /// Show "Anytime" (day view).
    #[default]
    FallbackToAnytime,
    /// Show nothing (calendar cells).
    BlankIfAbsent,
}

/// Render-ready form of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTask {
    pub id: Id,
    pub title: String,
    pub category: TaskCategory,
    pub type_name: String,
    pub time_display: String,
    pub description: String,
    pub duration_minutes: Option<u32>,
    pub completed: bool,
    pub recipes: Vec<RecipeRef>,
    pub zones: Vec<ZoneRef>,
}

impl RenderTask {
    /// Description, or the title when there is no description.
    pub fn headline(&self) -> &str {
        if self.description.is_empty() {
            &self.title
        } else {
            &self.description
        }
    }

    pub fn has_details(&self) -> bool {
        !self.recipes.is_empty() || !self.zones.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayView {
    pub timed: Vec<RenderTask>,
    pub untimed: Vec<RenderTask>,
}

impl DayView {
    pub fn is_empty(&self) -> bool {
        self.timed.is_empty() && self.untimed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timed.len() + self.untimed.len()
    }

    /// All tasks, timed section first.
    pub fn iter(&self) -> impl Iterator<Item = &RenderTask> {
        self.timed.iter().chain(self.untimed.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub view: DayView,
}

impl CalendarDay {
    /// e.g. "Monday, January 15".
    pub fn heading(&self) -> String {
        self.date.format("%A, %B %-d").to_string()
    }
}

/// Ordering used within a day: timed tasks first, by time string; untimed
/// tasks compare equal so a stable sort keeps their input order.
pub fn schedule_order(a: &Task, b: &Task) -> Ordering {
    match (&a.time, &b.time) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub const DAYS_PER_WEEK: u32 = 7;

/// Monday of the week containing `today` shifted by `week_offset` weeks.
pub fn week_start(today: NaiveDate, week_offset: i64) -> NaiveDate {
    let anchor = today + Duration::days(i64::from(DAYS_PER_WEEK) * week_offset);
    anchor - Duration::days(i64::from(anchor.weekday().num_days_from_monday()))
}

/// Builds day and week views from canonical tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleViewBuilder {
    mode: TimeDisplayMode,
}

impl ScheduleViewBuilder {
    pub fn new(mode: TimeDisplayMode) -> Self {
        Self { mode }
    }

    /// Builder for the single-day view ("Anytime" for untimed tasks).
    pub fn day() -> Self {
        Self::new(TimeDisplayMode::FallbackToAnytime)
    }

    /// Builder for calendar cells (blank time for untimed tasks).
    pub fn calendar() -> Self {
        Self::new(TimeDisplayMode::BlankIfAbsent)
    }

    pub fn mode(&self) -> TimeDisplayMode {
        self.mode
    }

    pub fn render(&self, task: &Task) -> RenderTask {
        RenderTask {
            id: task.id,
            title: task.title.clone(),
            category: task.category(),
            type_name: task.type_name().to_string(),
            time_display: task.time_display(self.mode),
            description: task.description_text(),
            duration_minutes: task.displayed_duration(),
            completed: task.completed,
            recipes: task.recipes().to_vec(),
            zones: task.zones().to_vec(),
        }
    }

    pub fn build_day_view(&self, tasks: &[Task]) -> DayView {
        let mut ordered: Vec<&Task> = tasks.iter().collect();
        // sort_by is stable
        ordered.sort_by(|a, b| schedule_order(a, b));

        let (timed, untimed): (Vec<&Task>, Vec<&Task>) =
            ordered.into_iter().partition(|t| t.is_timed());

        DayView {
            timed: timed.into_iter().map(|t| self.render(t)).collect(),
            untimed: untimed.into_iter().map(|t| self.render(t)).collect(),
        }
    }

    /// One calendar day per schedule, in the order given.
    pub fn build_week_view(&self, days: &[DaySchedule], today: NaiveDate) -> Vec<CalendarDay> {
        days.iter()
            .map(|day| CalendarDay {
                date: day.date,
                is_today: day.date == today,
                view: self.build_day_view(&day.tasks),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::RawPriority;

    fn raw_task(id: Id, task_type: &str, time: Option<&str>) -> ScheduleTask {
        ScheduleTask {
            id,
            schedule_id: 1,
            task_type: task_type.to_string(),
            time: time.map(str::to_string),
            end_time: None,
            duration: None,
            title: format!("task {}", id),
            description: None,
            completed: false,
            recipe: None,
            recipes: Vec::new(),
            zone: None,
            zones: Vec::new(),
        }
    }

    fn task(id: Id, time: Option<&str>) -> Task {
        Task::from(raw_task(id, "other", time))
    }

    fn recipe(id: Id, name: &str) -> TaskRecipe {
        TaskRecipe {
            id,
            name: name.to_string(),
            category: String::new(),
        }
    }

    fn zone(id: Id, name: &str, description: &str) -> TaskZone {
        TaskZone {
            id,
            name: name.to_string(),
            description: description.to_string(),
            priority: RawPriority::Missing,
        }
    }

    #[test]
    fn test_empty_day_view() {
        let view = ScheduleViewBuilder::day().build_day_view(&[]);
        assert!(view.timed.is_empty());
        assert!(view.untimed.is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn test_timed_before_untimed() {
        let tasks = vec![task(1, Some("09:00")), task(2, None), task(3, Some("07:30"))];
        let view = ScheduleViewBuilder::day().build_day_view(&tasks);

        let timed: Vec<&str> = view.timed.iter().map(|t| t.time_display.as_str()).collect();
        assert_eq!(timed, vec!["07:30", "09:00"]);
        assert_eq!(view.untimed.len(), 1);
        assert_eq!(view.untimed[0].id, 2);
        assert_eq!(view.untimed[0].time_display, ANYTIME_LABEL);
    }

    #[test]
    fn test_untimed_keeps_backend_order() {
        let tasks = vec![task(5, None), task(3, None), task(9, Some("10:00")), task(1, None)];
        let view = ScheduleViewBuilder::day().build_day_view(&tasks);

        let untimed: Vec<Id> = view.untimed.iter().map(|t| t.id).collect();
        assert_eq!(untimed, vec![5, 3, 1]);
    }

    #[test]
    fn test_equal_times_keep_backend_order() {
        let tasks = vec![task(2, Some("08:00")), task(1, Some("08:00"))];
        let view = ScheduleViewBuilder::day().build_day_view(&tasks);
        let ids: Vec<Id> = view.timed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_build_does_not_touch_input() {
        let tasks = vec![task(1, Some("09:00")), task(2, Some("07:00"))];
        let before = tasks.clone();
        let _ = ScheduleViewBuilder::day().build_day_view(&tasks);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_empty_time_string_is_untimed() {
        let view = ScheduleViewBuilder::calendar().build_day_view(&[task(1, Some(""))]);
        assert!(view.timed.is_empty());
        assert_eq!(view.untimed[0].time_display, "");
    }

    #[test]
    fn test_meal_recipes_description() {
        let mut raw = raw_task(1, "meal", Some("12:00"));
        raw.recipes = vec![recipe(1, "A"), recipe(2, "B")];
        let rendered = ScheduleViewBuilder::day().render(&Task::from(raw));
        assert_eq!(rendered.description, "A, B");
        assert_eq!(rendered.recipes.len(), 2);
    }

    #[test]
    fn test_meal_single_recipe_description() {
        let mut raw = raw_task(1, "meal", Some("12:00"));
        raw.recipes = vec![recipe(1, "Pasta")];
        assert_eq!(Task::from(raw).description_text(), "Pasta");
    }

    #[test]
    fn test_meal_legacy_recipe_fallback() {
        let mut raw = raw_task(1, "meal", Some("08:00"));
        raw.recipe = Some(recipe(4, "Omelette"));
        let task = Task::from(raw);
        assert_eq!(task.recipes().len(), 1);
        assert_eq!(task.description_text(), "Omelette");
    }

    #[test]
    fn test_recipes_list_wins_over_legacy_recipe() {
        let mut raw = raw_task(1, "meal", Some("08:00"));
        raw.recipe = Some(recipe(4, "Omelette"));
        raw.recipes = vec![recipe(5, "Toast")];
        assert_eq!(Task::from(raw).description_text(), "Toast");
    }

    #[test]
    fn test_meal_without_recipes_uses_description() {
        let mut raw = raw_task(1, "meal", Some("18:00"));
        raw.description = Some("Leftovers".to_string());
        let rendered = ScheduleViewBuilder::day().render(&Task::from(raw));
        assert_eq!(rendered.description, "Leftovers");
        assert!(!rendered.has_details());
    }

    #[test]
    fn test_cleaning_zone_labels() {
        let mut raw = raw_task(1, "cleaning", None);
        raw.zones = vec![zone(1, "Kitchen", "wipe counters")];
        assert_eq!(Task::from(raw).description_text(), "Kitchen: wipe counters");

        let mut raw = raw_task(2, "cleaning", None);
        raw.zones = vec![zone(1, "Kitchen", ""), zone(2, "Bath", "tiles")];
        assert_eq!(Task::from(raw).description_text(), "Kitchen, Bath: tiles");
    }

    #[test]
    fn test_cleaning_legacy_zone_fallback() {
        let mut raw = raw_task(1, "cleaning", None);
        raw.zone = Some(zone(3, "Hall", "vacuum"));
        assert_eq!(Task::from(raw).description_text(), "Hall: vacuum");
    }

    #[test]
    fn test_cleaning_without_zones_renders() {
        let view = ScheduleViewBuilder::day().build_day_view(&[Task::from(raw_task(
            1, "cleaning", None,
        ))]);
        assert_eq!(view.untimed.len(), 1);
        assert_eq!(view.untimed[0].description, "");
        assert_eq!(view.untimed[0].headline(), "task 1");
    }

    #[test]
    fn test_legacy_recipe_ignored_for_non_meal() {
        let mut raw = raw_task(1, "childcare", Some("09:00"));
        raw.recipe = Some(recipe(4, "Omelette"));
        raw.description = Some("Park".to_string());
        assert_eq!(Task::from(raw).description_text(), "Park");
    }

    #[test]
    fn test_childcare_time_range() {
        let mut raw = raw_task(1, "childcare", Some("09:00"));
        raw.end_time = Some("13:00".to_string());
        let task = Task::from(raw);
        assert_eq!(task.time_display(TimeDisplayMode::FallbackToAnytime), "09:00 - 13:00");
    }

    #[test]
    fn test_end_time_ignored_for_other_types() {
        let mut raw = raw_task(1, "meal", Some("09:00"));
        raw.end_time = Some("13:00".to_string());
        assert_eq!(Task::from(raw).time_display(TimeDisplayMode::BlankIfAbsent), "09:00");
    }

    #[test]
    fn test_time_display_modes() {
        let untimed = task(1, None);
        assert_eq!(untimed.time_display(TimeDisplayMode::FallbackToAnytime), "Anytime");
        assert_eq!(untimed.time_display(TimeDisplayMode::BlankIfAbsent), "");
    }

    #[test]
    fn test_duration_suppressed_for_meal_and_cleaning() {
        let mut meal = raw_task(1, "meal", Some("12:00"));
        meal.duration = Some(30);
        let mut cleaning = raw_task(2, "cleaning", None);
        cleaning.duration = Some(45);
        let mut childcare = raw_task(3, "childcare", Some("09:00"));
        childcare.duration = Some(240);
        let mut zero = raw_task(4, "other", None);
        zero.duration = Some(0);

        assert_eq!(Task::from(meal).displayed_duration(), None);
        assert_eq!(Task::from(cleaning).displayed_duration(), None);
        assert_eq!(Task::from(childcare).displayed_duration(), Some(240));
        assert_eq!(Task::from(zero).displayed_duration(), None);
    }

    #[test]
    fn test_unknown_type_renders_generically() {
        let mut raw = raw_task(1, "errand", Some("15:00"));
        raw.description = Some("Post office".to_string());
        let rendered = ScheduleViewBuilder::day().render(&Task::from(raw));
        assert_eq!(rendered.category, TaskCategory::Other);
        assert_eq!(rendered.type_name, "errand");
        assert_eq!(rendered.description, "Post office");
        assert_eq!(rendered.time_display, "15:00");
    }

    #[test]
    fn test_missing_type_is_other() {
        let task = Task::from(raw_task(1, "", None));
        assert_eq!(task.type_name(), "other");
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-17 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert_eq!(week_start(wednesday, 0), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(week_start(wednesday, 1), NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());

        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(week_start(sunday, 0), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(week_start(monday, 0), monday);
    }

    #[test]
    fn test_week_view_marks_today() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let days: Vec<DaySchedule> = (0..3)
            .map(|offset| DaySchedule {
                date: monday + Duration::days(offset),
                tasks: vec![task(offset as Id, None)],
            })
            .collect();

        let week = ScheduleViewBuilder::calendar().build_week_view(&days, monday + Duration::days(1));
        assert_eq!(week.len(), 3);
        assert!(!week[0].is_today);
        assert!(week[1].is_today);
        assert_eq!(week[0].heading(), "Monday, January 15");
        assert_eq!(week[2].view.untimed[0].time_display, "");
    }

    #[test]
    fn test_day_schedule_from_wire() {
        let raw: DailySchedule = serde_json::from_str(
            r#"{"id": 1, "date": "2024-01-15T00:00:00+03:00", "generated": true,
                "tasks": [{"id": 1, "task_type": "meal", "title": "Breakfast", "time": "08:00",
                           "recipe": {"id": 2, "name": "Porridge", "category": "breakfast"}}]}"#,
        )
        .unwrap();

        let day = DaySchedule::from(raw);
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(day.tasks[0].recipes()[0].category.as_deref(), Some("breakfast"));
    }
}
