//! Rendering of schedule view models (day list and week calendar).

use leptos::*;
use shared::{CalendarDay, DayView, RecipeRef, RenderTask, ZoneRef};

use crate::components::badge::{Badge, BadgeVariant, PriorityBadge, TaskTypeBadge};
use crate::components::empty_state::EmptyState;

/// Callbacks a rendered schedule can fire. Missing callbacks hide the
/// corresponding controls.
#[derive(Clone, Copy, Default)]
pub struct TaskActions {
    /// Recipe detail link clicked.
    pub open_recipe: Option<Callback<u64>>,
    /// Zone detail link clicked.
    pub open_zone: Option<Callback<u64>>,
    /// Done / Cancel clicked; the flag is the new completion state.
    pub set_completed: Option<Callback<(u64, bool)>>,
    /// Task body clicked (admin association editor).
    pub select: Option<Callback<RenderTask>>,
}

fn task_class(base: &str, task: &RenderTask) -> String {
    let mut class = format!("{} {}", base, task.category.as_str());
    if task.completed {
        class.push_str(" completed");
    }
    class
}

fn duration_label(minutes: u32) -> String {
    format!("{} min", minutes)
}

#[component]
fn RecipeLinks(recipes: Vec<RecipeRef>, open: Option<Callback<u64>>) -> impl IntoView {
    view! {
        <ol class="recipe-list">
            {recipes.into_iter().map(|recipe| {
                let id = recipe.id;
                view! {
                    <li class="recipe-item">
                        <a
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                if let Some(open) = open {
                                    open.call(id);
                                }
                            }
                        >
                            {recipe.name}
                        </a>
                        {recipe.category.map(|c| view! { <span class="recipe-category">" (" {c} ")"</span> })}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

#[component]
fn ZoneLinks(zones: Vec<ZoneRef>, open: Option<Callback<u64>>) -> impl IntoView {
    view! {
        <ol class="zone-list">
            {zones.into_iter().map(|zone| {
                let id = zone.id;
                let label = zone.label();
                view! {
                    <li class="zone-item">
                        <a
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                if let Some(open) = open {
                                    open.call(id);
                                }
                            }
                        >
                            {label}
                        </a>
                        " "
                        <PriorityBadge priority=zone.priority />
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

/// Task row of the single-day view.
#[component]
pub fn DayTaskItem(task: RenderTask, #[prop(optional)] actions: TaskActions) -> impl IntoView {
    let class = task_class("task-item", &task);
    let id = task.id;
    let completed = task.completed;

    let details = if !task.recipes.is_empty() {
        view! { <RecipeLinks recipes=task.recipes.clone() open=actions.open_recipe /> }.into_view()
    } else if !task.zones.is_empty() {
        view! { <ZoneLinks zones=task.zones.clone() open=actions.open_zone /> }.into_view()
    } else {
        view! { <div class="task-description">{task.description.clone()}</div> }.into_view()
    };

    view! {
        <div class=class>
            <div class="task-info">
                <div class="task-time">{task.time_display.clone()}</div>
                <div class="task-title">{task.title.clone()}</div>
                {details}
                <TaskTypeBadge category=task.category type_name=task.type_name.clone() />
                {task.duration_minutes.map(|m| view! { <span class="task-duration">{duration_label(m)}</span> })}
            </div>
            {actions.set_completed.map(|set_completed| view! {
                <div class="task-actions">
                    {if completed {
                        view! {
                            <button class="btn" on:click=move |_| set_completed.call((id, false))>
                                "Cancel"
                            </button>
                        }
                    } else {
                        view! {
                            <button class="btn btn-success" on:click=move |_| set_completed.call((id, true))>
                                "Done"
                            </button>
                        }
                    }}
                </div>
            })}
        </div>
    }
}

/// Compact task entry of a calendar cell.
#[component]
pub fn CalendarTaskItem(task: RenderTask, #[prop(optional)] actions: TaskActions) -> impl IntoView {
    let class = task_class("calendar-task", &task);
    let headline = task.headline().to_string();
    let selectable = actions.select.is_some();
    let style = if selectable { "cursor: pointer;" } else { "" };

    let recipes = (task.recipes.len() > 1)
        .then(|| view! { <RecipeLinks recipes=task.recipes.clone() open=actions.open_recipe /> });
    let zones = (task.zones.len() > 1)
        .then(|| view! { <ZoneLinks zones=task.zones.clone() open=actions.open_zone /> });

    // a single recipe or zone is opened from the headline itself
    let single_detail = match (task.recipes.as_slice(), task.zones.as_slice()) {
        ([recipe], _) => actions.open_recipe.map(|open| (open, recipe.id)),
        (_, [zone]) => actions.open_zone.map(|open| (open, zone.id)),
        _ => None,
    };

    let time_display = task.time_display.clone();
    let icon = task.category.icon();
    let duration = task.duration_minutes;
    let selected_task = task.clone();

    view! {
        <div
            class=class
            style=style
            on:click=move |_| {
                if let Some(select) = actions.select {
                    select.call(selected_task.clone());
                }
            }
        >
            <div>
                <span class="task-icon">{icon}</span>
                {(!time_display.is_empty()).then(|| view! { <span class="task-time">{time_display}</span> })}
                {match single_detail {
                    Some((open, detail_id)) if !selectable => view! {
                        <a
                            href="#"
                            class="task-title"
                            on:click=move |ev| {
                                ev.prevent_default();
                                open.call(detail_id);
                            }
                        >
                            {headline}
                        </a>
                    }.into_view(),
                    _ => view! { <span class="task-title">{headline}</span> }.into_view(),
                }}
                {duration.map(|m| view! { <span class="task-duration">{duration_label(m)}</span> })}
            </div>
            {recipes}
            {zones}
        </div>
    }
}

/// Day view: timed section first, then the anytime section.
#[component]
pub fn DayViewPanel(day_view: DayView, #[prop(optional)] actions: TaskActions) -> impl IntoView {
    if day_view.is_empty() {
        return view! {
            <EmptyState icon="📅">
                <p>"No tasks for today."</p>
            </EmptyState>
        }
        .into_view();
    }

    let DayView { timed, untimed } = day_view;

    view! {
        <div class="today-tasks-container">
            {(!timed.is_empty()).then(|| view! {
                <div class="task-section">
                    <h3>"Schedule"</h3>
                    {timed.into_iter().map(|task| view! { <DayTaskItem task=task actions=actions /> }).collect_view()}
                </div>
            })}
            {(!untimed.is_empty()).then(|| view! {
                <div class="task-section">
                    <h3>"Anytime"</h3>
                    {untimed.into_iter().map(|task| view! { <DayTaskItem task=task actions=actions /> }).collect_view()}
                </div>
            })}
        </div>
    }
    .into_view()
}

/// Seven-day calendar; each cell shows its timed and untimed sections.
#[component]
pub fn WeekCalendar(days: Vec<CalendarDay>, #[prop(optional)] actions: TaskActions) -> impl IntoView {
    if days.is_empty() {
        return view! {
            <EmptyState icon="📅">
                <p>"No schedules available."</p>
            </EmptyState>
        }
        .into_view();
    }

    view! {
        <div class="calendar-week">
            {days.into_iter().map(|day| {
                let heading = day.heading();
                let class = if day.is_today { "calendar-day today" } else { "calendar-day" };
                let empty = day.view.is_empty();
                let DayView { timed, untimed } = day.view;
                view! {
                    <div class=class>
                        <div class="calendar-day-header">
                            {heading}
                            {day.is_today.then(|| view! { " " <Badge variant=BadgeVariant::Today>"Today"</Badge> })}
                        </div>
                        <div class="calendar-day-content">
                            {(!timed.is_empty()).then(|| view! {
                                <div class="task-section">
                                    <h4>"Schedule"</h4>
                                    {timed.into_iter().map(|task| view! { <CalendarTaskItem task=task actions=actions /> }).collect_view()}
                                </div>
                            })}
                            {(!untimed.is_empty()).then(|| view! {
                                <div class="task-section">
                                    <h4>"Anytime"</h4>
                                    {untimed.into_iter().map(|task| view! { <CalendarTaskItem task=task actions=actions /> }).collect_view()}
                                </div>
                            })}
                            {empty.then(|| view! { <p class="no-tasks">"No tasks"</p> })}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ScheduleTask, ScheduleViewBuilder, Task, TaskCategory};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn render(json: serde_json::Value) -> RenderTask {
        let raw: ScheduleTask = serde_json::from_value(json).unwrap();
        ScheduleViewBuilder::day().render(&Task::from(raw))
    }

    #[wasm_bindgen_test]
    fn test_task_class() {
        let task = render(serde_json::json!({"id": 1, "task_type": "meal", "title": "Lunch", "completed": true}));
        assert_eq!(task.category, TaskCategory::Meal);
        assert_eq!(task_class("task-item", &task), "task-item meal completed");

        let task = render(serde_json::json!({"id": 2, "task_type": "errand", "title": "Post"}));
        assert_eq!(task_class("calendar-task", &task), "calendar-task other");
    }

    #[wasm_bindgen_test]
    fn test_duration_label() {
        assert_eq!(duration_label(45), "45 min");
    }
}
