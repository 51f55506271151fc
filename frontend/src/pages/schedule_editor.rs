use leptos::*;
use shared::{
    week_start, CalendarDay, DaySchedule, FetchError, RenderTask, RequestSequencer, ScheduleViewBuilder, TaskCategory,
    ViewSlot,
};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::schedule_task::{TaskActions, WeekCalendar};
use crate::components::task_associations_modal::TaskAssociationsModal;
use crate::utils::{confirm, flash, slot_view, spawn_view_load, today};

/// Only meal and cleaning tasks carry recipes or zones.
fn has_associations(task: &RenderTask) -> bool {
    matches!(task.category, TaskCategory::Meal | TaskCategory::Cleaning)
}

/// Admin view of this week's schedule. Meal and cleaning tasks open the
/// association editor; every change there re-fetches the week.
#[component]
pub fn ScheduleEditor() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let sequencer = store_value(RequestSequencer::<()>::new());
    let week = create_rw_signal(ViewSlot::<Vec<CalendarDay>>::new());
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);
    let regenerating = create_rw_signal(false);
    let selected_task = create_rw_signal(Option::<u64>::None);

    let load_week = move || {
        let api = api.get_value();
        spawn_view_load(sequencer, week, (), async move {
            let now = today();
            let days = api.week_schedule(week_start(now, 0)).await?;
            let days: Vec<DaySchedule> = days.into_iter().map(DaySchedule::from).collect();
            Ok::<_, FetchError>(ScheduleViewBuilder::calendar().build_week_view(&days, now))
        });
    };
    load_week();

    let on_regenerate = move |_| {
        if !confirm("Regenerate schedule for the next 7 days?") {
            return;
        }
        regenerating.set(true);
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.regenerate_schedule().await {
                Ok(resp) => {
                    flash(success, resp.message);
                    load_week();
                }
                Err(e) => {
                    log::error!("failed to regenerate schedule: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            regenerating.set(false);
        });
    };

    let actions = TaskActions {
        select: Some(Callback::new(move |task: RenderTask| {
            if has_associations(&task) {
                selected_task.set(Some(task.id));
            }
        })),
        ..Default::default()
    };

    let regenerate_button = view! {
        <Button variant=ButtonVariant::Primary loading=regenerating on_click=Callback::new(on_regenerate)>
            "Regenerate Schedule"
        </Button>
    }
    .into_view();

    view! {
        <Card title="This Week" action=regenerate_button>
            <Notices error=error success=success />
            <p class="text-muted">"Click a meal or cleaning task to change its recipes or zones."</p>
            {move || slot_view(week, move |days| view! { <WeekCalendar days=days actions=actions /> }.into_view())}
        </Card>
        {move || selected_task.get().map(|task_id| view! {
            <TaskAssociationsModal
                task_id=task_id
                on_close=move |_| selected_task.set(None)
                on_changed=move |_| load_week()
            />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ScheduleTask, Task};

    fn render(task_type: &str) -> RenderTask {
        let raw: ScheduleTask =
            serde_json::from_value(serde_json::json!({"id": 1, "task_type": task_type, "title": "t"})).unwrap();
        ScheduleViewBuilder::calendar().render(&Task::from(raw))
    }

    #[test]
    fn test_has_associations() {
        assert!(has_associations(&render("meal")));
        assert!(has_associations(&render("cleaning")));
        assert!(!has_associations(&render("childcare")));
        assert!(!has_associations(&render("laundry")));
    }
}
