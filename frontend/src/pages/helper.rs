use leptos::*;
use shared::{
    week_start, CalendarDay, DaySchedule, DayView, FetchError, RequestSequencer, ScheduleView, ScheduleViewBuilder, Task,
    ViewSlot,
};

use crate::api::ApiClient;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::card::Card;
use crate::components::recipe_modal::RecipeModal;
use crate::components::schedule_task::{DayViewPanel, TaskActions, WeekCalendar};
use crate::components::tabs::Tabs;
use crate::components::zone_modal::ZoneModal;
use crate::pages::shopping::ShoppingList;
use crate::utils::{format_long_date, slot_view, spawn_view_load, store_schedule_view, stored_schedule_view, today};

#[component]
pub fn HelperPage() -> impl IntoView {
    view! {
        <div class="page helper-page">
            <h1>"Helper Dashboard"</h1>
            <p class="text-muted">{format_long_date(today())}</p>
            <HelperSchedule />
            <ShoppingList />
        </div>
    }
}

/// Today / This Week / Next Week schedule with task completion.
#[component]
fn HelperSchedule() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let active = create_rw_signal(stored_schedule_view());
    let sequencer = store_value(RequestSequencer::<ScheduleView>::new());
    let today_slot = create_rw_signal(ViewSlot::<DayView>::new());
    let this_week_slot = create_rw_signal(ViewSlot::<Vec<CalendarDay>>::new());
    let next_week_slot = create_rw_signal(ViewSlot::<Vec<CalendarDay>>::new());
    let action_error = create_rw_signal(Option::<String>::None);

    let open_recipe = create_rw_signal(Option::<u64>::None);
    let open_zone = create_rw_signal(Option::<u64>::None);

    let load = move |view: ScheduleView| {
        let api = api.get_value();
        match view.week_offset() {
            None => spawn_view_load(sequencer, today_slot, view, async move {
                let response = api.today_schedule().await?;
                let tasks: Vec<Task> = response.tasks.into_iter().map(Task::from).collect();
                Ok::<_, FetchError>(ScheduleViewBuilder::day().build_day_view(&tasks))
            }),
            Some(offset) => {
                let slot = if offset == 0 { this_week_slot } else { next_week_slot };
                spawn_view_load(sequencer, slot, view, async move {
                    let now = today();
                    let days = api.week_schedule(week_start(now, offset)).await?;
                    let days: Vec<DaySchedule> = days.into_iter().map(DaySchedule::from).collect();
                    Ok::<_, FetchError>(ScheduleViewBuilder::calendar().build_week_view(&days, now))
                })
            }
        }
    };

    create_effect(move |_| {
        let view = active.get();
        store_schedule_view(view);
        load(view);
    });

    let set_completed = Callback::new(move |(task_id, completed): (u64, bool)| {
        let api = api.get_value();
        action_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if completed {
                api.complete_task(task_id).await
            } else {
                api.uncomplete_task(task_id).await
            };
            match result {
                Ok(_) => load(active.get_untracked()),
                Err(e) => {
                    log::error!("failed to update task {}: {}", task_id, e);
                    action_error.set(Some(e.user_message()));
                }
            }
        });
    });

    let actions = TaskActions {
        open_recipe: Some(Callback::new(move |id| open_recipe.set(Some(id)))),
        open_zone: Some(Callback::new(move |id| open_zone.set(Some(id)))),
        set_completed: Some(set_completed),
        select: None,
    };

    let tabs = ScheduleView::ALL
        .into_iter()
        .map(|v| (v, v.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <Card title="Schedule">
            <Tabs tabs=tabs active=active />
            {move || action_error.get().map(|e| view! {
                <Alert variant=AlertVariant::Error on_dismiss=Callback::new(move |_| action_error.set(None))>
                    {e}
                </Alert>
            })}
            {move || match active.get() {
                ScheduleView::Today => slot_view(today_slot, move |day_view| {
                    view! { <DayViewPanel day_view=day_view actions=actions /> }.into_view()
                }),
                ScheduleView::ThisWeek => slot_view(this_week_slot, move |days| {
                    view! { <WeekCalendar days=days actions=actions /> }.into_view()
                }),
                ScheduleView::NextWeek => slot_view(next_week_slot, move |days| {
                    view! { <WeekCalendar days=days actions=actions /> }.into_view()
                }),
            }}
        </Card>
        {move || open_recipe.get().map(|id| view! {
            <RecipeModal recipe_id=id on_close=move |_| open_recipe.set(None) />
        })}
        {move || open_zone.get().map(|id| view! {
            <ZoneModal zone_id=id on_close=move |_| open_zone.set(None) />
        })}
    }
}
