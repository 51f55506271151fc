use std::future::Future;
use std::pin::Pin;

use leptos::*;
use shared::{
    CleaningZone, FetchError, Recipe, RecipeRef, ScheduleTask, Task, TaskCategory, TaskKind, ZoneRef,
};

use crate::api::ApiClient;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::badge::PriorityBadge;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::form::{FormGroup, SelectInput};
use crate::components::loading::Loading;
use crate::components::modal::Modal;

type AssociationChange = Pin<Box<dyn Future<Output = Result<ScheduleTask, FetchError>>>>;

/// `(value, label)` options for entries not yet linked to the task.
fn unlinked_options<'a>(
    candidates: impl Iterator<Item = (u64, &'a str)>,
    linked: &[u64],
) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select...".to_string())];
    options.extend(
        candidates
            .filter(|(id, _)| !linked.contains(id))
            .map(|(id, name)| (id.to_string(), name.to_string())),
    );
    options
}

fn recipe_options(recipes: &[Recipe], linked: &[RecipeRef]) -> Vec<(String, String)> {
    let linked: Vec<u64> = linked.iter().map(|r| r.id).collect();
    unlinked_options(recipes.iter().map(|r| (r.id, r.name.as_str())), &linked)
}

fn zone_options(zones: &[CleaningZone], linked: &[ZoneRef]) -> Vec<(String, String)> {
    let linked: Vec<u64> = linked.iter().map(|z| z.id).collect();
    unlinked_options(zones.iter().map(|z| (z.id, z.name.as_str())), &linked)
}

/// Edits the recipes of a meal task or the zones of a cleaning task.
///
/// `on_changed` fires after every successful add or remove so the caller can
/// re-fetch its schedule.
#[component]
pub fn TaskAssociationsModal(
    task_id: u64,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let api_stored = store_value(api.clone());

    let task = create_rw_signal(Option::<Task>::None);
    let recipes = create_rw_signal(Vec::<Recipe>::new());
    let zones = create_rw_signal(Vec::<CleaningZone>::new());
    let selected = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let saving = create_rw_signal(false);

    wasm_bindgen_futures::spawn_local(async move {
        let loaded = match api.get_task(task_id).await {
            Ok(raw) => Task::from(raw),
            Err(e) => {
                log::error!("failed to load task {}: {}", task_id, e);
                error.set(Some(e.user_message()));
                return;
            }
        };
        let candidates = match &loaded.kind {
            TaskKind::Meal { .. } => api.list_recipes().await.map(|r| recipes.set(r)),
            TaskKind::Cleaning { .. } => api.list_zones().await.map(|z| zones.set(z)),
            _ => Ok(()),
        };
        if let Err(e) = candidates {
            log::error!("failed to load options for task {}: {}", task_id, e);
            error.set(Some(e.user_message()));
        }
        task.set(Some(loaded));
    });

    // Runs one association change and refreshes the task from its result.
    let mutate = move |change: AssociationChange| {
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match change.await {
                Ok(updated) => {
                    task.set(Some(Task::from(updated)));
                    selected.set(String::new());
                    on_changed.call(());
                }
                Err(e) => {
                    log::error!("failed to update task {}: {}", task_id, e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let on_add = move |_| {
        let Ok(target) = selected.get_untracked().parse::<u64>() else {
            return;
        };
        let api = api_stored.get_value();
        match task.with_untracked(|t| t.as_ref().map(Task::category)) {
            Some(TaskCategory::Meal) => {
                mutate(Box::pin(async move { api.add_task_recipe(task_id, target).await }))
            }
            Some(TaskCategory::Cleaning) => {
                mutate(Box::pin(async move { api.add_task_zone(task_id, target).await }))
            }
            _ => {}
        }
    };

    let remove_recipe = move |recipe_id: u64| {
        let api = api_stored.get_value();
        mutate(Box::pin(async move { api.remove_task_recipe(task_id, recipe_id).await }));
    };

    let remove_zone = move |zone_id: u64| {
        let api = api_stored.get_value();
        mutate(Box::pin(async move { api.remove_task_zone(task_id, zone_id).await }));
    };

    let title = Signal::derive(move || {
        task.with(|t| t.as_ref().map(|t| t.title.clone()))
            .unwrap_or_else(|| "Task".to_string())
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! {
                <Alert variant=AlertVariant::Error>{e}</Alert>
            })}
            {move || match task.get() {
                None if error.with(Option::is_none) => view! { <Loading /> }.into_view(),
                None => ().into_view(),
                Some(t) => match t.kind {
                    TaskKind::Meal { recipes: linked } => {
                        let options = Signal::derive({
                            let linked = linked.clone();
                            move || recipes.with(|all| recipe_options(all, &linked))
                        });
                        view! {
                            <h4>"Recipes"</h4>
                            {linked.is_empty().then(|| view! { <p class="text-muted">"No recipes assigned"</p> })}
                            <ul class="association-list">
                                {linked.into_iter().map(|r| {
                                    let id = r.id;
                                    view! {
                                        <li>
                                            {r.name}
                                            " "
                                            <Button
                                                variant=ButtonVariant::Danger
                                                size=ButtonSize::Small
                                                disabled=saving
                                                on_click=Callback::new(move |_| remove_recipe(id))
                                            >
                                                "Remove"
                                            </Button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            <FormGroup label="Add recipe">
                                <SelectInput value=selected options=options />
                            </FormGroup>
                            <Button loading=saving on_click=Callback::new(on_add)>"Add"</Button>
                        }.into_view()
                    }
                    TaskKind::Cleaning { zones: linked } => {
                        let options = Signal::derive({
                            let linked = linked.clone();
                            move || zones.with(|all| zone_options(all, &linked))
                        });
                        view! {
                            <h4>"Zones"</h4>
                            {linked.is_empty().then(|| view! { <p class="text-muted">"No zones assigned"</p> })}
                            <ul class="association-list">
                                {linked.into_iter().map(|z| {
                                    let id = z.id;
                                    view! {
                                        <li>
                                            {z.name}
                                            " "
                                            <PriorityBadge priority=z.priority />
                                            " "
                                            <Button
                                                variant=ButtonVariant::Danger
                                                size=ButtonSize::Small
                                                disabled=saving
                                                on_click=Callback::new(move |_| remove_zone(id))
                                            >
                                                "Remove"
                                            </Button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            <FormGroup label="Add zone">
                                <SelectInput value=selected options=options />
                            </FormGroup>
                            <Button loading=saving on_click=Callback::new(on_add)>"Add"</Button>
                        }.into_view()
                    }
                    _ => view! {
                        <p class="text-muted">"Only meal and cleaning tasks have recipes or zones."</p>
                    }.into_view(),
                },
            }}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unlinked_options_skip_linked() {
        let candidates = vec![(1u64, "Pancakes"), (2, "Soup"), (3, "Salad")];
        let options = unlinked_options(candidates.into_iter(), &[2]);
        assert_eq!(
            options,
            vec![
                (String::new(), "Select...".to_string()),
                ("1".to_string(), "Pancakes".to_string()),
                ("3".to_string(), "Salad".to_string()),
            ]
        );
    }

    #[wasm_bindgen_test]
    fn test_unlinked_options_all_linked() {
        let options = unlinked_options(vec![(5u64, "Kitchen")].into_iter(), &[5]);
        assert_eq!(options.len(), 1);
    }
}
