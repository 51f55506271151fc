use leptos::*;
use shared::{MealTime, MealTimePayload};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form::{Checkbox, FormGroup, SelectInput, TextInput, TimeInput};
use crate::components::list_item::ListItem;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::pages::admin::{regenerate_with_notice, select_options, FAMILY_MEMBERS};
use crate::utils::{confirm, flash};

fn saved_notice(updated: bool) -> &'static str {
    if updated {
        "Meal time updated and schedule refreshed!"
    } else {
        "Meal time created and schedule updated!"
    }
}

#[component]
pub fn MealTimesAdmin() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let meal_times = create_rw_signal(Vec::<MealTime>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);
    let editing = create_rw_signal(Option::<Option<MealTime>>::None);

    let reload = move || {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_meal_times().await {
                Ok(list) => meal_times.set(list),
                Err(e) => {
                    log::error!("failed to load meal times: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };
    reload();

    let on_edit = move |meal_time_id: u64| {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.get_meal_time(meal_time_id).await {
                Ok(mt) => editing.set(Some(Some(mt))),
                Err(e) => {
                    log::error!("failed to load meal time {}: {}", meal_time_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_delete = move |meal_time_id: u64| {
        if !confirm("Delete this meal time?") {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_meal_time(meal_time_id).await {
                Ok(resp) => {
                    flash(success, resp.message);
                    reload();
                }
                Err(e) => {
                    log::error!("failed to delete meal time {}: {}", meal_time_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let add_button = view! {
        <Button on_click=Callback::new(move |_| editing.set(Some(None)))>"Add Meal Time"</Button>
    }
    .into_view();

    view! {
        <Card title="Meal Times" action=add_button>
            <Notices error=error success=success />
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let list = meal_times.get();
                if list.is_empty() {
                    return view! { <EmptyState icon="🕐"><p>"No meal times configured."</p></EmptyState> }.into_view();
                }
                list.into_iter().map(|mt| {
                    let id = mt.id;
                    let times = mt.times().join(", ");
                    let actions = view! {
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on_click=Callback::new(move |_| on_edit(id))>
                            "Edit"
                        </Button>
                        <Button variant=ButtonVariant::Danger size=ButtonSize::Small on_click=Callback::new(move |_| on_delete(id))>
                            "Delete"
                        </Button>
                    }.into_view();
                    view! {
                        <ListItem muted=!mt.active actions=actions>
                            <h3>{mt.name} " - " {times}</h3>
                            <p>
                                <strong>"For: "</strong>{mt.family_member}
                                " "
                                {if mt.active {
                                    view! { <Badge variant=BadgeVariant::Success size=BadgeSize::Small>"Active"</Badge> }.into_view()
                                } else {
                                    view! { <Badge size=BadgeSize::Small>"Inactive"</Badge> }.into_view()
                                }}
                            </p>
                        </ListItem>
                    }
                }).collect_view()
            }}
        </Card>
        {move || editing.get().map(|meal_time| view! {
            <MealTimeFormModal
                meal_time=meal_time
                on_close=move |_| editing.set(None)
                on_saved=move |updated: bool| {
                    editing.set(None);
                    reload();
                    regenerate_with_notice(api.get_value(), success, error, saved_notice(updated));
                }
            />
        })}
    }
}

#[component]
fn MealTimeFormModal(
    meal_time: Option<MealTime>,
    #[prop(into)] on_close: Callback<()>,
    /// Called with `true` when an existing meal time was updated.
    #[prop(into)]
    on_saved: Callback<bool>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let meal_time_id = meal_time.as_ref().map(|mt| mt.id);
    let initial = meal_time.as_ref().map(MealTimePayload::from).unwrap_or_else(|| MealTimePayload {
        family_member: "all".to_string(),
        active: true,
        ..Default::default()
    });

    let name = create_rw_signal(initial.name);
    let default_time = create_rw_signal(initial.default_time);
    let family_member = create_rw_signal(initial.family_member);
    let active = create_rw_signal(initial.active);
    let saving = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let payload = MealTimePayload {
            name: name.get_untracked().trim().to_string(),
            default_time: default_time.get_untracked(),
            family_member: family_member.get_untracked(),
            active: active.get_untracked(),
        };
        if payload.name.is_empty() || payload.default_time.is_empty() {
            error.set(Some("Name and time are required".to_string()));
            return;
        }
        saving.set(true);
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match meal_time_id {
                Some(id) => api.update_meal_time(id, payload).await,
                None => api.create_meal_time(payload).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved meal time {}", saved.id);
                    on_saved.call(meal_time_id.is_some());
                }
                Err(e) => {
                    log::error!("failed to save meal time: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let title = if meal_time_id.is_some() { "Edit Meal Time" } else { "Add Meal Time" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <Notices error=error success=success />
            <form on:submit=on_submit>
                <FormGroup label="Name" for_id="mealtime-name" required=true hint="e.g. breakfast, lunch, babyfood">
                    <TextInput value=name id="mealtime-name" required=true />
                </FormGroup>
                <FormGroup label="Time" for_id="mealtime-time" required=true>
                    <TimeInput value=default_time id="mealtime-time" required=true />
                </FormGroup>
                <FormGroup label="Family member" for_id="mealtime-family-member">
                    <SelectInput value=family_member id="mealtime-family-member" options=select_options(FAMILY_MEMBERS, None) />
                </FormGroup>
                <Checkbox checked=active label="Active" id="mealtime-active" />
                <div class="form-actions">
                    <Button button_type="submit" loading=saving>"Save"</Button>
                    <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| on_close.call(()))>
                        "Cancel"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_notice() {
        assert_eq!(saved_notice(true), "Meal time updated and schedule refreshed!");
        assert_eq!(saved_notice(false), "Meal time created and schedule updated!");
    }
}
