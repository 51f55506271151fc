use leptos::*;
use shared::{filter_zones, normalize_priority, CleaningZone, Priority, ZonePayload};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::badge::PriorityBadge;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form::{FormGroup, NumberInput, SelectInput, TextArea, TextInput};
use crate::components::list_item::ListItem;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::zone_modal::frequency_label;
use crate::pages::admin::regenerate_with_notice;
use crate::utils::{confirm, flash};

fn priority_options(any_label: Option<&str>) -> Vec<(String, String)> {
    any_label
        .map(|label| (String::new(), label.to_string()))
        .into_iter()
        .chain(Priority::ALL.iter().map(|p| (p.as_str().to_string(), p.label().to_string())))
        .collect()
}

/// Priority filter value from its select; empty means "all".
fn parse_priority_filter(raw: &str) -> Option<Priority> {
    if raw.is_empty() {
        None
    } else {
        Some(normalize_priority(Some(raw)))
    }
}

fn saved_notice(updated: bool) -> &'static str {
    if updated {
        "Zone updated and schedule refreshed!"
    } else {
        "Zone created and schedule updated!"
    }
}

#[component]
pub fn ZonesAdmin() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let zones = create_rw_signal(Vec::<CleaningZone>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);
    let priority_filter = create_rw_signal(String::new());
    let editing = create_rw_signal(Option::<Option<CleaningZone>>::None);

    let reload = move || {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_zones().await {
                Ok(list) => zones.set(list),
                Err(e) => {
                    log::error!("failed to load zones: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };
    reload();

    let on_edit = move |zone_id: u64| {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.get_zone(zone_id).await {
                Ok(zone) => editing.set(Some(Some(zone))),
                Err(e) => {
                    log::error!("failed to load zone {}: {}", zone_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_delete = move |zone_id: u64| {
        if !confirm("Delete this zone?") {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_zone(zone_id).await {
                Ok(resp) => {
                    flash(success, resp.message);
                    reload();
                }
                Err(e) => {
                    log::error!("failed to delete zone {}: {}", zone_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let add_button = view! {
        <Button on_click=Callback::new(move |_| editing.set(Some(None)))>"Add Zone"</Button>
    }
    .into_view();

    view! {
        <Card title="Cleaning Zones" action=add_button>
            <Notices error=error success=success />
            <div class="filter-bar">
                <SelectInput value=priority_filter options=priority_options(Some("All priorities")) />
            </div>
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let all = zones.get();
                let selected = parse_priority_filter(&priority_filter.get());
                let shown: Vec<CleaningZone> = filter_zones(&all, selected).into_iter().cloned().collect();
                if shown.is_empty() {
                    return view! { <EmptyState icon="🧹"><p>"No cleaning zones found."</p></EmptyState> }.into_view();
                }
                shown.into_iter().map(|zone| {
                    let id = zone.id;
                    let priority = zone.priority();
                    let actions = view! {
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on_click=Callback::new(move |_| on_edit(id))>
                            "Edit"
                        </Button>
                        <Button variant=ButtonVariant::Danger size=ButtonSize::Small on_click=Callback::new(move |_| on_delete(id))>
                            "Delete"
                        </Button>
                    }.into_view();
                    view! {
                        <ListItem actions=actions>
                            <h3>{zone.name} " " <PriorityBadge priority=priority /></h3>
                            {(!zone.description.is_empty()).then(|| view! { <p>{zone.description.clone()}</p> })}
                            <p><strong>"Frequency: "</strong>{frequency_label(zone.frequency_per_week)}</p>
                        </ListItem>
                    }
                }).collect_view()
            }}
        </Card>
        {move || editing.get().map(|zone| view! {
            <ZoneFormModal
                zone=zone
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
fn ZoneFormModal(
    zone: Option<CleaningZone>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<bool>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let zone_id = zone.as_ref().map(|z| z.id);
    let initial = zone.as_ref().map(ZonePayload::from).unwrap_or_else(|| ZonePayload {
        frequency_per_week: 1,
        ..Default::default()
    });

    let name = create_rw_signal(initial.name);
    let description = create_rw_signal(initial.description);
    let frequency = create_rw_signal(initial.frequency_per_week);
    let priority = create_rw_signal(initial.priority.as_str().to_string());
    let saving = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let payload = ZonePayload {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            frequency_per_week: frequency.get_untracked(),
            priority: normalize_priority(Some(&priority.get_untracked())),
        };
        if payload.name.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        saving.set(true);
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match zone_id {
                Some(id) => api.update_zone(id, payload).await,
                None => api.create_zone(payload).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved zone {}", saved.id);
                    on_saved.call(zone_id.is_some());
                }
                Err(e) => {
                    log::error!("failed to save zone: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let title = if zone_id.is_some() { "Edit Cleaning Zone" } else { "Add Cleaning Zone" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <Notices error=error success=success />
            <form on:submit=on_submit>
                <FormGroup label="Name" for_id="zone-name" required=true>
                    <TextInput value=name id="zone-name" required=true />
                </FormGroup>
                <FormGroup label="Description" for_id="zone-description">
                    <TextArea value=description id="zone-description" rows=3 />
                </FormGroup>
                <FormGroup label="Times per week" for_id="zone-frequency">
                    <NumberInput value=frequency id="zone-frequency" min=1 max=14 />
                </FormGroup>
                <FormGroup label="Priority" for_id="zone-priority">
                    <SelectInput value=priority id="zone-priority" options=priority_options(None) />
                </FormGroup>
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
    fn test_priority_options() {
        let options = priority_options(Some("All priorities"));
        assert_eq!(options.len(), 4);
        assert_eq!(options[1], ("high".to_string(), "High".to_string()));
        assert_eq!(priority_options(None).len(), 3);
    }

    #[test]
    fn test_parse_priority_filter() {
        assert_eq!(parse_priority_filter(""), None);
        assert_eq!(parse_priority_filter("low"), Some(Priority::Low));
        assert_eq!(parse_priority_filter("high"), Some(Priority::High));
    }

    #[test]
    fn test_saved_notice() {
        assert_eq!(saved_notice(true), "Zone updated and schedule refreshed!");
        assert_eq!(saved_notice(false), "Zone created and schedule updated!");
    }
}
