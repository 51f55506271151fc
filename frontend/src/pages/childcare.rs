use chrono::NaiveDate;
use leptos::*;
use shared::{ChildcarePayload, ChildcareSchedule};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form::{DateInput, FormGroup, TextArea, TimeInput};
use crate::components::list_item::ListItem;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::utils::{confirm, flash, format_long_date, today};

/// Initial form values: the edited schedule, or an empty entry on `default_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChildcareDraft {
    date: NaiveDate,
    start_time: String,
    end_time: String,
    notes: String,
}

impl ChildcareDraft {
    fn new(schedule: Option<&ChildcareSchedule>, default_date: NaiveDate) -> Self {
        match schedule {
            Some(s) => Self {
                date: s.calendar_date(),
                start_time: s.start_time.clone(),
                end_time: s.end_time.clone(),
                notes: s.notes.clone(),
            },
            None => Self {
                date: default_date,
                start_time: String::new(),
                end_time: String::new(),
                notes: String::new(),
            },
        }
    }
}

/// Checks a childcare form before it is sent.
fn validate(date: Option<NaiveDate>, start_time: &str, end_time: &str) -> Result<NaiveDate, &'static str> {
    let date = date.ok_or("Date is required")?;
    if start_time.is_empty() || end_time.is_empty() {
        return Err("Start and end time are required");
    }
    // "HH:MM" compares correctly as text
    if end_time <= start_time {
        return Err("End time must be after start time");
    }
    Ok(date)
}

#[component]
pub fn ChildcareAdmin() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let schedules = create_rw_signal(Vec::<ChildcareSchedule>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);
    let editing = create_rw_signal(Option::<Option<ChildcareSchedule>>::None);

    let reload = move || {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_childcare().await {
                Ok(list) => schedules.set(list),
                Err(e) => {
                    log::error!("failed to load childcare schedules: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };
    reload();

    let on_delete = move |schedule_id: u64| {
        if !confirm("Delete this childcare schedule?") {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_childcare(schedule_id).await {
                Ok(resp) => {
                    flash(success, resp.message);
                    reload();
                }
                Err(e) => {
                    log::error!("failed to delete childcare schedule {}: {}", schedule_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let add_button = view! {
        <Button on_click=Callback::new(move |_| editing.set(Some(None)))>"Add Childcare Time"</Button>
    }
    .into_view();

    view! {
        <Card title="Childcare" action=add_button>
            <Notices error=error success=success />
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let list = schedules.get();
                if list.is_empty() {
                    return view! { <EmptyState icon="👶"><p>"No childcare scheduled."</p></EmptyState> }.into_view();
                }
                list.into_iter().map(|cc| {
                    let id = cc.id;
                    // there is no single-schedule endpoint; edit the row as listed
                    let row = cc.clone();
                    let actions = view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Small
                            on_click=Callback::new(move |_| editing.set(Some(Some(row.clone()))))
                        >
                            "Edit"
                        </Button>
                        <Button variant=ButtonVariant::Danger size=ButtonSize::Small on_click=Callback::new(move |_| on_delete(id))>
                            "Delete"
                        </Button>
                    }.into_view();
                    view! {
                        <ListItem actions=actions>
                            <h3>{format_long_date(cc.calendar_date())}</h3>
                            <p><strong>"Time: "</strong>{format!("{} - {}", cc.start_time, cc.end_time)}</p>
                            {(!cc.notes.is_empty()).then(|| view! { <p>{cc.notes.clone()}</p> })}
                        </ListItem>
                    }
                }).collect_view()
            }}
        </Card>
        {move || editing.get().map(|schedule| view! {
            <ChildcareFormModal
                schedule=schedule
                on_close=move |_| editing.set(None)
                on_saved=move |_| {
                    editing.set(None);
                    flash(success, "Childcare schedule saved!");
                    reload();
                }
            />
        })}
    }
}

#[component]
fn ChildcareFormModal(
    schedule: Option<ChildcareSchedule>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let schedule_id = schedule.as_ref().map(|s| s.id);

    let draft = ChildcareDraft::new(schedule.as_ref(), today());

    let date = create_rw_signal(Some(draft.date));
    let start_time = create_rw_signal(draft.start_time);
    let end_time = create_rw_signal(draft.end_time);
    let notes = create_rw_signal(draft.notes);
    let saving = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let start = start_time.get_untracked();
        let end = end_time.get_untracked();
        let day = match validate(date.get_untracked(), &start, &end) {
            Ok(day) => day,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };
        let payload = ChildcarePayload::new(day, start, end, notes.get_untracked());
        saving.set(true);
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match schedule_id {
                Some(id) => api.update_childcare(id, payload).await,
                None => api.create_childcare(payload).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved childcare schedule {}", saved.id);
                    on_saved.call(());
                }
                Err(e) => {
                    log::error!("failed to save childcare schedule: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let title = if schedule_id.is_some() { "Edit Childcare Time" } else { "Add Childcare Time" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <Notices error=error success=success />
            <form on:submit=on_submit>
                <FormGroup label="Date" for_id="childcare-date" required=true>
                    <DateInput value=date id="childcare-date" required=true />
                </FormGroup>
                <div class="form-row">
                    <FormGroup label="Start" for_id="childcare-start" required=true>
                        <TimeInput value=start_time id="childcare-start" required=true />
                    </FormGroup>
                    <FormGroup label="End" for_id="childcare-end" required=true>
                        <TimeInput value=end_time id="childcare-end" required=true />
                    </FormGroup>
                </div>
                <FormGroup label="Notes" for_id="childcare-notes">
                    <TextArea value=notes id="childcare-notes" rows=3 />
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

    fn day() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 5, 6)
    }

    #[test]
    fn test_draft_seeds_from_listed_schedule() {
        let listed: ChildcareSchedule = serde_json::from_value(serde_json::json!({
            "id": 9,
            "date": "2024-05-08T00:00:00Z",
            "start_time": "09:00",
            "end_time": "13:00",
            "notes": null
        }))
        .unwrap();

        let draft = ChildcareDraft::new(Some(&listed), day().unwrap());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 5, 8).unwrap());
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.end_time, "13:00");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_draft_defaults_for_new_schedule() {
        let draft = ChildcareDraft::new(None, day().unwrap());
        assert_eq!(draft.date, day().unwrap());
        assert!(draft.start_time.is_empty() && draft.end_time.is_empty());
    }

    #[test]
    fn test_validate_accepts_ordered_times() {
        assert_eq!(validate(day(), "08:00", "12:30"), Ok(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert_eq!(validate(None, "08:00", "12:00"), Err("Date is required"));
        assert_eq!(validate(day(), "", "12:00"), Err("Start and end time are required"));
    }

    #[test]
    fn test_validate_rejects_reversed_times() {
        assert_eq!(validate(day(), "14:00", "09:00"), Err("End time must be after start time"));
        assert_eq!(validate(day(), "09:00", "09:00"), Err("End time must be after start time"));
    }
}
