use leptos::*;

use crate::api::ApiClient;
use crate::components::tabs::Tabs;
use crate::pages::childcare::ChildcareAdmin;
use crate::pages::meal_times::MealTimesAdmin;
use crate::pages::recipes::RecipesAdmin;
use crate::pages::schedule_editor::ScheduleEditor;
use crate::pages::shopping::ShoppingChecklist;
use crate::pages::zones::ZonesAdmin;
use crate::utils::flash;

pub const RECIPE_CATEGORIES: &[(&str, &str)] = &[
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("snack", "Snack"),
    ("babyfood", "Baby food"),
];

pub const FAMILY_MEMBERS: &[(&str, &str)] = &[("all", "All"), ("adult", "Adult"), ("baby", "Baby")];

/// `(value, label)` pairs for a select, optionally led by an "any" entry with
/// an empty value.
pub fn select_options(choices: &[(&str, &str)], any_label: Option<&str>) -> Vec<(String, String)> {
    any_label
        .map(|label| (String::new(), label.to_string()))
        .into_iter()
        .chain(choices.iter().map(|(value, label)| (value.to_string(), label.to_string())))
        .collect()
}

/// Regenerates the schedule after a change that affects it, then shows
/// `notice` followed by the backend's message.
pub fn regenerate_with_notice(
    api: ApiClient,
    success: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    notice: &'static str,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match api.regenerate_schedule().await {
            Ok(resp) => {
                log::info!("schedule regenerated: {}", resp.message);
                flash(success, format!("{} {}", notice, resp.message));
            }
            Err(e) => {
                log::error!("failed to regenerate schedule: {}", e);
                error.set(Some(e.user_message()));
            }
        }
    });
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminSection {
    #[default]
    Schedule,
    Recipes,
    MealTimes,
    Zones,
    Childcare,
    Shopping,
}

impl AdminSection {
    pub const ALL: [AdminSection; 6] = [
        AdminSection::Schedule,
        AdminSection::Recipes,
        AdminSection::MealTimes,
        AdminSection::Zones,
        AdminSection::Childcare,
        AdminSection::Shopping,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Schedule => "Schedule",
            AdminSection::Recipes => "Recipes",
            AdminSection::MealTimes => "Meal Times",
            AdminSection::Zones => "Cleaning Zones",
            AdminSection::Childcare => "Childcare",
            AdminSection::Shopping => "Shopping",
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let active = create_rw_signal(AdminSection::default());
    let tabs = AdminSection::ALL
        .into_iter()
        .map(|s| (s, s.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="page admin-page">
            <h1>"Admin"</h1>
            <Tabs tabs=tabs active=active />
            {move || match active.get() {
                AdminSection::Schedule => view! { <ScheduleEditor /> }.into_view(),
                AdminSection::Recipes => view! { <RecipesAdmin /> }.into_view(),
                AdminSection::MealTimes => view! { <MealTimesAdmin /> }.into_view(),
                AdminSection::Zones => view! { <ZonesAdmin /> }.into_view(),
                AdminSection::Childcare => view! { <ChildcareAdmin /> }.into_view(),
                AdminSection::Shopping => view! { <ShoppingChecklist /> }.into_view(),
            }}
        </div>
    }
}
