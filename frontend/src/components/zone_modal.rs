use leptos::*;
use shared::CleaningZone;

use crate::api::ApiClient;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::badge::PriorityBadge;
use crate::components::loading::Loading;
use crate::components::modal::Modal;

/// "3x per week"
pub fn frequency_label(per_week: i32) -> String {
    format!("{}x per week", per_week)
}

/// Cleaning zone details, opened from a schedule.
#[component]
pub fn ZoneModal(zone_id: u64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let zone = create_rw_signal(Option::<CleaningZone>::None);
    let error = create_rw_signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match api.get_zone(zone_id).await {
            Ok(z) => zone.set(Some(z)),
            Err(e) => {
                log::error!("failed to load zone {}: {}", zone_id, e);
                error.set(Some(e.user_message()));
            }
        }
    });

    let title = Signal::derive(move || {
        zone.with(|z| z.as_ref().map(|z| z.name.clone()))
            .unwrap_or_else(|| "Cleaning Zone".to_string())
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! {
                <Alert variant=AlertVariant::Error>{e}</Alert>
            })}
            {move || match zone.get() {
                None if error.with(Option::is_none) => view! { <Loading /> }.into_view(),
                None => ().into_view(),
                Some(z) => view! {
                    <div class="zone-details">
                        <p><strong>"Priority: "</strong><PriorityBadge priority=z.priority() /></p>
                        <p><strong>"Frequency: "</strong>{frequency_label(z.frequency_per_week)}</p>
                        {(!z.description.is_empty()).then(|| view! {
                            <p><strong>"Description: "</strong>{z.description.clone()}</p>
                        })}
                    </div>
                }.into_view(),
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
    fn test_frequency_label() {
        assert_eq!(frequency_label(3), "3x per week");
        assert_eq!(frequency_label(1), "1x per week");
    }
}
