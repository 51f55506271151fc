//! Loading view data with last-write-wins semantics.
//!
//! Pages own a `StoredValue<RequestSequencer<K>>` and one `RwSignal<ViewSlot<T>>`
//! per view; [`spawn_view_load`] ties the two together so that a response only
//! lands in its slot if no newer request for the same key was started.
//! [`slot_view`] renders whatever a slot currently holds.

use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;

use leptos::*;
use shared::{FetchError, RequestSequencer, ViewSlot};

use crate::components::alert::{Alert, AlertVariant};
use crate::components::loading::Loading;

pub fn spawn_view_load<K, T, Fut>(
    sequencer: StoredValue<RequestSequencer<K>>,
    slot: RwSignal<ViewSlot<T>>,
    key: K,
    load: Fut,
) where
    K: Eq + Hash + Clone + Debug + 'static,
    T: 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let Some(ticket) = sequencer.try_update_value(|s| s.begin(key)) else {
        return;
    };
    slot.update(ViewSlot::start_loading);

    wasm_bindgen_futures::spawn_local(async move {
        let result = load.await;

        let latest = sequencer
            .try_with_value(|s| s.accept(&ticket))
            .unwrap_or(false);
        if !latest {
            log::debug!(
                "discarding stale response for {:?} (request #{})",
                ticket.key(),
                ticket.seq()
            );
            return;
        }

        if let Err(e) = &result {
            log::error!("loading {:?} failed: {}", ticket.key(), e);
        }
        slot.update(|s| s.apply(result));
    });
}

/// Error, spinner or content of a view slot. Stale data stays visible under an
/// error until the next successful load.
pub fn slot_view<T, F>(slot: RwSignal<ViewSlot<T>>, render: F) -> View
where
    T: Clone + 'static,
    F: Fn(T) -> View + 'static,
{
    let (data, error, loading) = slot.with(|s| (s.data.clone(), s.error_message(), s.loading));
    view! {
        {error.map(|e| view! { <Alert variant=AlertVariant::Error>{e}</Alert> })}
        {match data {
            Some(data) => render(data),
            None if loading => view! { <Loading /> }.into_view(),
            None => ().into_view(),
        }}
    }
    .into_view()
}
