use leptos::*;
use shared::{group_by_category, pending_items, ShoppingItemPayload, ShoppingListItem, DEFAULT_SHOPPING_CATEGORY};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form::{FormGroup, TextInput};
use crate::components::list_item::ListItem;
use crate::components::loading::Loading;
use crate::utils::{confirm, flash};

const ADDED_BY: &str = "helper";

fn new_item(item: &str, quantity: &str) -> Option<ShoppingItemPayload> {
    let item = item.trim();
    if item.is_empty() {
        return None;
    }
    Some(ShoppingItemPayload {
        item: item.to_string(),
        quantity: quantity.trim().to_string(),
        category: DEFAULT_SHOPPING_CATEGORY.to_string(),
        added_by: ADDED_BY.to_string(),
    })
}

/// Shared list state: items, loading flag and notices, plus a reload action.
#[derive(Clone, Copy)]
struct ShoppingState {
    items: RwSignal<Vec<ShoppingListItem>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    api: StoredValue<ApiClient>,
}

impl ShoppingState {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            api: store_value(expect_context::<ApiClient>()),
        }
    }

    fn reload(self) {
        let api = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_shopping().await {
                Ok(items) => self.items.set(items),
                Err(e) => {
                    log::error!("failed to load shopping list: {}", e);
                    self.error.set(Some(e.user_message()));
                }
            }
            self.loading.set(false);
        });
    }

    fn mark_purchased(self, item_id: u64) {
        let api = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.mark_purchased(item_id).await {
                Ok(_) => self.reload(),
                Err(e) => {
                    log::error!("failed to mark item {} purchased: {}", item_id, e);
                    self.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

/// Helper shopping list, grouped by category.
#[component]
pub fn ShoppingList() -> impl IntoView {
    let state = ShoppingState::new();
    state.reload();

    let item = create_rw_signal(String::new());
    let quantity = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    let on_add = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = new_item(&item.get_untracked(), &quantity.get_untracked()) else {
            state.error.set(Some("Item name is required".to_string()));
            return;
        };
        saving.set(true);
        let api = state.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.add_shopping_item(payload).await {
                Ok(added) => {
                    log::info!("added shopping item {}", added.id);
                    item.set(String::new());
                    quantity.set(String::new());
                    flash(state.success, "Item added!");
                    state.reload();
                }
                Err(e) => {
                    log::error!("failed to add shopping item: {}", e);
                    state.error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let on_delete = move |item_id: u64| {
        if !confirm("Delete this item?") {
            return;
        }
        let api = state.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_shopping_item(item_id).await {
                Ok(resp) => {
                    flash(state.success, resp.message);
                    state.reload();
                }
                Err(e) => {
                    log::error!("failed to delete shopping item {}: {}", item_id, e);
                    state.error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <Card title="Shopping List">
            <Notices error=state.error success=state.success />
            <form class="inline-form" on:submit=on_add>
                <FormGroup label="Item" for_id="shopping-item" required=true>
                    <TextInput value=item id="shopping-item" placeholder="Milk" required=true />
                </FormGroup>
                <FormGroup label="Quantity" for_id="shopping-quantity">
                    <TextInput value=quantity id="shopping-quantity" placeholder="2 liters" />
                </FormGroup>
                <Button button_type="submit" loading=saving>"Add"</Button>
            </form>
            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let items = state.items.get();
                if items.is_empty() {
                    return view! {
                        <EmptyState icon="🛒"><p>"Shopping list is empty."</p></EmptyState>
                    }.into_view();
                }
                group_by_category(&items).into_iter().map(|(category, group)| view! {
                    <div class="shopping-category">
                        <h3 class="shopping-category-title">{category}</h3>
                        {group.into_iter().cloned().map(|entry| {
                            let id = entry.id;
                            let purchased = entry.purchased;
                            let actions = view! {
                                {(!purchased).then(|| view! {
                                    <Button
                                        variant=ButtonVariant::Success
                                        size=ButtonSize::Small
                                        on_click=Callback::new(move |_| state.mark_purchased(id))
                                    >
                                        "Bought"
                                    </Button>
                                })}
                                <Button
                                    variant=ButtonVariant::Danger
                                    size=ButtonSize::Small
                                    on_click=Callback::new(move |_| on_delete(id))
                                >
                                    "Delete"
                                </Button>
                            }.into_view();
                            view! {
                                <ListItem muted=purchased class="shopping-item" actions=actions>
                                    <div class="shopping-item-name">{entry.item}</div>
                                    <div class="shopping-item-quantity">{entry.quantity}</div>
                                </ListItem>
                            }
                        }).collect_view()}
                    </div>
                }).collect_view()
            }}
        </Card>
    }
}

/// Admin checklist of items still to buy; ticking one marks it purchased.
#[component]
pub fn ShoppingChecklist() -> impl IntoView {
    let state = ShoppingState::new();
    state.reload();

    view! {
        <Card title="Shopping Checklist">
            <Notices error=state.error success=state.success />
            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let items = state.items.get();
                let pending: Vec<ShoppingListItem> = pending_items(&items).into_iter().cloned().collect();
                if pending.is_empty() {
                    return view! {
                        <EmptyState icon="✅"><p>"Nothing left to buy."</p></EmptyState>
                    }.into_view();
                }
                pending.into_iter().map(|entry| {
                    let id = entry.id;
                    let checkbox_id = format!("shopping-check-{}", id);
                    view! {
                        <div class="shopping-checklist-item">
                            <input
                                type="checkbox"
                                id=checkbox_id.clone()
                                on:change=move |_| state.mark_purchased(id)
                            />
                            <label for=checkbox_id>
                                <strong>{entry.item}</strong>
                                {(!entry.quantity.is_empty()).then(|| format!(" ({})", entry.quantity))}
                            </label>
                        </div>
                    }
                }).collect_view()
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_trims_and_defaults_category() {
        let payload = new_item("  Milk ", " 2 liters ").unwrap();
        assert_eq!(payload.item, "Milk");
        assert_eq!(payload.quantity, "2 liters");
        assert_eq!(payload.category, DEFAULT_SHOPPING_CATEGORY);
        assert_eq!(payload.added_by, "helper");
    }

    #[test]
    fn test_new_item_requires_name() {
        assert!(new_item("   ", "1").is_none());
    }

    #[test]
    fn test_uncategorised_items_share_the_default_group() {
        let item = |id: u64, category: &str| ShoppingListItem {
            id,
            item: format!("item {}", id),
            quantity: String::new(),
            category: category.to_string(),
            purchased: false,
            added_by: ADDED_BY.to_string(),
        };
        let items = vec![item(1, ""), item(2, "dairy"), item(3, "  ")];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, DEFAULT_SHOPPING_CATEGORY);
        assert_eq!(groups[0].1.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(groups[1].0, "dairy");
    }
}
