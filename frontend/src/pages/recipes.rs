use leptos::*;
use shared::{CommentPayload, Recipe, RecipeComment, RecipeFilter, RecipePayload};

use crate::api::ApiClient;
use crate::components::alert::Notices;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form::{FormGroup, SelectInput, TextArea, TextInput};
use crate::components::list_item::ListItem;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::star_rating::{StarRating, StarRatingInput};
use crate::pages::admin::{select_options, FAMILY_MEMBERS, RECIPE_CATEGORIES};
use crate::utils::{confirm, flash, format_short_date};

const DEFAULT_CATEGORY: &str = "breakfast";
const DEFAULT_FAMILY_MEMBER: &str = "all";

fn rating_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Any rating".to_string())];
    options.extend((1..=5).map(|n| (n.to_string(), format!("{}+ stars", n))));
    options
}

fn parse_min_rating(raw: &str) -> u8 {
    raw.parse().unwrap_or(0)
}

#[component]
pub fn RecipesAdmin() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());

    let recipes = create_rw_signal(Vec::<Recipe>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);

    let search = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let family_member = create_rw_signal(String::new());
    let min_rating = create_rw_signal(String::new());

    // None = closed, Some(None) = create, Some(Some(recipe)) = edit
    let editing = create_rw_signal(Option::<Option<Recipe>>::None);

    let reload = move || {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_recipes().await {
                Ok(list) => recipes.set(list),
                Err(e) => {
                    log::error!("failed to load recipes: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };
    reload();

    let filter = create_memo(move |_| RecipeFilter {
        search: search.get(),
        category: category.get(),
        family_member: family_member.get(),
        min_rating: parse_min_rating(&min_rating.get()),
    });

    let on_edit = move |recipe_id: u64| {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.get_recipe(recipe_id).await {
                Ok(recipe) => editing.set(Some(Some(recipe))),
                Err(e) => {
                    log::error!("failed to load recipe {}: {}", recipe_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_delete = move |recipe_id: u64| {
        if !confirm("Delete this recipe?") {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_recipe(recipe_id).await {
                Ok(resp) => {
                    flash(success, resp.message);
                    reload();
                }
                Err(e) => {
                    log::error!("failed to delete recipe {}: {}", recipe_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let add_button = view! {
        <Button on_click=Callback::new(move |_| editing.set(Some(None)))>"Add Recipe"</Button>
    }
    .into_view();

    view! {
        <Card title="Recipes" action=add_button>
            <Notices error=error success=success />
            <div class="filter-bar">
                <TextInput value=search placeholder="Search recipes..." />
                <SelectInput value=category options=select_options(RECIPE_CATEGORIES, Some("All categories")) />
                <SelectInput value=family_member options=select_options(FAMILY_MEMBERS, Some("All family members")) />
                <SelectInput value=min_rating options=rating_options() />
            </div>
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let all = recipes.get();
                let shown: Vec<Recipe> = filter.with(|f| f.apply(&all).into_iter().cloned().collect());
                if shown.is_empty() {
                    return view! { <EmptyState icon="🍳"><p>"No recipes found."</p></EmptyState> }.into_view();
                }
                shown.into_iter().map(|recipe| {
                    let id = recipe.id;
                    let category = if recipe.category.is_empty() { "N/A".to_string() } else { recipe.category.clone() };
                    let family = if recipe.family_member.is_empty() { DEFAULT_FAMILY_MEMBER.to_string() } else { recipe.family_member.clone() };
                    let actions = view! {
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on_click=Callback::new(move |_| on_edit(id))>
                            "Edit"
                        </Button>
                        <Button variant=ButtonVariant::Danger size=ButtonSize::Small on_click=Callback::new(move |_| on_delete(id))>
                            "Delete"
                        </Button>
                    }.into_view();
                    view! {
                        <ListItem class="recipe-card" actions=actions>
                            <div class="recipe-card-title">{recipe.name}</div>
                            <div class="recipe-card-meta">
                                <StarRating rating=recipe.rating />
                                <span>"📁 " {category}</span>
                                <span>"👤 " {family}</span>
                            </div>
                        </ListItem>
                    }
                }).collect_view()
            }}
        </Card>
        {move || editing.get().map(|recipe| view! {
            <RecipeFormModal
                recipe=recipe
                on_close=move |_| editing.set(None)
                on_saved=move |_| {
                    editing.set(None);
                    flash(success, "Recipe saved!");
                    reload();
                }
            />
        })}
    }
}

/// Create/edit form; editing also shows the recipe's comments.
#[component]
fn RecipeFormModal(
    recipe: Option<Recipe>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let recipe_id = recipe.as_ref().map(|r| r.id);
    let mut initial = recipe.as_ref().map(RecipePayload::from).unwrap_or_default();
    if initial.category.is_empty() {
        initial.category = DEFAULT_CATEGORY.to_string();
    }
    if initial.family_member.is_empty() {
        initial.family_member = DEFAULT_FAMILY_MEMBER.to_string();
    }
    let meal_time_ids = initial.meal_time_ids.clone();

    let name = create_rw_signal(initial.name);
    let description = create_rw_signal(initial.description);
    let ingredients = create_rw_signal(initial.ingredients);
    let instructions = create_rw_signal(initial.instructions);
    let category = create_rw_signal(initial.category);
    let family_member = create_rw_signal(initial.family_member);
    let tags = create_rw_signal(initial.tags);
    let image_url = create_rw_signal(initial.image_url);
    let video_url = create_rw_signal(initial.video_url);
    let rating = create_rw_signal(initial.rating);
    let meal_time_ids = store_value(meal_time_ids);

    let saving = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let success = create_rw_signal(Option::<String>::None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().trim().is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        let payload = RecipePayload {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            ingredients: ingredients.get_untracked(),
            instructions: instructions.get_untracked(),
            category: category.get_untracked(),
            family_member: family_member.get_untracked(),
            tags: tags.get_untracked(),
            image_url: image_url.get_untracked(),
            video_url: video_url.get_untracked(),
            rating: rating.get_untracked(),
            meal_time_ids: meal_time_ids.get_value(),
        };
        saving.set(true);
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match recipe_id {
                Some(id) => api.update_recipe(id, payload).await,
                None => api.create_recipe(payload).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved recipe {}", saved.id);
                    on_saved.call(());
                }
                Err(e) => {
                    log::error!("failed to save recipe: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let title = if recipe_id.is_some() { "Edit Recipe" } else { "Add Recipe" };

    view! {
        <Modal title=title.to_string() on_close=on_close large=true>
            <Notices error=error success=success />
            <form on:submit=on_submit>
                <FormGroup label="Name" for_id="recipe-name" required=true>
                    <TextInput value=name id="recipe-name" required=true />
                </FormGroup>
                <FormGroup label="Description" for_id="recipe-description">
                    <TextArea value=description id="recipe-description" rows=2 />
                </FormGroup>
                <FormGroup label="Ingredients" for_id="recipe-ingredients" hint="Markdown supported">
                    <TextArea value=ingredients id="recipe-ingredients" rows=6 />
                </FormGroup>
                <FormGroup label="Instructions" for_id="recipe-instructions" hint="Markdown supported">
                    <TextArea value=instructions id="recipe-instructions" rows=6 />
                </FormGroup>
                <div class="form-row">
                    <FormGroup label="Category" for_id="recipe-category">
                        <SelectInput value=category id="recipe-category" options=select_options(RECIPE_CATEGORIES, None) />
                    </FormGroup>
                    <FormGroup label="Family member" for_id="recipe-family-member">
                        <SelectInput value=family_member id="recipe-family-member" options=select_options(FAMILY_MEMBERS, None) />
                    </FormGroup>
                </div>
                <FormGroup label="Tags" for_id="recipe-tags" hint="Comma separated">
                    <TextInput value=tags id="recipe-tags" />
                </FormGroup>
                <FormGroup label="Image URL" for_id="recipe-image-url">
                    <TextInput value=image_url id="recipe-image-url" input_type="url" />
                </FormGroup>
                <FormGroup label="Video URL" for_id="recipe-video-url">
                    <TextInput value=video_url id="recipe-video-url" input_type="url" />
                </FormGroup>
                <FormGroup label="Rating">
                    <StarRatingInput value=rating />
                </FormGroup>
                <div class="form-actions">
                    <Button button_type="submit" loading=saving>"Save"</Button>
                    <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| on_close.call(()))>
                        "Cancel"
                    </Button>
                </div>
            </form>
            {recipe_id.map(|id| view! { <RecipeComments recipe_id=id error=error success=success /> })}
        </Modal>
    }
}

#[component]
fn RecipeComments(
    recipe_id: u64,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let comments = create_rw_signal(Vec::<RecipeComment>::new());
    let draft = create_rw_signal(String::new());

    let reload = move || {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.list_comments(recipe_id).await {
                Ok(list) => comments.set(list),
                Err(e) => {
                    log::error!("failed to load comments for recipe {}: {}", recipe_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };
    reload();

    let on_add = move |_| {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.add_comment(recipe_id, CommentPayload { comment: text }).await {
                Ok(_) => {
                    draft.set(String::new());
                    reload();
                }
                Err(e) => {
                    log::error!("failed to add comment: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_delete = move |comment_id: u64| {
        if !confirm("Delete this comment?") {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api.delete_comment(comment_id).await {
                Ok(resp) => {
                    flash(success, resp.message);
                    reload();
                }
                Err(e) => {
                    log::error!("failed to delete comment {}: {}", comment_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="recipe-comments">
            <h3>"Comments"</h3>
            {move || {
                let list = comments.get();
                if list.is_empty() {
                    return view! { <p class="text-muted">"No comments yet."</p> }.into_view();
                }
                list.into_iter().map(|c| {
                    let id = c.id;
                    let actions = view! {
                        <Button variant=ButtonVariant::Danger size=ButtonSize::Small on_click=Callback::new(move |_| on_delete(id))>
                            "Delete"
                        </Button>
                    }.into_view();
                    view! {
                        <ListItem class="comment-item" actions=actions>
                            <p>{c.comment}</p>
                            <small class="text-muted">{format_short_date(c.created_at.date_naive())}</small>
                        </ListItem>
                    }
                }).collect_view()
            }}
            <FormGroup label="Add comment" for_id="recipe-comment">
                <TextArea value=draft id="recipe-comment" rows=2 />
            </FormGroup>
            <Button variant=ButtonVariant::Outline on_click=Callback::new(on_add)>"Add Comment"</Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_min_rating() {
        assert_eq!(parse_min_rating(""), 0);
        assert_eq!(parse_min_rating("4"), 4);
        assert_eq!(parse_min_rating("abc"), 0);
    }

    #[test]
    fn test_rating_options() {
        let options = rating_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].0, "");
        assert_eq!(options[3], ("3".to_string(), "3+ stars".to_string()));
    }
}
