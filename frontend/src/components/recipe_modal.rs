use leptos::*;
use shared::{Recipe, RecipeComment};

use crate::api::ApiClient;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::loading::Loading;
use crate::components::markdown::MarkdownView;
use crate::components::modal::Modal;
use crate::components::star_rating::StarRating;
use crate::utils::format_short_date;

/// Read-only recipe details with its comments, opened from a schedule.
#[component]
pub fn RecipeModal(recipe_id: u64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let recipe = create_rw_signal(Option::<Recipe>::None);
    let comments = create_rw_signal(Vec::<RecipeComment>::new());
    let error = create_rw_signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match api.helper_recipe(recipe_id).await {
            Ok(r) => recipe.set(Some(r)),
            Err(e) => {
                log::error!("failed to load recipe {}: {}", recipe_id, e);
                error.set(Some(e.user_message()));
                return;
            }
        }
        // comments are optional extras
        match api.list_comments(recipe_id).await {
            Ok(c) => comments.set(c),
            Err(e) => log::warn!("failed to load comments for recipe {}: {}", recipe_id, e),
        }
    });

    let title = Signal::derive(move || {
        recipe
            .with(|r| r.as_ref().map(|r| r.name.clone()))
            .unwrap_or_else(|| "Recipe".to_string())
    });

    view! {
        <Modal title=title on_close=on_close large=true>
            {move || error.get().map(|e| view! {
                <Alert variant=AlertVariant::Error>{e}</Alert>
            })}
            {move || match recipe.get() {
                None if error.with(Option::is_none) => view! { <Loading /> }.into_view(),
                None => ().into_view(),
                Some(r) => view! { <RecipeDetails recipe=r comments=comments /> }.into_view(),
            }}
        </Modal>
    }
}

#[component]
fn RecipeDetails(recipe: Recipe, comments: RwSignal<Vec<RecipeComment>>) -> impl IntoView {
    let category = non_blank_or(&recipe.category, "N/A");
    let family_member = non_blank_or(&recipe.family_member, "all");
    let tags = recipe.tag_list().join(", ");

    view! {
        <div class="recipe-details">
            <div class="recipe-rating">
                <StarRating rating=recipe.rating show_value=true />
            </div>
            <p><strong>"Category: "</strong>{category}</p>
            <p><strong>"Family member: "</strong>{family_member}</p>
            {(!recipe.description.is_empty()).then(|| view! {
                <p><strong>"Description: "</strong>{recipe.description.clone()}</p>
            })}
            {(!recipe.video_url.is_empty()).then(|| view! {
                <h3>"Video"</h3>
                <div class="video-embed">
                    <iframe src=recipe.video_url.clone() allowfullscreen=true></iframe>
                </div>
            })}
            <h3>"Ingredients"</h3>
            <MarkdownView content=recipe.ingredients.clone() placeholder="No ingredients listed" />
            <h3>"Instructions"</h3>
            <MarkdownView content=recipe.instructions.clone() placeholder="No instructions" />
            {move || {
                let list = comments.get();
                (!list.is_empty()).then(|| view! {
                    <h3>"Comments"</h3>
                    {list.into_iter().map(|c| view! {
                        <div class="comment-item">
                            <p>{c.comment}</p>
                            <small class="text-muted">{format_short_date(c.created_at.date_naive())}</small>
                        </div>
                    }).collect_view()}
                })
            }}
            {(!tags.is_empty()).then(|| view! {
                <p><strong>"Tags: "</strong>{tags.clone()}</p>
            })}
        </div>
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_non_blank_or() {
        assert_eq!(non_blank_or("", "N/A"), "N/A");
        assert_eq!(non_blank_or("  ", "all"), "all");
        assert_eq!(non_blank_or("dinner", "N/A"), "dinner");
    }
}
