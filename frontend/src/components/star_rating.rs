use leptos::*;
use shared::{full_stars, MAX_STARS};

/// "★★★☆☆" for a rating of 3.x.
pub fn star_string(rating: f64) -> String {
    let filled = full_stars(rating);
    (1..=MAX_STARS)
        .map(|i| if i <= filled { '★' } else { '☆' })
        .collect()
}

/// Read-only star rating, optionally followed by the numeric value.
#[component]
pub fn StarRating(rating: f64, #[prop(optional)] show_value: bool) -> impl IntoView {
    let filled = full_stars(rating);

    view! {
        <span class="star-rating-display" title=format!("{:.1}", rating) aria-label=star_string(rating)>
            {(1..=MAX_STARS).map(|i| {
                let class = if i <= filled { "star filled" } else { "star" };
                view! { <span class=class>"★"</span> }
            }).collect_view()}
            {show_value.then(|| view! { <span class="star-rating-value">{format!(" {:.1}", rating)}</span> })}
        </span>
    }
}

/// Clickable 1-5 star input. Hovering previews the rating.
#[component]
pub fn StarRatingInput(#[prop(into)] value: RwSignal<f64>) -> impl IntoView {
    let hover = create_rw_signal(Option::<u8>::None);

    view! {
        <div class="star-rating-input" on:mouseleave=move |_| hover.set(None)>
            {(1..=MAX_STARS).map(|i| {
                let class = move || match hover.get() {
                    Some(h) if i <= h => "star hover",
                    Some(_) => "star",
                    None if i <= full_stars(value.get()) => "star filled",
                    None => "star",
                };
                view! {
                    <span
                        class=class
                        on:mouseenter=move |_| hover.set(Some(i))
                        on:click=move |_| value.set(f64::from(i))
                    >
                        "★"
                    </span>
                }
            }).collect_view()}
            <button
                type="button"
                class="btn btn-sm star-rating-clear"
                on:click=move |_| value.set(0.0)
            >
                "Clear"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_star_string() {
        assert_eq!(star_string(3.2), "★★★☆☆");
        assert_eq!(star_string(0.0), "☆☆☆☆☆");
        assert_eq!(star_string(7.5), "★★★★★");
    }
}
