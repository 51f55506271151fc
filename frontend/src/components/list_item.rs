use leptos::*;

/// Row of an admin or shopping list: content on the left, actions on the right.
#[component]
pub fn ListItem(
    /// Dimmed, e.g. a purchased item or an inactive meal time.
    #[prop(optional)]
    muted: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] actions: Option<View>,
    children: Children,
) -> impl IntoView {
    let full_class = list_item_class(muted, class.as_deref());

    view! {
        <div class=full_class>
            <div class="list-item-content">
                {children()}
            </div>
            {actions.map(|actions| view! { <div class="list-item-actions">{actions}</div> })}
        </div>
    }
}

fn list_item_class(muted: bool, extra: Option<&str>) -> String {
    let mut classes = vec!["list-item"];
    if muted {
        classes.push("muted");
    }
    classes.extend(extra);
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_list_item_class() {
        assert_eq!(list_item_class(false, None), "list-item");
        assert_eq!(list_item_class(true, Some("shopping-item")), "list-item muted shopping-item");
    }
}
