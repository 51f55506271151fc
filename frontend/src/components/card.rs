use leptos::*;

/// Card container for a page section, with an optional header action.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    /// Rendered on the right of the header, e.g. an "Add" button.
    #[prop(optional)]
    action: Option<View>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("card {}", extra),
        None => "card".to_string(),
    };
    let has_header = title.is_some() || action.is_some();

    view! {
        <section class=full_class>
            {has_header.then(|| view! {
                <div class="card-header">
                    <h2 class="card-title">{title}</h2>
                    {action}
                </div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </section>
    }
}
