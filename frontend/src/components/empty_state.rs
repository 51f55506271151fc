use leptos::*;

/// Placeholder for a list or day without entries.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] icon: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon.map(|i| view! {
                <span class="empty-state-icon">{i}</span>
            })}
            {children()}
        </div>
    }
}
