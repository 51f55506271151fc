use leptos::*;

/// A row of tab buttons over `(value, label)` pairs. Selecting a tab sets
/// `active`.
#[component]
pub fn Tabs<T>(
    tabs: Vec<(T, String)>,
    active: RwSignal<T>,
) -> impl IntoView
where
    T: Clone + PartialEq + 'static,
{
    view! {
        <nav class="tabs">
            {tabs.into_iter().map(|(value, label)| {
                let is_active = {
                    let value = value.clone();
                    move || active.with(|a| *a == value)
                };
                let class = move || if is_active() { "tab-link active" } else { "tab-link" };
                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| active.set(value.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
