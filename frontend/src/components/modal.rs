use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] large: bool,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());
    let modal_class = if large { "modal modal-large" } else { "modal" };

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class=modal_class on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <button class="modal-close" on:click=close>"×"</button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
