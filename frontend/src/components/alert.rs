use leptos::*;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertVariant {
    pub fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "alert",
            AlertVariant::Success => "alert alert-success",
            AlertVariant::Warning => "alert alert-warning",
            AlertVariant::Error => "alert alert-error",
        }
    }
}

/// Alert component for displaying messages.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("{} {}", variant.class(), extra),
        None => variant.class().to_string(),
    };

    view! {
        <div class=full_class role="alert">
            {children()}
            {on_dismiss.map(|callback| view! {
                <button
                    class="alert-dismiss"
                    type="button"
                    on:click=move |_| callback.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}

/// Error and success messages of a page section.
///
/// Errors stay until dismissed; success notices are usually set through
/// [`crate::utils::flash`] and clear themselves.
#[component]
pub fn Notices(
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <Alert variant=AlertVariant::Error on_dismiss=Callback::new(move |_| error.set(None))>
                {e}
            </Alert>
        })}
        {move || success.get().map(|s| view! {
            <Alert variant=AlertVariant::Success on_dismiss=Callback::new(move |_| success.set(None))>
                {s}
            </Alert>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_alert_variant_classes() {
        assert_eq!(AlertVariant::Info.class(), "alert");
        assert_eq!(AlertVariant::Success.class(), "alert alert-success");
        assert_eq!(AlertVariant::Warning.class(), "alert alert-warning");
        assert_eq!(AlertVariant::Error.class(), "alert alert-error");
    }

    #[wasm_bindgen_test]
    fn test_default_variant_is_info() {
        assert_eq!(AlertVariant::default(), AlertVariant::Info);
    }
}
