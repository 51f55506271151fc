use leptos::*;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
    Success,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Success => "btn btn-success",
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
}

impl ButtonSize {
    fn class(&self) -> Option<&'static str> {
        match self {
            ButtonSize::Medium => None,
            ButtonSize::Small => Some("btn-sm"),
        }
    }
}

/// Reusable button component with variants and sizes.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = move || {
        let mut classes = vec![variant.get().class()];
        classes.extend(size.class());
        if let Some(ref extra) = class {
            classes.push(extra);
        }
        classes.join(" ")
    };

    let button_type = button_type.unwrap_or_else(|| "button".to_string());
    let is_disabled = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type
            class=full_class
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <span class="spinner spinner-inline"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
        assert_eq!(ButtonVariant::Success.class(), "btn btn-success");
    }

    #[wasm_bindgen_test]
    fn test_button_size_classes() {
        assert_eq!(ButtonSize::Medium.class(), None);
        assert_eq!(ButtonSize::Small.class(), Some("btn-sm"));
    }
}
