//! Form controls bound to `RwSignal`s.

use chrono::NaiveDate;
use leptos::*;

/// Label, control and optional hint.
#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=for_id>
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            {children()}
            {hint.map(|h| view! { <span class="form-hint">{h}</span> })}
        </div>
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <input
            type=input_type
            class="form-input"
            id=id
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <textarea
            class="form-input"
            id=id
            rows=rows.unwrap_or(4)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        ></textarea>
    }
}

/// Dropdown over `(value, label)` pairs.
#[component]
pub fn SelectInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            id=id
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {move || {
                options.get().into_iter().map(|(val, label)| {
                    let selected_val = val.clone();
                    view! {
                        <option value=val selected=move || value.get() == selected_val>
                            {label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] checked: RwSignal<bool>,
    #[prop(into)] label: String,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let checkbox_id = id.unwrap_or_else(|| control_id("checkbox", &label));

    view! {
        <label class="checkbox-label" for=checkbox_id.clone()>
            <input
                type="checkbox"
                id=checkbox_id
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// "HH:MM" time field; an empty field is an empty string.
#[component]
pub fn TimeInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="time"
            class="form-input"
            id=id
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn DateInput(
    #[prop(into)] value: RwSignal<Option<NaiveDate>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form-input"
            id=id
            required=required
            prop:value=move || value.get().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
            on:input=move |ev| value.set(parse_date_input(&event_target_value(&ev)))
        />
    }
}

#[component]
pub fn NumberInput(
    #[prop(into)] value: RwSignal<i32>,
    #[prop(optional)] min: Option<i32>,
    #[prop(optional)] max: Option<i32>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            class="form-input"
            id=id
            min=min
            max=max
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Ok(num) = event_target_value(&ev).trim().parse::<i32>() {
                    value.set(num);
                }
            }
        />
    }
}

fn control_id(prefix: &str, label: &str) -> String {
    format!("{}-{}", prefix, label.trim().replace(' ', "-").to_lowercase())
}

fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_control_id() {
        assert_eq!(control_id("checkbox", "Active "), "checkbox-active");
        assert_eq!(control_id("checkbox", "Show all"), "checkbox-show-all");
    }

    #[wasm_bindgen_test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-03-09"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("09/03/2024"), None);
    }
}
