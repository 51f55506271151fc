use leptos::*;
use shared::{Priority, TaskCategory};

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
    Today,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Danger => "badge badge-danger",
            BadgeVariant::Info => "badge badge-info",
            BadgeVariant::Today => "badge today-badge",
        }
    }

    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::High => BadgeVariant::Danger,
            Priority::Medium => BadgeVariant::Warning,
            Priority::Low => BadgeVariant::Success,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum BadgeSize {
    #[default]
    Medium,
    Small,
}

/// Badge/label component for status indicators.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = {
        let mut classes = vec![variant.class()];
        if size == BadgeSize::Small {
            classes.push("badge-sm");
        }
        if let Some(ref extra) = class {
            classes.push(extra);
        }
        classes.join(" ")
    };

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}

/// Normalized zone priority, e.g. "High".
#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <Badge variant=BadgeVariant::for_priority(priority) size=BadgeSize::Small>
            {priority.label()}
        </Badge>
    }
}

/// Task type label, styled per category.
#[component]
pub fn TaskTypeBadge(category: TaskCategory, #[prop(into)] type_name: String) -> impl IntoView {
    let class = format!("task-type {}", category.as_str());
    view! {
        <span class=class>{type_name}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_badge_variant_classes() {
        assert_eq!(BadgeVariant::Default.class(), "badge");
        assert_eq!(BadgeVariant::Danger.class(), "badge badge-danger");
        assert_eq!(BadgeVariant::Today.class(), "badge today-badge");
    }

    #[wasm_bindgen_test]
    fn test_priority_variants() {
        assert_eq!(BadgeVariant::for_priority(Priority::High), BadgeVariant::Danger);
        assert_eq!(BadgeVariant::for_priority(Priority::Medium), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_priority(Priority::Low), BadgeVariant::Success);
    }
}
