use leptos::*;
use leptos_router::*;

/// Top-level sections, each served under its own path.
const SECTIONS: [(&str, &str); 2] = [("/helper", "Helper"), ("/admin", "Admin")];

fn link_class(current_path: &str, section_path: &str) -> &'static str {
    if current_path.starts_with(section_path) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/helper" class="navbar-brand">"Household Manager"</a>
                <div class="navbar-links">
                    {SECTIONS.into_iter().map(|(path, label)| {
                        let class = move || link_class(&location.pathname.get(), path);
                        view! { <a href=path class=class>{label}</a> }
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_link_class() {
        assert_eq!(link_class("/helper", "/helper"), "nav-link active");
        assert_eq!(link_class("/admin/recipes", "/admin"), "nav-link active");
        assert_eq!(link_class("/admin", "/helper"), "nav-link");
    }
}
