use leptos::*;
use pulldown_cmark::{html, Options, Parser};

/// Markdown to HTML, with tables and strikethrough enabled.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) => pulldown_cmark::Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders recipe text (ingredients, instructions) as markdown.
#[component]
pub fn MarkdownView(
    #[prop(into)] content: String,
    /// Shown instead when `content` is blank.
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    if content.trim().is_empty() {
        let text = placeholder.unwrap_or_default();
        return view! { <p class="text-muted">{text}</p> }.into_view();
    }

    view! {
        <div class="markdown-content" inner_html=render_markdown(&content)></div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_render_list() {
        let html = render_markdown("- flour\n- eggs\n");
        assert!(html.contains("<li>flour</li>"));
        assert!(html.contains("<li>eggs</li>"));
    }

    #[wasm_bindgen_test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
