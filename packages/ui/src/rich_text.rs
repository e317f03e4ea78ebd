//! Markdown-backed rich-text field.
//!
//! The author writes Markdown; the stored value is the rendered HTML string,
//! which is what the public pages display. A live preview mirrors the
//! rendered output under the editor.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown source string to an HTML string.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Editor for a rich-text form field. Emits the rendered HTML on every edit.
///
/// `value` is the field's current stored value; when the owning form clears
/// its draft the editor empties itself too.
#[component]
pub fn RichTextArea(
    id: String,
    placeholder: String,
    value: ReadOnlySignal<String>,
    on_change: EventHandler<String>,
) -> Element {
    let mut source = use_signal(String::new);

    use_effect(move || {
        if value().is_empty() {
            source.set(String::new());
        }
    });

    let preview = render_markdown(&source());

    rsx! {
        div {
            class: "rich-text",
            textarea {
                id,
                class: "form-input form-textarea",
                placeholder,
                value: "{source}",
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    on_change.call(render_markdown(&text));
                    source.set(text);
                },
            }
            if !preview.is_empty() {
                div {
                    class: "rich-text-preview",
                    dangerous_inner_html: preview,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn markdown_renders_to_html() {
        let html = render_markdown("# Hello\n\nSome **bold** text.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn empty_source_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
