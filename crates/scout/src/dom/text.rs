// ABOUTME: Rendered-text approximation of an element, similar to the browser's innerText.
// ABOUTME: Block boundaries become line breaks, inline whitespace collapses, script/style are skipped.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// Elements that start and end a line when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "details",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tr",
    "ul",
];

/// Elements whose text never renders.
const SKIPPED_TAGS: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the rendered text of an element.
///
/// Each rendered line is whitespace-normalized; blank lines are dropped and
/// the remaining lines are joined with `\n`. The result is already trimmed.
pub fn inner_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(*element, &mut raw);

    raw.split('\n')
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                // Source newlines are formatting, not rendered line breaks.
                out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            }
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_TAGS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                collect_text(child, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Finds the region a heading belongs to: the closest `section` (the element
/// itself included), or the parent element when there is none.
pub fn enclosing_section(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if element.value().name() == "section" {
        return Some(element);
    }

    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "section")
        .or_else(|| element.parent().and_then(ElementRef::wrap))
}
