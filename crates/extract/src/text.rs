use ego_tree::NodeRef;
use regex::Regex;
use scraper::{Html, Node};

/// Tags whose entire subtree is layout noise rather than content.
const NOISE_TAGS: [&str; 4] = ["script", "style", "nav", "footer"];

/// Collect the visible text of a document, skipping noise subtrees entirely.
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut out = String::new();
    collect_text(doc.tree.root(), &mut out);
    out
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) if NOISE_TAGS.contains(&element.name()) => return,
        Node::Text(text) => out.push_str(text),
        _ => {}
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

/// Collapse HTML layout artifacts into readable plain text.
///
/// Lines are trimmed, runs of two-or-more spaces inside a line are treated
/// as phrase boundaries, and empty fragments are dropped. The output has no
/// empty lines and no leading/trailing whitespace on any line.
pub fn normalize_whitespace(text: &str) -> String {
    let boundary = Regex::new(r" {2,}").unwrap();

    text.lines()
        .map(str::trim)
        .flat_map(|line| boundary.split(line))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hard cap on extracted text, counted in characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
