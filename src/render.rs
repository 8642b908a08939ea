//! Read-only text rendering of an explored thought tree.

use crate::store::ThoughtStore;
use crate::thought::{Thought, ThoughtState};

const CONTENT_WIDTH: usize = 60;

/// Render the tree as indented text: one line per node with a state glyph,
/// truncated content, and value.
///
/// Pure and side-effect free; callable on a partially explored store (e.g.
/// for debugging a search that was aborted by a collaborator error).
pub fn render_tree(store: &ThoughtStore) -> String {
    let Some(root) = store.root() else {
        return "Empty tree".to_string();
    };
    let mut lines = Vec::new();
    render_node(store, root, "", true, &mut lines);
    lines.join("\n")
}

fn render_node(
    store: &ThoughtStore,
    thought: &Thought,
    prefix: &str,
    is_last: bool,
    lines: &mut Vec<String>,
) {
    let glyph = match thought.state {
        ThoughtState::Promising => "[?]",
        ThoughtState::Solved => "[✓]",
        ThoughtState::Failed => "[✗]",
        ThoughtState::Pruned => "[—]",
    };
    let connector = if is_last { "└── " } else { "├── " };
    // Truncate on char boundaries; byte slicing could split a code point.
    let content: String = thought.content.chars().take(CONTENT_WIDTH).collect();
    lines.push(format!(
        "{prefix}{connector}{glyph} {content} (v={:.2})",
        thought.value
    ));

    let extension = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{prefix}{extension}");
    for (i, &child_id) in thought.children_ids.iter().enumerate() {
        if let Ok(child) = store.get(child_id) {
            let is_last_child = i == thought.children_ids.len() - 1;
            render_node(store, child, &child_prefix, is_last_child, lines);
        }
    }
}
