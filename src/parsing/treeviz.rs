//! One-line-per-node rendering of a parse forest.
//!
//! Each node prints as `<connectors> <role> '<surface>'` with box-drawing
//! connectors encoding the tree structure and surfaces truncated so a deep
//! forest stays scannable. Used by the `inspect` CLI subcommand.

use crate::chunking::chunk::Chunk;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render the whole forest, one line per chunk.
pub fn render_forest(forest: &[Chunk]) -> String {
    let mut out = String::new();
    for (index, root) in forest.iter().enumerate() {
        render_chunk(root, "", index, forest.len(), &mut out);
    }
    out
}

fn render_chunk(chunk: &Chunk, prefix: &str, index: usize, count: usize, out: &mut String) {
    let is_last = index + 1 == count;
    let connector = if is_last { "└─" } else { "├─" };
    out.push_str(&format!(
        "{}{} {} '{}'\n",
        prefix,
        connector,
        chunk.role,
        truncate(&chunk.surface, MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    for (i, child) in chunk.children.iter().enumerate() {
        render_chunk(child, &child_prefix, i, chunk.children.len(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::chunk_tokens;
    use crate::parsing::parse;
    use crate::testing::{classify_all, noun, particle};

    #[test]
    fn renders_one_line_per_chunk_with_connectors() {
        let tokens = classify_all(&[noun("空"), particle("の", "連体化"), noun("色")]);
        let outcome = parse(chunk_tokens(&tokens));
        let rendered = render_forest(&outcome.forest);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "└─ NP '空の色'");
        assert!(lines[1].contains("├─ NP '空'"));
        assert!(lines[3].contains("└─ NP '色'"));
    }

    #[test]
    fn long_surfaces_are_truncated() {
        let long = "ア".repeat(40);
        assert_eq!(truncate(&long, 30).chars().count(), 33);
    }
}
