use std::fmt;

use crate::filesystem::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Number of nodes drawn below the rendered directory. The directory itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub directories: usize,
    pub files: usize,
}

/// Box-drawing rendering of a directory together with the counts tallied while drawing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    pub text: String,
    pub summary: TreeSummary,
}

impl RenderedTree {
    pub fn of(node: &Node) -> Self {
        let mut text = String::from(" .\n");
        let mut summary = TreeSummary::default();

        render_children(node, " ", &mut text, &mut summary);

        Self { text, summary }
    }
}

fn render_children(node: &Node, prefix: &str, text: &mut String, summary: &mut TreeSummary) {
    let children = node.sorted_children();
    let count = children.len();

    for (index, child) in children.into_iter().enumerate() {
        let is_last = index + 1 == count;

        text.push_str(prefix);
        text.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        text.push_str(&child.display_name());
        text.push('\n');

        if child.is_directory() {
            summary.directories += 1;
            let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            render_children(child, &format!("{prefix}{indent}"), text, summary);
        } else {
            summary.files += 1;
        }
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} directories, {} files",
            self.text, self.summary.directories, self.summary.files
        )
    }
}
