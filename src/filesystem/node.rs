use std::borrow::Cow;
use std::cmp::Ordering;

use hashlink::LinkedHashMap;

/// Password guarding the content of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protection {
    password: String,
}

impl Protection {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Plain equality check. An empty secret never opens a protected file.
    pub fn admits(&self, secret: &str) -> bool {
        !secret.is_empty() && secret == self.password
    }
}

/// An entry of the simulated filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory {
        name: String,
        children: LinkedHashMap<String, Node>,
    },
    File {
        name: String,
        content: Option<String>,
        is_executable: bool,
        protection: Option<Protection>,
    },
}

impl Node {
    /// Builds a directory. A child whose name repeats an earlier sibling replaces it.
    pub fn directory(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        let children = children
            .into_iter()
            .map(|child| (child.name().to_string(), child))
            .collect();

        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            content: Some(content.into()),
            is_executable: false,
            protection: None,
        }
    }

    pub fn executable(name: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            content: None,
            is_executable: true,
            protection: None,
        }
    }

    pub fn protected_file(
        name: impl Into<String>,
        content: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Node::File {
            name: name.into(),
            content: Some(content.into()),
            is_executable: false,
            protection: Some(Protection::new(password)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Node::File {
                protection: Some(_),
                ..
            }
        )
    }

    /// Name as shown by `ls` and `tree`: directories carry a trailing `/`.
    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Node::Directory { name, .. } => Cow::Owned(format!("{name}/")),
            Node::File { name, .. } => Cow::Borrowed(name),
        }
    }

    /// Children in display order: directories first, then files, each group
    /// alphabetical. Files have no children.
    pub fn sorted_children(&self) -> Vec<&Node> {
        let Node::Directory { children, .. } = self else {
            return Vec::new();
        };

        let mut entries = children.values().collect::<Vec<_>>();
        entries.sort_by(|a, b| display_order(a, b));
        entries
    }
}

fn display_order(a: &Node, b: &Node) -> Ordering {
    b.is_directory()
        .cmp(&a.is_directory())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.name().cmp(b.name()))
}
