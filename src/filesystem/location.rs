use std::fmt;

use derive_more::Deref;
use tracing::debug;

/// First segment of every location.
pub const ROOT_MARKER: &str = "/";

/// An absolute position in the tree, stored as segments that start with the root marker.
///
/// A location says nothing about existence. It is produced by [`Location::resolve`]
/// and only checked against a tree by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct Location(Vec<String>);

impl Location {
    pub fn root() -> Self {
        Location(vec![ROOT_MARKER.to_string()])
    }

    /// Location of an absolute path such as `/dev/stanley`.
    pub fn absolute(path: &str) -> Self {
        Self::root().resolve(path)
    }

    /// Resolves `target` against this location.
    ///
    /// Absolute targets keep their non-empty components verbatim. Relative
    /// targets walk from here: `.` stays, `..` pops but never below the root,
    /// anything else is appended.
    pub fn resolve(&self, target: &str) -> Location {
        let components = target.split('/').filter(|part| !part.is_empty());

        let resolved = if target.starts_with(ROOT_MARKER) {
            let mut segments = Self::root().0;
            segments.extend(components.map(str::to_string));
            Location(segments)
        } else {
            let mut segments = self.0.clone();
            for part in components {
                match part {
                    "." => {}
                    ".." => {
                        if segments.len() > 1 {
                            segments.pop();
                        }
                    }
                    _ => segments.push(part.to_string()),
                }
            }
            Location(segments)
        };

        debug!("Resolved '{}' from {} to {}", target, self, resolved);
        resolved
    }

    pub fn is_root(&self) -> bool {
        self.0.len() <= 1
    }

    /// Last segment, or the root marker at the root.
    pub fn last_segment(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or(ROOT_MARKER)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_MARKER);
        }
        for segment in self.0.iter().skip(1) {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
