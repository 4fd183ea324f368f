use std::path::{Path, PathBuf};

/// Canonical form of `path` when it exists, otherwise the path joined onto the working directory.
pub fn display_best_effort(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    if path.is_absolute() {
        return path.display().to_string();
    }

    match std::env::current_dir() {
        Ok(current_dir) => current_dir.join(path).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

pub trait PathDisplayExt {
    fn display_best_effort(&self) -> String;
}

impl PathDisplayExt for Path {
    fn display_best_effort(&self) -> String {
        display_best_effort(self)
    }
}

impl PathDisplayExt for PathBuf {
    fn display_best_effort(&self) -> String {
        display_best_effort(self)
    }
}
