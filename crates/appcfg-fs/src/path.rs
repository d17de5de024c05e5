//! Project-root anchored paths

use std::path::{Path, PathBuf};

use crate::constants::ProjectFile;

/// The root directory of a mobile project.
///
/// Every file the toolchain touches is addressed relative to this root.
/// Relative segments are stored with forward slashes and converted to the
/// platform separator only when a native path is requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath {
    root: PathBuf,
}

impl ProjectPath {
    /// Anchor a project at `root`.
    ///
    /// Existing directories are canonicalized (without UNC prefixes on
    /// Windows); anything else is kept as given.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        Self { root }
    }

    /// The project root as a native path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Native path of a well-known project file.
    pub fn file(&self, file: ProjectFile) -> PathBuf {
        self.join(file.relative_path())
    }

    /// Join a forward-slash relative path onto the root.
    pub fn join(&self, relative: &str) -> PathBuf {
        relative
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    /// Resolve a file reference found inside a config.
    ///
    /// Absolute references are returned untouched, everything else is
    /// resolved against the project root (`./locales/fr.json` and
    /// `locales/fr.json` are equivalent).
    pub fn resolve_reference(&self, reference: &str) -> PathBuf {
        let candidate = Path::new(reference);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.join(reference)
        }
    }

    /// Display a native path relative to the root when it lives inside it.
    pub fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root.display())
    }
}

impl From<&Path> for ProjectPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for ProjectPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&str> for ProjectPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_dot_segments() {
        let project = ProjectPath::new("/nonexistent/project");
        assert_eq!(
            project.join("./locales/fr.json"),
            PathBuf::from("/nonexistent/project/locales/fr.json")
        );
    }

    #[test]
    fn test_resolve_reference_keeps_absolute() {
        let project = ProjectPath::new("/nonexistent/project");
        let abs = std::env::temp_dir().join("de.json");
        assert_eq!(project.resolve_reference(abs.to_str().unwrap()), abs);
    }

    #[test]
    fn test_display_relative() {
        let project = ProjectPath::new("/nonexistent/project");
        let styles = project.file(ProjectFile::AndroidStyles);
        assert_eq!(
            project.display_relative(&styles),
            "android/app/src/main/res/values/styles.xml"
        );
    }
}
