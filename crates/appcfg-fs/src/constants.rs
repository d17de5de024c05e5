//! Well-known files inside a mobile project

/// Files the toolchain reads or writes, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFile {
    /// `app.json`, the declarative app config
    AppJson,
    /// `package.json`
    PackageJson,
    /// `node_modules/expo/package.json`, used to infer the SDK version
    ExpoPackageJson,
    /// `android/app/src/main/res/values/styles.xml`
    AndroidStyles,
    /// `android/app/src/main/res/values/colors.xml`
    AndroidColors,
}

impl ProjectFile {
    /// Relative path using forward slashes.
    pub fn relative_path(self) -> &'static str {
        match self {
            ProjectFile::AppJson => "app.json",
            ProjectFile::PackageJson => "package.json",
            ProjectFile::ExpoPackageJson => "node_modules/expo/package.json",
            ProjectFile::AndroidStyles => "android/app/src/main/res/values/styles.xml",
            ProjectFile::AndroidColors => "android/app/src/main/res/values/colors.xml",
        }
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.relative_path())
    }
}
