//! SDK version inference and validation

use std::path::Path;

use appcfg_fs::{ProjectFile, ProjectPath, io};
use semver::Version;

use crate::{Error, PackageJson, Result};

/// Sentinel SDK version used by development builds of the runtime.
pub const UNVERSIONED: &str = "UNVERSIONED";

/// Check that `sdk_version` is either [`UNVERSIONED`] or a semver version.
pub fn validate_sdk_version(config_path: &Path, sdk_version: &str) -> Result<()> {
    if sdk_version == UNVERSIONED {
        return Ok(());
    }
    Version::parse(sdk_version).map(|_| ()).map_err(|e| {
        Error::invalid_config(
            config_path,
            format!("sdkVersion '{sdk_version}' is not a valid version: {e}"),
        )
    })
}

/// Infer the SDK version from the installed `expo` package.
///
/// The SDK version is the package's major version with zeroed minor and
/// patch (`49.0.13` → `49.0.0`). Returns `None` when the package is not
/// installed.
pub fn infer_sdk_version(root: &ProjectPath) -> Result<Option<String>> {
    let path = root.file(ProjectFile::ExpoPackageJson);
    let Some(pkg) = io::read_json_optional::<PackageJson>(&path)? else {
        tracing::debug!(path = %path.display(), "expo package not installed");
        return Ok(None);
    };

    let raw = pkg
        .version
        .ok_or_else(|| Error::invalid_config(&path, "expo package has no version"))?;
    let version = Version::parse(&raw).map_err(|e| {
        Error::invalid_config(&path, format!("expo package version '{raw}' is invalid: {e}"))
    })?;

    let sdk_version = format!("{}.0.0", version.major);
    tracing::debug!(%sdk_version, expo = %raw, "Inferred SDK version");
    Ok(Some(sdk_version))
}
