//! The publish config pipeline

use appcfg_config::{
    AppConfig, ConfigLoader, EnvManifestPolicy, FileConfigLoader, FileLocaleResolver,
    GetConfigOptions, LocaleResolver, ManifestPolicy, PackageJson, UNVERSIONED,
};
use appcfg_fs::ProjectPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, PublishOptions, Result};

/// The sanitized manifest handed to a publish step.
///
/// `exp` carries either `sdkVersion` or `runtimeVersion`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestBundle {
    pub exp: AppConfig,
    pub pkg: PackageJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Value>,
}

/// Resolves publish manifests with injectable collaborators.
///
/// [`PublishConfigResolver::new`] wires the filesystem loader, the
/// filesystem locale resolver, and the environment policy.
pub struct PublishConfigResolver {
    loader: Box<dyn ConfigLoader>,
    locales: Box<dyn LocaleResolver>,
    policy: Box<dyn ManifestPolicy>,
}

impl Default for PublishConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishConfigResolver {
    pub fn new() -> Self {
        Self {
            loader: Box::new(FileConfigLoader::new()),
            locales: Box::new(FileLocaleResolver::new()),
            policy: Box::new(EnvManifestPolicy::new()),
        }
    }

    pub fn with_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn with_locale_resolver(mut self, locales: impl LocaleResolver + 'static) -> Self {
        self.locales = Box::new(locales);
        self
    }

    pub fn with_policy(mut self, policy: impl ManifestPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Resolve the manifest bundle for the project at `root`.
    ///
    /// `options` is normalized in place: after a successful call its release
    /// channel is always a string.
    pub async fn resolve(
        &self,
        root: &ProjectPath,
        options: &mut PublishOptions,
    ) -> Result<ManifestBundle> {
        let release_channel = options.normalize()?.to_string();
        tracing::debug!(%root, %release_channel, "Resolving publish config");

        let private = self
            .loader
            .get_config(root, GetConfigOptions::private())
            .await?;
        let private_has_runtime_version = private.exp.has_runtime_version();
        let hooks = private.exp.hooks;

        let public = self
            .loader
            .get_config(root, GetConfigOptions::public(private_has_runtime_version))
            .await?;
        let pkg = public.pkg;

        let mut exp = if public.exp.has_runtime_version() {
            tracing::debug!("Using runtime-version addressing");
            public.exp.without_sdk_version()
        } else {
            public.exp
        };

        if exp.sdk_version.as_deref() == Some(UNVERSIONED)
            && !self.policy.may_skip_manifest_validation()
        {
            return Err(Error::invalid_options(format!(
                "Cannot publish with sdkVersion {UNVERSIONED}."
            )));
        }

        let locales = self.locales.resolve_locales(root, &exp).await?;
        exp.locales = Some(locales);

        tracing::info!(
            %release_channel,
            sdk_version = exp.sdk_version.as_deref().unwrap_or("<none>"),
            runtime_version = exp.runtime_version.is_some(),
            "Resolved publish config"
        );

        Ok(ManifestBundle { exp, pkg, hooks })
    }
}

/// Resolve with the default filesystem and environment collaborators.
pub async fn resolve_publish_config(
    root: &ProjectPath,
    options: &mut PublishOptions,
) -> Result<ManifestBundle> {
    PublishConfigResolver::new().resolve(root, options).await
}
