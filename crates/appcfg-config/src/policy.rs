//! Manifest validation policy

/// Environment variable whose presence allows publishing `UNVERSIONED`.
pub const SKIP_VALIDATION_TOKEN_VAR: &str = "EXPO_SKIP_MANIFEST_VALIDATION_TOKEN";

/// Decides whether manifest validation may be skipped.
pub trait ManifestPolicy: Send + Sync {
    fn may_skip_manifest_validation(&self) -> bool;
}

/// Reads the decision from the process environment.
#[derive(Debug, Clone)]
pub struct EnvManifestPolicy {
    var: String,
}

impl EnvManifestPolicy {
    pub fn new() -> Self {
        Self::with_var(SKIP_VALIDATION_TOKEN_VAR)
    }

    /// Use a different environment variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvManifestPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestPolicy for EnvManifestPolicy {
    fn may_skip_manifest_validation(&self) -> bool {
        std::env::var_os(&self.var).is_some_and(|v| !v.is_empty())
    }
}

/// A fixed decision, for embedders and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticManifestPolicy(pub bool);

impl ManifestPolicy for StaticManifestPolicy {
    fn may_skip_manifest_validation(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_policy_unset_var_disallows() {
        let policy = EnvManifestPolicy::with_var("APPCFG_TEST_POLICY_NEVER_SET");
        assert!(!policy.may_skip_manifest_validation());
    }

    #[test]
    fn test_env_policy_set_var_allows() {
        let var = "APPCFG_TEST_POLICY_SET";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, "token") };
        assert!(EnvManifestPolicy::with_var(var).may_skip_manifest_validation());
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_static_policy() {
        assert!(StaticManifestPolicy(true).may_skip_manifest_validation());
        assert!(!StaticManifestPolicy::default().may_skip_manifest_validation());
    }
}
