//! Publish-time manifest resolution
//!
//! [`PublishConfigResolver`] turns a project on disk into the
//! [`ManifestBundle`] a publish step uploads:
//!
//! 1. validate the options (`releaseChannel` must be a string)
//! 2. load the private view for hooks and `runtimeVersion`
//! 3. load the public view
//! 4. pick runtime-version or SDK-version addressing, never both
//! 5. refuse an `UNVERSIONED` SDK unless the policy allows it
//! 6. resolve locale files against the reconciled manifest

pub mod error;
pub mod options;
pub mod resolver;

pub use error::{Error, Result};
pub use options::{DEFAULT_RELEASE_CHANNEL, PublishOptions};
pub use resolver::{ManifestBundle, PublishConfigResolver, resolve_publish_config};
