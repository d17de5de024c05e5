//! Filesystem helpers for the app config toolchain
//!
//! Provides project-anchored path handling and safe I/O for the JSON and XML
//! files a mobile project keeps on disk.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use path::ProjectPath;
