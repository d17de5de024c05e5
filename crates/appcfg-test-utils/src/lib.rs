//! Shared test utilities for the appcfg workspace.
//!
//! This crate provides project fixtures to avoid duplicating setup code
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for a mobile project on disk

pub mod project;

pub use project::TestProject;
