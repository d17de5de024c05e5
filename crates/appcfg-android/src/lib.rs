//! Android resource documents and the status bar editor
//!
//! [`resources`] models `styles.xml` and `colors.xml` as in-memory documents.
//! [`status_bar`] derives the status bar color and style from an app config
//! and writes them into those documents. [`project`] ties both to the files
//! of a project on disk.

pub mod error;
pub mod project;
pub mod resources;
pub mod status_bar;

pub use error::{Error, Result};
pub use project::{AndroidResourcePaths, StatusBarReport, apply_status_bar};
pub use resources::{ColorsDocument, ResourceGroup, ResourceItem, StyleParent, StylesDocument};
pub use status_bar::{
    LightStatusBarRule, StatusBarEditor, get_status_bar_color, get_status_bar_style,
    set_status_bar_colors, set_status_bar_styles,
};
