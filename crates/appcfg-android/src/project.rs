//! Applying the status bar config to a project's resource files

use std::path::PathBuf;

use appcfg_config::AppConfig;
use appcfg_fs::{ProjectFile, ProjectPath, io};

use crate::resources::{ColorsDocument, StylesDocument};
use crate::status_bar::{LightStatusBarRule, StatusBarEditor};
use crate::Result;

/// Locations of the resource files the status bar editor touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidResourcePaths {
    pub styles: PathBuf,
    pub colors: PathBuf,
}

impl AndroidResourcePaths {
    pub fn new(root: &ProjectPath) -> Self {
        Self {
            styles: root.file(ProjectFile::AndroidStyles),
            colors: root.file(ProjectFile::AndroidColors),
        }
    }
}

/// Outcome of [`apply_status_bar`].
#[derive(Debug, Clone)]
pub struct StatusBarReport {
    pub styles: StylesDocument,
    pub colors: ColorsDocument,
    pub styles_changed: bool,
    pub colors_changed: bool,
    /// Whether changed files were written
    pub written: bool,
}

impl StatusBarReport {
    pub fn changed(&self) -> bool {
        self.styles_changed || self.colors_changed
    }
}

/// Read `styles.xml` and `colors.xml`, apply the status bar config, and
/// write back whatever changed.
///
/// Missing files are treated as empty documents. With `dry_run` nothing is
/// written.
pub fn apply_status_bar(
    root: &ProjectPath,
    config: &AppConfig,
    rule: LightStatusBarRule,
    dry_run: bool,
) -> Result<StatusBarReport> {
    let paths = AndroidResourcePaths::new(root);
    let editor = StatusBarEditor::new(rule);

    let original_styles = match io::read_text_optional(&paths.styles)? {
        Some(xml) => StylesDocument::parse(&xml)?,
        None => StylesDocument::new(),
    };
    let original_colors = match io::read_text_optional(&paths.colors)? {
        Some(xml) => ColorsDocument::parse(&xml)?,
        None => ColorsDocument::new(),
    };

    let styles = editor.set_status_bar_styles(config, original_styles.clone());
    let colors = editor.set_status_bar_colors(config, original_colors.clone());

    let styles_changed = styles != original_styles;
    let colors_changed = colors != original_colors;

    tracing::info!(
        styles_changed,
        colors_changed,
        rule = ?editor.rule(),
        "Computed status bar resources"
    );

    if !dry_run {
        if styles_changed {
            io::write_text(&paths.styles, &styles.to_xml()?)?;
        }
        if colors_changed {
            io::write_text(&paths.colors, &colors.to_xml()?)?;
        }
    }

    Ok(StatusBarReport {
        styles,
        colors,
        styles_changed,
        colors_changed,
        written: !dry_run && (styles_changed || colors_changed),
    })
}
