//! Status bar color and style
//!
//! `androidStatusBar.backgroundColor` decides between two layouts of the
//! `AppTheme` style:
//!
//! - with a color, the theme points `colorPrimaryDark` at
//!   `@color/colorPrimaryDark` and `colors.xml` defines that color
//! - without one, the status bar is drawn translucent over the app
//!
//! Styles and colors live in separate documents, so each setter re-derives
//! the branch from [`get_status_bar_color`]. An empty color selects the
//! translucent layout.

use appcfg_config::{AppConfig, BarStyle};

use crate::resources::{ColorsDocument, StyleParent, StylesDocument};

pub const COLOR_PRIMARY_DARK: &str = "colorPrimaryDark";
pub const WINDOW_TRANSLUCENT_STATUS: &str = "android:windowTranslucentStatus";
pub const WINDOW_LIGHT_STATUS_BAR: &str = "android:windowLightStatusBar";

const THEME: StyleParent = StyleParent::app_theme_light_no_action_bar();

/// Which bar style turns on `android:windowLightStatusBar`.
///
/// On Android the flag asks for dark status bar icons, which is what
/// `dark-content` describes. `LightContent` keeps the inverse mapping for
/// projects that relied on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightStatusBarRule {
    #[default]
    DarkContent,
    LightContent,
}

impl LightStatusBarRule {
    pub fn wants_light_status_bar(self, style: BarStyle) -> bool {
        match self {
            LightStatusBarRule::DarkContent => style == BarStyle::DarkContent,
            LightStatusBarRule::LightContent => style == BarStyle::LightContent,
        }
    }
}

impl std::str::FromStr for LightStatusBarRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark-content" => Ok(LightStatusBarRule::DarkContent),
            "light-content" => Ok(LightStatusBarRule::LightContent),
            other => Err(format!("unknown light status bar rule '{other}'")),
        }
    }
}

/// The configured status bar background color, verbatim.
pub fn get_status_bar_color(config: &AppConfig) -> Option<&str> {
    config
        .android_status_bar
        .as_ref()
        .and_then(|bar| bar.background_color.as_deref())
}

/// The color that selects the colored layout; an empty string counts as unset.
fn background_color(config: &AppConfig) -> Option<&str> {
    get_status_bar_color(config).filter(|hex| !hex.is_empty())
}

/// The configured bar style, `light-content` when unset.
pub fn get_status_bar_style(config: &AppConfig) -> BarStyle {
    config
        .android_status_bar
        .as_ref()
        .and_then(|bar| bar.bar_style())
        .unwrap_or_default()
}

/// Applies the status bar config under a given [`LightStatusBarRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBarEditor {
    rule: LightStatusBarRule,
}

impl StatusBarEditor {
    pub fn new(rule: LightStatusBarRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> LightStatusBarRule {
        self.rule
    }

    pub fn set_status_bar_styles(&self, config: &AppConfig, styles: StylesDocument) -> StylesDocument {
        if background_color(config).is_none() {
            return styles.set_styles_item(&THEME, WINDOW_TRANSLUCENT_STATUS, "true");
        }

        let styles = styles
            .remove_styles_item(&THEME, WINDOW_TRANSLUCENT_STATUS)
            .set_styles_item(
                &THEME,
                COLOR_PRIMARY_DARK,
                &format!("@color/{COLOR_PRIMARY_DARK}"),
            );

        if self.rule.wants_light_status_bar(get_status_bar_style(config)) {
            styles.set_styles_item(&THEME, WINDOW_LIGHT_STATUS_BAR, "true")
        } else {
            styles.remove_styles_item(&THEME, WINDOW_LIGHT_STATUS_BAR)
        }
    }

    pub fn set_status_bar_colors(&self, config: &AppConfig, colors: ColorsDocument) -> ColorsDocument {
        match background_color(config) {
            Some(hex) => colors.set_color(COLOR_PRIMARY_DARK, hex),
            None => colors,
        }
    }
}

/// [`StatusBarEditor::set_status_bar_styles`] with the default rule.
pub fn set_status_bar_styles(config: &AppConfig, styles: StylesDocument) -> StylesDocument {
    StatusBarEditor::default().set_status_bar_styles(config, styles)
}

/// [`StatusBarEditor::set_status_bar_colors`] with the default rule.
pub fn set_status_bar_colors(config: &AppConfig, colors: ColorsDocument) -> ColorsDocument {
    StatusBarEditor::default().set_status_bar_colors(config, colors)
}
