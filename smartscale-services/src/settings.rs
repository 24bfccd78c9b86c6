// SPDX-License-Identifier: LGPL-3.0-only

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use smartscale_core::context::ScaleContext;
use smartscale_core::scaling::{DampedPadding, ScaledMetricsSize, TypographyScaler};
use smartscale_core::size_category::SizeCategory;
use smartscale_core::strategy::ScaleRatios;
use xdg::BaseDirectories;

use crate::error::{SettingsError, SettingsResult};

/// XDG prefix for settings lookup.
pub const XDG_PREFIX: &str = "smartscale";
/// Settings file name looked up in each XDG directory.
pub const SETTINGS_FILE: &str = "config.toml";
/// Overrides the ceiling, e.g. `SMARTSCALE_CEILING=xxx-large`.
pub const ENV_CEILING: &str = "SMARTSCALE_CEILING";
/// Names an extra settings file, merged after the XDG files.
pub const ENV_CONFIG: &str = "SMARTSCALE_CONFIG";

/// Scaling settings as read from `config.toml`.
///
/// ```toml
/// [general]
/// ceiling = "accessibility2"
///
/// [padding]
/// large = 0.5
///
/// [typography]
/// square_root = 1.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScaleSettings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Ratio overrides for padding
    #[serde(default)]
    pub padding: RatioOverrides,
    /// Ratio overrides for frame sizes
    #[serde(default)]
    pub size: RatioOverrides,
    /// Ratio overrides for text containers
    #[serde(default)]
    pub typography: RatioOverrides,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// The `[general]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneralSettings {
    /// Ambient ceiling for the whole application.
    pub ceiling: Option<SizeCategory>,
}

/// Optional replacements for any part of a ratio triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RatioOverrides {
    /// Square-root ratio.
    pub square_root: Option<f64>,
    /// Proportional ratio above the reference category.
    pub large: Option<f64>,
    /// Proportional ratio at or below the reference category.
    pub small: Option<f64>,
}

impl RatioOverrides {
    /// Apply the overrides on top of a use-case's default triple.
    pub fn resolve(&self, defaults: ScaleRatios) -> ScaleRatios {
        ScaleRatios::new(
            self.square_root.unwrap_or(defaults.square_root),
            self.large.unwrap_or(defaults.large),
            self.small.unwrap_or(defaults.small),
        )
    }

    fn merge(&mut self, other: RatioOverrides) {
        if other.square_root.is_some() {
            self.square_root = other.square_root;
        }
        if other.large.is_some() {
            self.large = other.large;
        }
        if other.small.is_some() {
            self.small = other.small;
        }
    }
}

impl ScaleSettings {
    /// Parse settings from TOML content.
    pub fn from_toml(content: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| SettingsError::ReadError(path.to_path_buf(), e))?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Check that every resolved ratio triple is usable.
    pub fn validate(&self) -> SettingsResult<()> {
        self.padding_ratios().validate()?;
        self.size_ratios().validate()?;
        self.typography_ratios().validate()?;
        Ok(())
    }

    /// Merge settings loaded later; values present in `other` win.
    pub fn merge(&mut self, other: ScaleSettings) {
        if other.general.ceiling.is_some() {
            self.general.ceiling = other.general.ceiling;
        }

        self.padding.merge(other.padding);
        self.size.merge(other.size);
        self.typography.merge(other.typography);

        self.other.extend(other.other);
    }

    /// The ambient ceiling, or [ScaleContext::DEFAULT_CEILING].
    pub fn ceiling(&self) -> SizeCategory {
        self.general.ceiling.unwrap_or(ScaleContext::DEFAULT_CEILING)
    }

    /// Ratios for damped padding.
    pub fn padding_ratios(&self) -> ScaleRatios {
        self.padding.resolve(DampedPadding::RATIOS)
    }

    /// Ratios for damped frame sizes.
    pub fn size_ratios(&self) -> ScaleRatios {
        self.size.resolve(ScaledMetricsSize::RATIOS)
    }

    /// Ratios for text containers.
    pub fn typography_ratios(&self) -> ScaleRatios {
        self.typography.resolve(TypographyScaler::RATIOS)
    }

    /// Root context for a system size category.
    pub fn context(&self, system: SizeCategory) -> ScaleContext {
        ScaleContext::new(system).with_ceiling(self.ceiling())
    }
}

/// Registry that collects settings from standard locations.
#[derive(Debug, Clone, Default)]
pub struct SettingsRegistry {
    settings: ScaleSettings,
}

impl SettingsRegistry {
    /// Create a registry with built-in defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry and load settings from XDG directories and the
    /// environment.
    pub fn load() -> SettingsResult<Self> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        let mut registry = Self::new();
        registry.load_xdg(&xdg_dirs);
        registry.apply_env();
        Ok(registry)
    }

    /// Load `config.toml` from XDG locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/smartscale/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/smartscale/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/smartscale/config.toml (XDG_CONFIG_HOME)
    pub fn load_xdg(&mut self, xdg_dirs: &BaseDirectories) {
        for path in xdg_dirs.find_data_files(SETTINGS_FILE).rev() {
            self.load_file(&path);
        }

        // Config search yields the user directory first, so reversing it
        // puts the user file last.
        for path in xdg_dirs.find_config_files(SETTINGS_FILE).rev() {
            self.load_file(&path);
        }
    }

    /// Merge a settings file. Unreadable or invalid files are logged and
    /// skipped; returns whether the file was applied.
    pub fn load_file(&mut self, path: &Path) -> bool {
        log::info!("Loading scaling settings from: {:?}", path);
        match ScaleSettings::from_file(path) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    self.settings.merge(loaded);
                    true
                },
                Err(e) => {
                    log::warn!("Ignoring settings file {:?}: {}", path, e);
                    false
                },
            },
            Err(e) => {
                log::warn!("{}", e);
                false
            },
        }
    }

    /// Load settings from several files, reporting each outcome.
    pub fn load_from_paths(&mut self, paths: &[PathBuf]) -> Vec<SettingsResult<()>> {
        paths
            .iter()
            .map(|path| {
                let loaded = ScaleSettings::from_file(path)?;
                loaded.validate()?;
                self.settings.merge(loaded);
                Ok(())
            })
            .collect()
    }

    /// Apply [ENV_CONFIG] and [ENV_CEILING] from the process environment.
    pub fn apply_env(&mut self) {
        let config = env::var_os(ENV_CONFIG).map(PathBuf::from);
        let ceiling = env::var(ENV_CEILING).ok();
        self.apply_overrides(config.as_deref(), ceiling.as_deref());
    }

    /// Apply an extra settings file, then a ceiling name. The ceiling is
    /// applied last so it wins over every file.
    pub fn apply_overrides(&mut self, config: Option<&Path>, ceiling: Option<&str>) {
        if let Some(path) = config {
            self.load_file(path);
        }

        if let Some(name) = ceiling {
            match name.parse::<SizeCategory>() {
                Ok(category) => self.settings.general.ceiling = Some(category),
                Err(e) => log::warn!("Ignoring {}: {}", ENV_CEILING, e),
            }
        }
    }

    /// Get the current settings.
    pub fn get(&self) -> &ScaleSettings {
        &self.settings
    }

    /// Root context for a system size category.
    pub fn context(&self, system: SizeCategory) -> ScaleContext {
        self.settings.context(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_field_by_field() {
        let mut settings = ScaleSettings::from_toml(
            r#"
            [general]
            ceiling = "accessibility3"

            [padding]
            large = 0.5
            small = 0.4
            "#,
        )
        .unwrap();

        let later = ScaleSettings::from_toml(
            r#"
            [padding]
            small = 0.3
            "#,
        )
        .unwrap();

        settings.merge(later);

        assert_eq!(settings.ceiling(), SizeCategory::Accessibility3);
        assert_eq!(settings.padding_ratios(), ScaleRatios::new(2.0, 0.5, 0.3));
    }

    #[test]
    fn test_defaults() {
        let settings = ScaleSettings::default();
        assert_eq!(settings.ceiling(), ScaleContext::DEFAULT_CEILING);
        assert_eq!(settings.padding_ratios(), DampedPadding::RATIOS);
        assert_eq!(settings.size_ratios(), ScaledMetricsSize::RATIOS);
        assert_eq!(settings.typography_ratios(), TypographyScaler::RATIOS);
    }

    #[test]
    fn test_invalid_ratio_fails_validation() {
        let settings = ScaleSettings::from_toml("[size]\nlarge = -1.0\n").unwrap();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_unknown_ceiling_is_parse_error() {
        let result = ScaleSettings::from_toml("[general]\nceiling = \"enormous\"\n");
        assert!(matches!(result, Err(SettingsError::Toml(_))));
    }

    #[test]
    fn test_ceiling_override() {
        let mut registry = SettingsRegistry::new();
        registry.apply_overrides(None, Some("xx-large"));
        assert_eq!(registry.get().ceiling(), SizeCategory::XxLarge);

        registry.apply_overrides(None, Some("not-a-size"));
        assert_eq!(registry.get().ceiling(), SizeCategory::XxLarge);
    }

    #[test]
    fn test_context_uses_ceiling() {
        let settings = ScaleSettings::from_toml("[general]\nceiling = \"large\"\n").unwrap();
        let context = settings.context(SizeCategory::Accessibility2);
        assert_eq!(context.effective_category(), SizeCategory::Large);
        assert!(!context.should_show_oversize_affordance());
    }
}
