//! YAML manifest for a reveal switch.

use crate::error::ConfigError;
use paperswitch_core::{Color, Rect, Size};
use paperswitch_widgets::{
    FillFallback, PaperSwitch, PaperSwitchConfig, RevealPanel, Surface, Switch, DEFAULT_DURATION,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reveal switch settings loaded from YAML.
///
/// ```yaml
/// duration: 0.35
/// on_color: "#4cd964"
/// fallback: tint
/// on: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaperSwitchManifest {
    /// Reveal and conceal duration in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Fill color as hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_color: Option<String>,
    /// Switch track tint as hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
    /// Fill color fallback policy
    #[serde(default)]
    pub fallback: FillFallback,
    /// Initial switch value
    #[serde(default)]
    pub on: bool,
}

const fn default_duration() -> f64 {
    DEFAULT_DURATION
}

impl Default for PaperSwitchManifest {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            on_color: None,
            tint: None,
            fallback: FillFallback::default(),
            on: false,
        }
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|hex| {
            Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor {
                field: field.to_string(),
                source,
            })
        })
        .transpose()
}

impl PaperSwitchManifest {
    /// Parse a manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML or unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize the manifest to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the manifest yields a usable switch.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad duration, an unparsable color, or when no
    /// fill color can be resolved under the fallback policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let config = self.to_config()?;
        config.resolve_fill_color(self.parsed_tint()?)?;
        Ok(())
    }

    /// Widget-level configuration described by this manifest.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad duration or an unparsable `on_color`.
    pub fn to_config(&self) -> Result<PaperSwitchConfig, ConfigError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "duration".to_string(),
                message: format!(
                    "must be a finite number of seconds greater than zero, got {}",
                    self.duration
                ),
            });
        }

        Ok(PaperSwitchConfig {
            duration: self.duration,
            fill_color: parse_color("on_color", self.on_color.as_deref())?,
            fallback: self.fallback,
        })
    }

    /// Consume the manifest into a widget-level configuration.
    ///
    /// # Errors
    ///
    /// See [`to_config`](Self::to_config).
    pub fn into_config(self) -> Result<PaperSwitchConfig, ConfigError> {
        self.to_config()
    }

    /// Build the switch described by `tint` and `on`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for an unparsable `tint`.
    pub fn build_switch(&self) -> Result<Switch, ConfigError> {
        let switch = Switch::with_state(self.on);
        Ok(match self.parsed_tint()? {
            Some(tint) => switch.tint(tint),
            None => switch,
        })
    }

    /// Build the switch at `frame` and attach reveal behavior inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns any manifest or attach error.
    pub fn attach(&self, frame: Rect, parent: &dyn Surface) -> Result<PaperSwitch, ConfigError> {
        let config = self.to_config()?;
        let switch = self.build_switch()?.frame(frame);
        let paper = PaperSwitch::attach(switch, parent, &config)?;
        debug!(
            on = paper.is_on(),
            duration = config.duration,
            "switch attached from manifest"
        );
        Ok(paper)
    }

    /// Build a [`RevealPanel`] of `size` hosting the configured switch.
    ///
    /// # Errors
    ///
    /// Returns any manifest or attach error.
    pub fn build_panel(
        &self,
        size: Size,
        background: Option<Color>,
        switch_frame: Rect,
    ) -> Result<RevealPanel, ConfigError> {
        let config = self.to_config()?;
        let switch = self.build_switch()?;
        let panel = RevealPanel::new(size, background, switch, switch_frame, &config)?;
        debug!(
            on = panel.is_on(),
            fill = %panel.paper().fill_color().to_hex(),
            "panel built from manifest"
        );
        Ok(panel)
    }

    fn parsed_tint(&self) -> Result<Option<Color>, ConfigError> {
        parse_color("tint", self.tint.as_deref())
    }
}
