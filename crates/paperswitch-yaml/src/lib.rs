//! YAML configuration for PaperSwitch reveal switches.
//!
//! ```
//! use paperswitch_yaml::PaperSwitchManifest;
//!
//! let manifest = PaperSwitchManifest::from_yaml("on_color: \"#4cd964\"").unwrap();
//! manifest.validate().unwrap();
//! let config = manifest.into_config().unwrap();
//! assert_eq!(config.duration, 0.35);
//! ```

mod error;
mod manifest;

pub use error::ConfigError;
pub use manifest::PaperSwitchManifest;
