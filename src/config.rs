//! Site configuration, read once at startup from a TOML file.
//!
//! Every field has a default, so an empty or partial file is valid. The
//! binary falls back to [`SiteConfig::default`] when the file is missing or
//! malformed.
use crate::animations::MorphSettings;
use crate::camera::{DEFAULT_FOV_DEGREES, DEFAULT_SMOOTHING};
use crate::view_state::DEFAULT_MOBILE_BREAKPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "KEYFRAME_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which landing page the binary shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    #[default]
    Agency,
    Legal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub seed: u64,
    pub idle_morph_speed: f32,
    pub reveal_morph_speed: f32,
    pub color_blend: f32,
    pub flash_probability: f32,
    /// Sprite edge length in world units.
    pub point_size: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        let morph = MorphSettings::default();
        Self {
            count: 15_000,
            seed: 0x6b66,
            idle_morph_speed: morph.idle_speed,
            reveal_morph_speed: morph.reveal_speed,
            color_blend: morph.color_blend,
            flash_probability: morph.flash_probability,
            point_size: 0.02,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub smoothing: f32,
    pub mobile_breakpoint: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            smoothing: DEFAULT_SMOOTHING,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub logo: PathBuf,
    /// Directory holding `1.jpg` .. `6.jpg` for the portfolio grid.
    pub portfolio_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo: PathBuf::from("assets/logo.svg"),
            portfolio_dir: PathBuf::from("assets/portfolio"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub assets: AssetConfig,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(&text, path)
    }

    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Path from `KEYFRAME_CONFIG`, or `site.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from [`Self::default_path`]; any failure is logged and replaced
    /// by the defaults. A missing file is not worth a warning.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), variant = ?config.variant, "loaded site config");
                config
            }
            Err(ConfigError::NotFound(_)) => {
                tracing::info!(path = %path.display(), "no site config, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(%err, "site config unusable, using defaults");
                Self::default()
            }
        }
    }

    pub fn morph_settings(&self) -> MorphSettings {
        MorphSettings {
            idle_speed: self.particles.idle_morph_speed,
            reveal_speed: self.particles.reveal_morph_speed,
            color_blend: self.particles.color_blend.clamp(0.0, 1.0),
            flash_probability: self.particles.flash_probability.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = SiteConfig::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.particles.count, 15_000);
        assert_eq!(config.camera.mobile_breakpoint, 768.0);
        assert_eq!(config.morph_settings(), MorphSettings::default());
    }

    #[test]
    fn partial_sections_keep_the_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
variant = "legal"

[particles]
count = 8000
reveal_morph_speed = 6.0

[assets]
portfolio_dir = "media/work"
"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.variant, SiteVariant::Legal);
        assert_eq!(config.particles.count, 8_000);
        assert_eq!(config.particles.idle_morph_speed, 4.0);
        assert_eq!(config.morph_settings().reveal_speed, 6.0);
        assert_eq!(config.assets.portfolio_dir, PathBuf::from("media/work"));
        assert_eq!(config.assets.logo, PathBuf::from("assets/logo.svg"));
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[particles]\ncount = \"lots\"").unwrap();
        match SiteConfig::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            SiteConfig::load(&path),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn blend_factor_is_clamped() {
        let config = SiteConfig::parse(
            "[particles]\ncolor_blend = 3.0\nflash_probability = -1.0",
            Path::new("inline"),
        )
        .unwrap();
        let morph = config.morph_settings();
        assert_eq!(morph.color_blend, 1.0);
        assert_eq!(morph.flash_probability, 0.0);
    }
}
