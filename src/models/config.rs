use mono_dither::{DitherAlgorithm, FrameConverter, ToneOptions};
use serde::Deserialize;
use std::path::Path;

use super::DisplayTarget;
use crate::error::ConfigError;

/// Frame rate used when neither the command line nor a profile sets one
pub const DEFAULT_FPS: u32 = 10;

/// Conversion options loaded from a YAML profile.
///
/// Every field is optional. Profiles are layered with [`merge`](Self::merge):
/// values set in the overriding profile win, unset ones fall through, and
/// whatever is still unset after layering takes the built-in default.
///
/// ```yaml
/// algorithm: atkinson
/// fps: 12
/// width: 168
/// height: 384
/// exposure: 0.5
/// min_value: 20
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertProfile {
    /// Algorithm name, e.g. "floyd-steinberg"
    pub algorithm: Option<String>,

    /// Frames per second, for trimming and playback
    pub fps: Option<u32>,

    /// Canvas width in pixels
    pub width: Option<u32>,

    /// Canvas height in pixels
    pub height: Option<u32>,

    /// Frame budget after trimming
    pub max_frames: Option<usize>,

    /// Window start in seconds
    pub start_time: Option<f64>,

    /// Window end in seconds
    pub end_time: Option<f64>,

    pub invert: Option<bool>,

    pub keep_black: Option<bool>,

    /// Exposure in stops
    pub exposure: Option<f64>,

    /// Range filter lower bound
    pub min_value: Option<u8>,

    /// Range filter upper bound
    pub max_value: Option<u8>,

    /// Noise seed for the random algorithm
    pub seed: Option<u64>,
}

impl ConvertProfile {
    /// Load a profile from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "Loaded profile");
        Ok(profile)
    }

    /// Layer `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: ConvertProfile) -> ConvertProfile {
        ConvertProfile {
            algorithm: overrides.algorithm.or(self.algorithm),
            fps: overrides.fps.or(self.fps),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            max_frames: overrides.max_frames.or(self.max_frames),
            start_time: overrides.start_time.or(self.start_time),
            end_time: overrides.end_time.or(self.end_time),
            invert: overrides.invert.or(self.invert),
            keep_black: overrides.keep_black.or(self.keep_black),
            exposure: overrides.exposure.or(self.exposure),
            min_value: overrides.min_value.or(self.min_value),
            max_value: overrides.max_value.or(self.max_value),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Effective frame rate.
    pub fn fps(&self) -> Result<u32, ConfigError> {
        match self.fps.unwrap_or(DEFAULT_FPS) {
            0 => Err(ConfigError::Invalid {
                field: "fps",
                message: "must be at least 1".to_string(),
            }),
            fps => Ok(fps),
        }
    }

    /// Effective output canvas.
    pub fn target(&self) -> DisplayTarget {
        let default = DisplayTarget::default();
        DisplayTarget::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        )
    }

    /// Effective algorithm.
    pub fn algorithm(&self) -> Result<DitherAlgorithm, ConfigError> {
        match &self.algorithm {
            None => Ok(DitherAlgorithm::default()),
            Some(name) => name.parse().map_err(|e: mono_dither::ParseAlgorithmError| {
                ConfigError::Invalid {
                    field: "algorithm",
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Effective tone settings.
    pub fn tone(&self) -> ToneOptions {
        ToneOptions::new()
            .range(self.min_value, self.max_value)
            .exposure(self.exposure.unwrap_or(0.0))
            .invert(self.invert.unwrap_or(false))
            .keep_black(self.keep_black.unwrap_or(false))
    }

    /// Build a converter from the effective settings.
    pub fn converter(&self) -> Result<FrameConverter, ConfigError> {
        if self.max_frames == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_frames",
                message: "must be at least 1".to_string(),
            });
        }

        let target = self.target();
        let mut converter = FrameConverter::new()
            .target_size(target.width, target.height)
            .algorithm(self.algorithm()?)
            .max_frames(self.max_frames)
            .time_window(self.start_time, self.end_time)
            .tone(self.tone());
        if let Some(seed) = self.seed {
            converter = converter.seed(seed);
        }
        Ok(converter)
    }
}
