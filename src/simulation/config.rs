//! Simulation configuration.
//!
//! Values come from a properties file (see [`Properties`]). Every key is
//! optional; a missing key takes its default, while a present key with an
//! unparsable value is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use super::Properties;
use crate::sequence::SequenceKind;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while loading or validating a [`MotionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The properties file could not be read.
    #[error("failed to read configuration from {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A key is present but its value does not parse.
    #[error("invalid value for {key}: {message} (got '{value}')")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// The raw value.
        value: String,
        /// Parser message.
        message: String,
    },

    /// A spawn probability lies outside `0.0..=1.0`.
    #[error("invalid {key}: must be 0.0-1.0, got {value}")]
    InvalidProbability {
        /// `gen_x` or `gen_y`.
        key: &'static str,
        /// The rejected probability.
        value: f64,
    },

    /// `body_velocity` must be at least 1.
    #[error("invalid body_velocity: must be at least 1, got {0}")]
    InvalidVelocity(u32),
}

// =============================================================================
// MotionConfig
// =============================================================================

/// The central star's initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarConfig {
    /// Initial x coordinate.
    pub x: f64,
    /// Initial y coordinate.
    pub y: f64,
    /// Horizontal velocity per tick.
    pub velocity_x: f64,
    /// Vertical velocity per tick.
    pub velocity_y: f64,
    /// Diameter in pixels.
    pub size: u32,
}

/// Everything the simulation reads from its configuration file.
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::SequenceKind;
/// use massive_motion::simulation::{MotionConfig, Properties};
///
/// let properties = Properties::parse("list=double\nwindow_size_x=200\n");
/// let config = MotionConfig::from_properties(&properties).unwrap();
/// assert_eq!(config.list, SequenceKind::Double);
/// assert_eq!(config.window_width, 200);
/// assert_eq!(config.star.x, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Pause between ticks when running in real time.
    pub timer_delay: Duration,
    /// Width of the bounded region.
    pub window_width: u32,
    /// Height of the bounded region.
    pub window_height: u32,
    /// Spawn probability tested first each tick.
    pub gen_x: f64,
    /// Spawn probability tested when the first test fails.
    pub gen_y: f64,
    /// Diameter of spawned comets.
    pub body_size: u32,
    /// Maximum speed component of spawned comets.
    pub body_velocity: u32,
    /// Sequence strategy holding the bodies.
    pub list: SequenceKind,
    /// The central star.
    ///
    /// Its default position is the centre of the default region. Changing
    /// the region with struct update syntax leaves the star where it was;
    /// use [`with_window`](Self::with_window) to move it along.
    pub star: StarConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let window_width = 1024;
        let window_height = 768;
        Self {
            timer_delay: Duration::from_millis(75),
            window_width,
            window_height,
            gen_x: 0.06,
            gen_y: 0.06,
            body_size: 10,
            body_velocity: 3,
            list: SequenceKind::ArrayList,
            star: StarConfig {
                x: f64::from(window_width) / 2.0,
                y: f64::from(window_height) / 2.0,
                velocity_x: 0.0,
                velocity_y: 0.0,
                size: 30,
            },
        }
    }
}

impl MotionConfig {
    /// Builds and validates a configuration from parsed properties.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable values and the
    /// validation errors of [`validate`](Self::validate).
    pub fn from_properties(properties: &Properties) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let window_width = properties.get_or("window_size_x", defaults.window_width)?;
        let window_height = properties.get_or("window_size_y", defaults.window_height)?;
        let delay_millis = properties.get_or("timer_delay", 75_u64)?;

        let config = Self {
            timer_delay: Duration::from_millis(delay_millis),
            window_width,
            window_height,
            gen_x: properties.get_or("gen_x", defaults.gen_x)?,
            gen_y: properties.get_or("gen_y", defaults.gen_y)?,
            body_size: properties.get_or("body_size", defaults.body_size)?,
            body_velocity: properties.get_or("body_velocity", defaults.body_velocity)?,
            list: properties
                .get("list")
                .map_or(defaults.list, SequenceKind::from_config),
            star: StarConfig {
                x: properties.get_or("star_position_x", f64::from(window_width) / 2.0)?,
                y: properties.get_or("star_position_y", f64::from(window_height) / 2.0)?,
                velocity_x: properties.get_or("star_velocity_x", defaults.star.velocity_x)?,
                velocity_y: properties.get_or("star_velocity_y", defaults.star.velocity_y)?,
                size: properties.get_or("star_size", defaults.star.size)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration file at `path`.
    ///
    /// An unreadable file is not an error: the defaults are used and a
    /// warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is readable but holds an invalid value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Properties::load(path) {
            Ok(properties) => {
                tracing::info!(path = %path.display(), entries = properties.len(), "loaded configuration");
                Self::from_properties(&properties)
            }
            Err(error) => {
                tracing::warn!(%error, "using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Resizes the region to `width` x `height` and re-centres the star.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use massive_motion::simulation::MotionConfig;
    ///
    /// let config = MotionConfig::default().with_window(120, 80);
    /// assert_eq!((config.star.x, config.star.y), (60.0, 40.0));
    /// ```
    #[must_use]
    pub fn with_window(self, width: u32, height: u32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            star: StarConfig {
                x: f64::from(width) / 2.0,
                y: f64::from(height) / 2.0,
                ..self.star
            },
            ..self
        }
    }

    /// Validates value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `gen_x` or `gen_y` is not in range `0.0..=1.0`
    /// - `body_velocity` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("gen_x", self.gen_x), ("gen_y", self.gen_y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { key, value });
            }
        }
        if self.body_velocity == 0 {
            return Err(ConfigError::InvalidVelocity(self.body_velocity));
        }
        Ok(())
    }
}
