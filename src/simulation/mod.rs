//! Headless particle simulation built on the sequence contract.
//!
//! A star sits at position 0 of a [`Sequence`](crate::sequence::Sequence);
//! comets are appended as they spawn at the edges of the region. Each tick
//! moves every body in place, prunes escaped comets scanning from the back,
//! then maybe spawns a new comet. Which sequence strategy holds the bodies is
//! decided by the `list` configuration key.
//!
//! - [`Properties`]: `.properties` file reader
//! - [`MotionConfig`]: validated configuration with defaults
//! - [`Body`]: a star or comet
//! - [`Simulation`]: the tick loop

mod body;
mod config;
mod engine;
mod properties;

pub use body::{Body, BodyRole};
pub use config::{ConfigError, MotionConfig, StarConfig};
pub use engine::{RunSummary, Simulation, TickReport};
pub use properties::Properties;
