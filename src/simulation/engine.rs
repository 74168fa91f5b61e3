//! The tick loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Body, BodyRole, ConfigError, MotionConfig};
use crate::sequence::Sequence;

/// What one call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based number of this tick.
    pub tick: u64,
    /// Bodies advanced.
    pub moved: usize,
    /// Bodies removed for leaving the region.
    pub pruned: usize,
    /// Whether a comet was spawned.
    pub spawned: bool,
    /// Bodies alive after the tick, star included.
    pub population: usize,
}

/// Totals over a run of ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed.
    pub ticks: u64,
    /// Comets spawned.
    pub spawned: usize,
    /// Bodies pruned.
    pub pruned: usize,
    /// Bodies alive at the end.
    pub population: usize,
}

/// Comets drifting across a bounded region around a central star.
///
/// The bodies are held in the [`Sequence`] named by
/// [`MotionConfig::list`]; the simulation only talks to it through the
/// sequence contract.
///
/// # Examples
///
/// ```rust
/// use massive_motion::simulation::{MotionConfig, Simulation};
///
/// let mut simulation = Simulation::seeded(MotionConfig::default(), 7).unwrap();
/// let summary = simulation.run(50);
/// assert_eq!(summary.ticks, 50);
/// assert_eq!(simulation.bodies().size(), summary.population);
/// ```
pub struct Simulation<R = StdRng> {
    config: MotionConfig,
    bodies: Box<dyn Sequence<Body>>,
    rng: R,
    ticks: u64,
}

impl Simulation<StdRng> {
    /// Creates a simulation with a reproducible random stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn seeded(config: MotionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a simulation seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_os_rng(config: MotionConfig) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Simulation<R> {
    /// Creates a simulation holding only the star.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: MotionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut bodies = config.list.build();
        bodies.append(Body {
            x: config.star.x,
            y: config.star.y,
            velocity_x: config.star.velocity_x,
            velocity_y: config.star.velocity_y,
            size: config.star.size,
            role: BodyRole::Star,
        });
        tracing::debug!(list = %config.list, "simulation initialised");
        Ok(Self {
            config,
            bodies,
            rng,
            ticks: 0,
        })
    }

    /// Returns the bodies, star first.
    #[must_use]
    pub fn bodies(&self) -> &dyn Sequence<Body> {
        self.bodies.as_ref()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns the number of ticks executed so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every body, prunes those that left the region and maybe
    /// spawns one comet.
    pub fn tick(&mut self) -> TickReport {
        let mut moved = 0;
        for body in self.bodies.iter_mut() {
            body.advance();
            moved += 1;
        }
        let pruned = self.prune();
        let spawned = self.maybe_spawn();
        self.ticks += 1;

        let report = TickReport {
            tick: self.ticks,
            moved,
            pruned,
            spawned,
            population: self.bodies.size(),
        };
        tracing::trace!(?report, "tick");
        report
    }

    /// Runs `ticks` ticks and returns the totals.
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        let mut summary = RunSummary {
            population: self.bodies.size(),
            ..RunSummary::default()
        };
        for _ in 0..ticks {
            let report = self.tick();
            summary.ticks += 1;
            summary.pruned += report.pruned;
            summary.spawned += usize::from(report.spawned);
            summary.population = report.population;
        }
        summary
    }

    /// Scans from the last body down to position 1, so every removal only
    /// shifts positions that were already visited. The star is never pruned.
    fn prune(&mut self) -> usize {
        let (width, height) = (self.config.window_width, self.config.window_height);
        let mut pruned = 0;
        for position in (1..self.bodies.size()).rev() {
            let Ok(index) = isize::try_from(position) else {
                continue;
            };
            let outside = self
                .bodies
                .get(index)
                .is_ok_and(|body| body.is_outside(width, height));
            if outside && self.bodies.remove(index).is_ok() {
                pruned += 1;
            }
        }
        pruned
    }

    fn maybe_spawn(&mut self) -> bool {
        let triggered = self.rng.random::<f64>() < self.config.gen_x
            || self.rng.random::<f64>() < self.config.gen_y;
        if triggered {
            let comet = self.comet_at_edge();
            self.bodies.append(comet);
        }
        triggered
    }

    /// Places a comet on a random edge, heading into the region.
    fn comet_at_edge(&mut self) -> Body {
        let width = f64::from(self.config.window_width);
        let height = f64::from(self.config.window_height);
        let limit = i64::from(self.config.body_velocity);

        let horizontal_edge = self.rng.random_bool(0.5);
        let (along, across_edge) = if horizontal_edge {
            (width, height)
        } else {
            (height, width)
        };
        let offset = self.rng.random::<f64>() * along;
        let (edge, inward) = if self.rng.random_bool(0.5) {
            (0.0, self.rng.random_range(1..=limit))
        } else {
            (across_edge, -self.rng.random_range(1..=limit))
        };
        let sideways = match self.rng.random_range(-limit..=limit) {
            0 => 1,
            speed => speed,
        };

        #[allow(clippy::cast_precision_loss)]
        let (inward, sideways) = (inward as f64, sideways as f64);
        let (x, y, velocity_x, velocity_y) = if horizontal_edge {
            (offset, edge, sideways, inward)
        } else {
            (edge, offset, inward, sideways)
        };
        Body {
            x,
            y,
            velocity_x,
            velocity_y,
            size: self.config.body_size,
            role: BodyRole::Comet,
        }
    }
}
