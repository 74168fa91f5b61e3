//! # massive-motion
//!
//! Interchangeable sequence containers and the headless particle simulation
//! that drives them.
//!
//! ## Overview
//!
//! - **Sequences**: one [`Sequence`](sequence::Sequence) contract with four
//!   storage strategies (growable array, singly linked, doubly linked,
//!   dummy-head linked), selected at runtime by
//!   [`SequenceKind`](sequence::SequenceKind)
//! - **Simulation**: comets drifting across a bounded region around a central
//!   star, stored in whichever sequence the configuration names
//!
//! ## Feature Flags
//!
//! - `simulation`: the simulation client and its properties-file configuration
//! - `cli`: the `massive-motion` binary
//!
//! ## Example
//!
//! ```rust
//! use massive_motion::prelude::*;
//!
//! let mut bodies = SequenceKind::from_config("dummyhead").build::<u32>();
//! bodies.append(1);
//! bodies.append(2);
//! assert_eq!(bodies.get(1), Ok(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use massive_motion::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "simulation")]
    pub use crate::simulation::*;
}

pub mod sequence;

#[cfg(feature = "simulation")]
pub mod simulation;
