//! Stateless particle burst motion.
//!
//! A [`MotionConfig`] is sampled once per particle into immutable
//! [`ParticleParameters`]; every frame the host loops its clock through a
//! [`CycleClock`] and asks [`evaluate`] for each particle's [`Pose`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod instance;
pub mod params;
pub mod pose;
pub mod swarm;

pub use clock::*;
pub use config::*;
pub use easing::*;
pub use error::*;
pub use instance::*;
pub use params::*;
pub use pose::*;
pub use swarm::*;
