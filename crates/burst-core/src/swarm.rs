use rand::prelude::*;

use crate::clock::CycleClock;
use crate::config::{Canvas, MotionConfig};
use crate::constants::SEED_MIX;
use crate::error::MotionError;
use crate::params::{self, ImageIndex, ParticleParameters};
use crate::pose::{evaluate, Pose};

/// Stable per-particle key: insertion order at generation.
pub type ParticleKey = usize;

/// What the renderer needs for one particle in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFrame {
    pub key: ParticleKey,
    pub pose: Pose,
    pub color: [f32; 3],
    pub image: ImageIndex,
}

/// A fixed-size collection of particles sharing one config and one clock.
pub struct Swarm {
    config: MotionConfig,
    canvas: Canvas,
    cycle: CycleClock,
    particles: Vec<ParticleParameters>,
}

impl Swarm {
    pub fn new(config: MotionConfig, canvas: Canvas, seed: u64) -> Result<Self, MotionError> {
        config.validate()?;
        canvas.validate()?;
        let cycle = CycleClock::for_config(&config);
        let particles = spawn(&config, canvas, seed);
        log::debug!(
            "[swarm] generated {} particles, cycle={:.0}ms, canvas={}x{}, seed={}",
            particles.len(),
            cycle.period_ms,
            canvas.width,
            canvas.height,
            seed
        );
        Ok(Self {
            config,
            canvas,
            cycle,
            particles,
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Canvas size the particles were generated against.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn cycle(&self) -> CycleClock {
        self.cycle
    }

    pub fn particles(&self) -> &[ParticleParameters] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Image palette entry a particle refers to.
    pub fn image_name(&self, image: ImageIndex) -> Option<&str> {
        self.config.images.get(image).map(String::as_str)
    }

    /// Replaces every particle with a fresh draw from the same config and canvas.
    pub fn regenerate(&mut self, seed: u64) {
        self.particles = spawn(&self.config, self.canvas, seed);
        log::trace!("[swarm] regenerated with seed={}", seed);
    }

    pub fn evaluate(&self, looped_time: f32) -> Vec<ParticleFrame> {
        let mut out = Vec::with_capacity(self.particles.len());
        self.evaluate_into(looped_time, &mut out);
        out
    }

    /// Evaluates every particle into `out`, replacing its contents.
    pub fn evaluate_into(&self, looped_time: f32, out: &mut Vec<ParticleFrame>) {
        out.clear();
        out.extend(
            self.particles
                .iter()
                .enumerate()
                .map(|(key, p)| frame_for(key, p, looped_time)),
        );
    }

    /// Loops `raw_clock_ms` through this swarm's cycle, then evaluates.
    pub fn frame_at(&self, raw_clock_ms: f64) -> Vec<ParticleFrame> {
        self.evaluate(self.cycle.looped(raw_clock_ms))
    }

    #[cfg(feature = "parallel")]
    pub fn par_evaluate(&self, looped_time: f32) -> Vec<ParticleFrame> {
        use rayon::prelude::*;
        self.particles
            .par_iter()
            .enumerate()
            .map(|(key, p)| frame_for(key, p, looped_time))
            .collect()
    }
}

fn frame_for(key: ParticleKey, params: &ParticleParameters, looped_time: f32) -> ParticleFrame {
    ParticleFrame {
        key,
        pose: evaluate(params, looped_time),
        color: params.color,
        image: params.image,
    }
}

fn spawn(config: &MotionConfig, canvas: Canvas, seed: u64) -> Vec<ParticleParameters> {
    // Per-particle RNGs, so particle i does not depend on how many came before it
    (0..config.count)
        .map(|i| {
            let mix = seed ^ (i as u64).wrapping_mul(SEED_MIX);
            let mut rng = StdRng::seed_from_u64(mix);
            params::sample(config, canvas, &mut rng)
        })
        .collect()
}
