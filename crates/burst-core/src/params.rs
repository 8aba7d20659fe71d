//! Per-particle randomized motion parameters.

use rand::Rng;

use crate::config::{Canvas, MotionConfig};
use crate::error::MotionError;

/// Index into [`MotionConfig::images`].
pub type ImageIndex = usize;

/// Immutable motion parameters for one particle, drawn once at spawn.
///
/// Positions are in canvas pixels, durations in ms, speeds in px/ms and the
/// rotation velocity in degrees per second. `image` indexes the config's
/// image palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParameters {
    pub delay: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub ascending_duration: f32,
    pub ascending_x_offset: f32,
    pub ascending_y_target: f32,
    pub hovering_duration: f32,
    pub hovering_amplitude: f32,
    pub descending_duration: f32,
    pub descending_speed_x: f32,
    pub descending_speed_y: f32,
    pub descending_random_factor: f32,
    pub rotation_velocity: f32,
    pub scale: f32,
    pub color: [f32; 3],
    pub image: ImageIndex,
}

impl ParticleParameters {
    /// Start of the hover window relative to the looped clock.
    pub fn hover_start(&self) -> f32 {
        self.delay + self.ascending_duration
    }

    /// Start of the descend window relative to the looped clock.
    pub fn descend_start(&self) -> f32 {
        self.hover_start() + self.hovering_duration
    }

    /// Time at which this particle has fully faded out.
    pub fn end(&self) -> f32 {
        self.descend_start() + self.descending_duration
    }
}

/// Draws one particle's parameters from `config`.
///
/// Call once per particle at creation, never per frame.
pub fn generate<R: Rng + ?Sized>(
    config: &MotionConfig,
    canvas: Canvas,
    rng: &mut R,
) -> Result<ParticleParameters, MotionError> {
    config.validate()?;
    canvas.validate()?;
    if config.colors.is_empty() || config.images.is_empty() {
        return Err(MotionError::invalid(
            "palette",
            "cannot pick from an empty palette",
        ));
    }
    Ok(sample(config, canvas, rng))
}

/// Sampling without validation; `config` and `canvas` must already be checked
/// and both palettes non-empty.
pub(crate) fn sample<R: Rng + ?Sized>(
    config: &MotionConfig,
    canvas: Canvas,
    rng: &mut R,
) -> ParticleParameters {
    let start_x = config.spawn_x.sample(rng) * canvas.width;
    let start_y = config.spawn_y.sample(rng) * canvas.height;
    let color = config.colors[rng.gen_range(0..config.colors.len())];
    let image = rng.gen_range(0..config.images.len());
    ParticleParameters {
        delay: config.delay.sample(rng),
        start_x,
        start_y,
        ascending_duration: config.ascending_duration.sample(rng),
        ascending_x_offset: config.ascending_x_offset.sample(rng),
        ascending_y_target: config.ascending_y_target.sample(rng) * canvas.height,
        hovering_duration: config.hovering_duration.sample(rng),
        hovering_amplitude: config.hovering_amplitude.sample(rng),
        descending_duration: config.descending_duration.sample(rng),
        descending_speed_x: config.descending_speed_x.sample(rng),
        descending_speed_y: config.descending_speed_y.sample(rng),
        descending_random_factor: config.descending_random_factor.sample(rng),
        rotation_velocity: config.rotation_velocity.sample(rng),
        scale: config.scale.sample(rng),
        color,
        image,
    }
}
