//! Pose evaluation: the three-phase ascend → hover → descend motion model.
//!
//! Each phase contributes additively to the particle's position, so the path
//! stays continuous across phase boundaries. Evaluation is a pure function of
//! `(params, looped_time)`; nothing is carried between frames.

use std::f32::consts::{PI, TAU};

use glam::{Affine2, Vec2};

use crate::constants::*;
use crate::easing::{clamped_lerp, ease_in_out_cubic, ease_out_quart, phase_fraction};
use crate::params::ParticleParameters;

/// Renderable transform and opacity of one particle at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_radians: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Pose {
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Scale, then rotate, then translate.
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            Vec2::splat(self.scale),
            self.rotate_radians,
            self.translation(),
        )
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Which window of its timeline a particle is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Waiting,
    Ascending,
    Hovering,
    Descending,
    Finished,
}

impl ParticleParameters {
    pub fn phase_at(&self, looped_time: f32) -> Phase {
        if looped_time < self.delay {
            Phase::Waiting
        } else if looped_time < self.hover_start() {
            Phase::Ascending
        } else if looped_time < self.descend_start() {
            Phase::Hovering
        } else if looped_time < self.end() {
            Phase::Descending
        } else {
            Phase::Finished
        }
    }
}

/// Computes the pose of `params` at `looped_time` (ms into the current cycle).
pub fn evaluate(params: &ParticleParameters, looped_time: f32) -> Pose {
    let t = looped_time;

    // Ascend: eased travel from the spawn point toward the apex, fading in.
    let ascend_frac = phase_fraction(t, params.delay, params.ascending_duration);
    let ascend_ease = ease_in_out_cubic(ascend_frac);
    let ascend_x = params.start_x + ascend_ease * params.ascending_x_offset;
    let ascend_y = params.start_y + ascend_ease * (params.ascending_y_target - params.start_y);
    let ascend_opacity = clamped_lerp(ascend_frac, ASCEND_FADE_IN, [0.0, 1.0]);

    // Hover: upward bob whose amplitude is damped near the end of the window.
    let hover_start = params.hover_start();
    let hover_frac = phase_fraction(t, hover_start, params.hovering_duration);
    let hover_y = -params.hovering_amplitude
        * ease_out_quart(hover_frac)
        * clamped_lerp(hover_frac, HOVER_DAMP_WINDOW, HOVER_DAMP_RANGE);

    // Descend: drift with a ramped fall speed and a circular wobble, fading out.
    let descend_start = params.descend_start();
    let descend_elapsed = elapsed_in(t, descend_start, params.descending_duration);
    let descend_frac = phase_fraction(t, descend_start, params.descending_duration);
    let speed_factor = clamped_lerp(descend_elapsed, DESCEND_RAMP_MS, DESCEND_RAMP_FACTOR);
    let factor = params.descending_random_factor;
    let angle = factor + (descend_elapsed / 1000.0) * TAU * factor;
    let descend_x =
        descend_elapsed * params.descending_speed_x + angle.sin() * DESCEND_WOBBLE_RADIUS;
    let descend_y = descend_elapsed * speed_factor * params.descending_speed_y
        + angle.cos() * DESCEND_WOBBLE_RADIUS;
    let descend_opacity = clamped_lerp(descend_frac, DESCEND_FADE_OUT, [1.0, 0.0]);

    // Rotation is driven by time since the hover window opened, through descent.
    let spin_elapsed = elapsed_in(
        t,
        hover_start,
        params.hovering_duration + params.descending_duration,
    );
    let rotate_radians = (spin_elapsed / 1000.0) * params.rotation_velocity * PI / 180.0;

    Pose {
        translate_x: ascend_x + descend_x,
        translate_y: ascend_y + hover_y + descend_y,
        rotate_radians,
        scale: params.scale,
        opacity: ascend_opacity * descend_opacity,
    }
}

// Time spent inside a window, held at its length once the window closes.
fn elapsed_in(t: f32, start: f32, length: f32) -> f32 {
    (t - start).max(0.0).min(length.max(0.0))
}
