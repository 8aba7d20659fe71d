//! Randomization ranges and palettes for a particle burst.

use rand::Rng;

use crate::constants::*;
use crate::error::MotionError;

/// Inclusive `[min, max]` sampling range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A range that always samples `value`.
    pub const fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform draw from `[min, max]`. Call [`Range::validate`] first.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn validate(&self, field: &'static str) -> Result<(), MotionError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(MotionError::invalid(field, "bounds must be finite"));
        }
        if self.min > self.max {
            return Err(MotionError::invalid(
                field,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        if !(self.max - self.min).is_finite() {
            return Err(MotionError::invalid(field, "range width overflows f32"));
        }
        Ok(())
    }
}

impl From<(f32, f32)> for Range {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// Canvas size reported by the host container, read once at generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(MotionError::invalid(
                "canvas",
                format!("size {}x{} must be positive", self.width, self.height),
            ));
        }
        Ok(())
    }
}

/// Process-wide motion settings. Immutable once handed to a swarm.
///
/// Positions are sampled as canvas fractions (`spawn_*`, `ascending_y_target`)
/// and scaled by the canvas size; everything else is in pixels, milliseconds
/// or degrees per second.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub count: usize,
    pub spawn_x: Range,
    pub spawn_y: Range,
    pub delay: Range,
    pub ascending_duration: Range,
    pub ascending_x_offset: Range,
    pub ascending_y_target: Range,
    pub hovering_duration: Range,
    pub hovering_amplitude: Range,
    pub descending_duration: Range,
    pub descending_speed_x: Range,
    pub descending_speed_y: Range,
    pub descending_random_factor: Range,
    pub rotation_velocity: Range,
    pub scale: Range,
    pub colors: Vec<[f32; 3]>,
    pub images: Vec<String>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            spawn_x: SPAWN_X_FRACTION.into(),
            spawn_y: SPAWN_Y_FRACTION.into(),
            delay: DELAY_MS.into(),
            ascending_duration: ASCENDING_DURATION_MS.into(),
            ascending_x_offset: ASCENDING_X_OFFSET.into(),
            ascending_y_target: ASCENDING_Y_TARGET_FRACTION.into(),
            hovering_duration: HOVERING_DURATION_MS.into(),
            hovering_amplitude: HOVERING_AMPLITUDE.into(),
            descending_duration: DESCENDING_DURATION_MS.into(),
            descending_speed_x: DESCENDING_SPEED_X.into(),
            descending_speed_y: DESCENDING_SPEED_Y.into(),
            descending_random_factor: DESCENDING_RANDOM_FACTOR.into(),
            rotation_velocity: ROTATION_VELOCITY_DEG_PER_SEC.into(),
            scale: SCALE.into(),
            colors: DEFAULT_COLORS.to_vec(),
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MotionConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_delay(mut self, delay: impl Into<Range>) -> Self {
        self.delay = delay.into();
        self
    }

    pub fn with_phase_durations(
        mut self,
        ascending: impl Into<Range>,
        hovering: impl Into<Range>,
        descending: impl Into<Range>,
    ) -> Self {
        self.ascending_duration = ascending.into();
        self.hovering_duration = hovering.into();
        self.descending_duration = descending.into();
        self
    }

    pub fn with_colors(mut self, colors: Vec<[f32; 3]>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_images<S: Into<String>>(mut self, images: impl IntoIterator<Item = S>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    fn ranges(&self) -> [(&'static str, Range); 14] {
        [
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("delay", self.delay),
            ("ascending_duration", self.ascending_duration),
            ("ascending_x_offset", self.ascending_x_offset),
            ("ascending_y_target", self.ascending_y_target),
            ("hovering_duration", self.hovering_duration),
            ("hovering_amplitude", self.hovering_amplitude),
            ("descending_duration", self.descending_duration),
            ("descending_speed_x", self.descending_speed_x),
            ("descending_speed_y", self.descending_speed_y),
            ("descending_random_factor", self.descending_random_factor),
            ("rotation_velocity", self.rotation_velocity),
            ("scale", self.scale),
        ]
    }

    /// Checks every range and palette. Nothing is substituted on failure.
    pub fn validate(&self) -> Result<(), MotionError> {
        for (field, range) in self.ranges() {
            range.validate(field)?;
        }
        for (field, range) in [
            ("delay", self.delay),
            ("ascending_duration", self.ascending_duration),
            ("hovering_duration", self.hovering_duration),
            ("descending_duration", self.descending_duration),
        ] {
            if range.min < 0.0 {
                return Err(MotionError::invalid(field, "durations cannot be negative"));
            }
        }
        if !self.total_cycle_duration().is_finite() {
            return Err(MotionError::invalid("cycle", "summed phase durations overflow f32"));
        }
        if self.count > 0 {
            if self.colors.is_empty() {
                return Err(MotionError::invalid("colors", "palette is empty"));
            }
            if self.images.is_empty() {
                return Err(MotionError::invalid("images", "palette is empty"));
            }
        }
        Ok(())
    }

    /// Length of one loop of the shared clock: the longest possible
    /// ascend + hover + descend, taken from the range upper bounds.
    pub fn total_cycle_duration(&self) -> f32 {
        self.ascending_duration.max + self.hovering_duration.max + self.descending_duration.max
    }
}
