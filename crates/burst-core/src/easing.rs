//! Easing and interpolation primitives.
//!
//! Free functions with no captured state. The easing curves take a normalized
//! time `x` in `[0, 1]` and return an eased value in the same range.

/// Symmetric acceleration/deceleration curve. Drives the ascend motion.
#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Fast start, slow settle. Drives the hover bob.
#[inline]
pub fn ease_out_quart(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(4)
}

/// Linearly maps `x` from `input` to `output`, clamping the normalized
/// position to `[0, 1]` first so the result always lies within `output`.
///
/// A collapsed input range acts as a step at `input[1]`. NaN maps to the
/// start of the output range.
#[inline]
pub fn clamped_lerp(x: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let [in_lo, in_hi] = input;
    let [out_lo, out_hi] = output;
    let span = in_hi - in_lo;
    let t = if span == 0.0 {
        if x >= in_hi {
            1.0
        } else {
            0.0
        }
    } else {
        let t = (x - in_lo) / span;
        if t.is_nan() {
            0.0
        } else {
            t.clamp(0.0, 1.0)
        }
    };
    out_lo + (out_hi - out_lo) * t
}

/// Completion fraction of a phase window starting at `start` and lasting
/// `duration` ms, observed at `time`.
///
/// Saturates at 1 rather than wrapping. A zero-length phase completes the
/// instant its window opens.
#[inline]
pub fn phase_fraction(time: f32, start: f32, duration: f32) -> f32 {
    if time.is_nan() || time < start {
        return 0.0;
    }
    if duration <= 0.0 {
        return 1.0;
    }
    ((time - start) / duration).clamp(0.0, 1.0)
}
