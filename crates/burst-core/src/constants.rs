// Default tuning values for the motion model. All times are milliseconds,
// all distances are canvas pixels unless noted otherwise.

// Swarm size
pub const DEFAULT_COUNT: usize = 50;

// Spawn position, as fractions of canvas width/height
pub const SPAWN_X_FRACTION: (f32, f32) = (0.4, 0.6);
pub const SPAWN_Y_FRACTION: (f32, f32) = (0.5, 0.5);

// Ascend phase
pub const ASCENDING_DURATION_MS: (f32, f32) = (500.0, 600.0);
pub const ASCENDING_X_OFFSET: (f32, f32) = (-200.0, 200.0);
pub const ASCENDING_Y_TARGET_FRACTION: (f32, f32) = (0.1, 0.3); // apex height as fraction of canvas height

// Hover phase
pub const HOVERING_DURATION_MS: (f32, f32) = (200.0, 200.0);
pub const HOVERING_AMPLITUDE: (f32, f32) = (10.0, 30.0);

// Descend phase
pub const DESCENDING_DURATION_MS: (f32, f32) = (2000.0, 6000.0);
pub const DESCENDING_SPEED_X: (f32, f32) = (-0.05, 0.05); // px per ms
pub const DESCENDING_SPEED_Y: (f32, f32) = (0.1, 0.3); // px per ms, positive is down
pub const DESCENDING_RANDOM_FACTOR: (f32, f32) = (0.0, 1.0);

// Appearance
pub const ROTATION_VELOCITY_DEG_PER_SEC: (f32, f32) = (-180.0, 180.0);
pub const SCALE: (f32, f32) = (0.6, 1.2);
pub const DELAY_MS: (f32, f32) = (0.0, 0.0);

// Fade windows, as completion fractions of their phase
pub const ASCEND_FADE_IN: [f32; 2] = [0.3, 0.8];
pub const DESCEND_FADE_OUT: [f32; 2] = [0.8, 1.0];

// Hover amplitude damping over the last fifth of the hover phase
pub const HOVER_DAMP_WINDOW: [f32; 2] = [0.8, 1.0];
pub const HOVER_DAMP_RANGE: [f32; 2] = [1.0, 0.7];

// Descent speed ramp over the first second of descent
pub const DESCEND_RAMP_MS: [f32; 2] = [0.0, 1000.0];
pub const DESCEND_RAMP_FACTOR: [f32; 2] = [0.7, 1.0];
pub const DESCEND_WOBBLE_RADIUS: f32 = 10.0; // px

// Default palette: five warm confetti colors and four image slots
pub const DEFAULT_COLORS: [[f32; 3]; 5] = [
    [1.0, 0.37, 0.49], // pink
    [1.0, 0.78, 0.37], // amber
    [0.45, 0.85, 0.55], // mint
    [0.37, 0.62, 1.0], // sky
    [0.72, 0.5, 1.0], // lilac
];

pub const DEFAULT_IMAGES: [&str; 4] = ["heart", "star", "sparkle", "circle"];

// Seed mixing constant used to derive per-particle RNGs from one base seed
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
