/// Particle field tuning, page wiring, and timing constants.
///
/// These constants express intended behavior (e.g., force caps, wrap margins,
/// breakpoints) and keep magic numbers out of the simulation and DOM code.

// Neon palette shared by every particle and sprite
pub const NEON_COLORS: [&str; 5] = ["#ff48c4", "#2bd1fc", "#f3ea5f", "#6ded8a", "#c04df9"];

// Particle counts per viewport class
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const PARTICLES_NARROW: usize = 40;
pub const PARTICLES_WIDE: usize = 80;

// Seeding ranges (depth scales size and ambient rise for parallax)
pub const DEPTH_MIN: f32 = 0.3;
pub const DEPTH_SPAN: f32 = 0.7;
pub const BASE_SIZE_MIN: f32 = 4.0;
pub const BASE_SIZE_SPAN: f32 = 10.0;
pub const RISE_SPEED_MIN: f32 = 0.2;
pub const RISE_SPEED_SPAN: f32 = 0.6;
pub const OPACITY_MIN: f32 = 0.3;
pub const OPACITY_SPAN: f32 = 0.4;
pub const DRIFT_SPEED_MIN: f32 = 0.3;
pub const DRIFT_SPEED_SPAN: f32 = 0.7;

// Sinusoidal sway
pub const PHASE_STEP: f32 = 0.01; // radians per frame at drift_speed 1
pub const SWAY_ACCEL: f32 = 0.02; // px/frame² at sin(phase) = 1

// Pointer repulsion (CSS px)
pub const REPULSION_RADIUS: f32 = 120.0;
pub const REPULSION_GAIN: f32 = 8.0;
pub const REPULSION_MAX_FORCE: f32 = 4.0;
pub const REPULSION_MIN_DIST: f32 = 1.0; // below this the direction is unstable

// Per-frame velocity decay (perturbation only; ambient rise is re-applied)
pub const FRICTION: f32 = 0.98;

// Wrap margin as a multiple of particle size
pub const WRAP_MARGIN_SIZES: f32 = 3.0;

// Sprite geometry as multiples of the rounded particle size
pub const SPRITE_PAD_SIZES: f32 = 2.5;
pub const HALO_ALPHA: f64 = 0.35;
pub const HALO_BLUR_SIZES: f32 = 1.5;
pub const HALO_RADIUS_SIZES: f32 = 1.2;
pub const CORE_BLUR_SIZES: f32 = 0.6;
pub const CORE_RADIUS_SIZES: f32 = 0.5;

// Pointer position used when the pointer is outside the document
pub const POINTER_OFFSCREEN: f32 = -9999.0;

// Resize handling
pub const RESIZE_DEBOUNCE_MS: u64 = 200;

// Page wiring
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const RESUME_URL: &str = "data/resume.json";

// Reveal observers
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const POWERUP_THRESHOLD: f64 = 0.5;
pub const COUNTDOWN_THRESHOLD: f64 = 0.5;

// Countdown
pub const COUNTDOWN_START: u32 = 9;
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
