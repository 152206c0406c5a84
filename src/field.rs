// Particle store and per-frame physics for the neon background.
//
// Everything here is platform-free: positions are in CSS pixels, randomness
// comes from an owned `StdRng`, and the render side only reads particles.

use crate::constants::*;
use crate::sprite::SpriteKey;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];
}

/// A single floating particle.
///
/// `vel` only holds the sway and repulsion perturbation; the ambient upward
/// drift lives in `rise` and is added on every integration step so friction
/// can never stall a particle.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rise: f32,
    pub size: f32,
    pub depth: f32,
    pub color: &'static str,
    pub shape: Shape,
    pub opacity: f32,
    pub phase: f32,
    pub drift_speed: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, randomize_y: bool) -> Self {
        let depth = DEPTH_MIN + rng.gen::<f32>() * DEPTH_SPAN;
        let size = (BASE_SIZE_MIN + rng.gen::<f32>() * BASE_SIZE_SPAN) * depth;
        let x = rng.gen::<f32>() * width;
        let y = if randomize_y {
            rng.gen::<f32>() * height
        } else {
            height + size
        };
        let rise = -(RISE_SPEED_MIN + rng.gen::<f32>() * RISE_SPEED_SPAN) * depth;
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            rise,
            size,
            depth,
            color: NEON_COLORS[rng.gen_range(0..NEON_COLORS.len())],
            shape: Shape::ALL[rng.gen_range(0..Shape::ALL.len())],
            opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAN,
            phase: rng.gen::<f32>() * std::f32::consts::TAU,
            drift_speed: DRIFT_SPEED_MIN + rng.gen::<f32>() * DRIFT_SPEED_SPAN,
        }
    }

    /// Velocity applied on the next integration step.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel + Vec2::new(0.0, self.rise)
    }

    #[inline]
    pub fn wrap_margin(&self) -> f32 {
        self.size * WRAP_MARGIN_SIZES
    }

    #[inline]
    pub fn sprite_key(&self) -> SpriteKey {
        SpriteKey::new(self.shape, self.color, self.size)
    }
}

/// Repulsion magnitude at `distance` from the pointer.
///
/// Zero outside the radius and inside the minimum distance, otherwise an
/// inverse-square falloff capped at `REPULSION_MAX_FORCE`.
#[inline]
pub fn repulsion_force(distance: f32) -> f32 {
    if distance >= REPULSION_RADIUS || distance <= REPULSION_MIN_DIST {
        return 0.0;
    }
    (REPULSION_RADIUS / (distance * distance) * REPULSION_GAIN).min(REPULSION_MAX_FORCE)
}

/// Target particle count for a viewport width in CSS pixels.
#[inline]
pub fn target_count(viewport_width: f32) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        PARTICLES_NARROW
    } else {
        PARTICLES_WIDE
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    #[cfg(test)]
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(width: f32, height: f32, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Update the bounds used for seeding and wrapping. Existing particles
    /// outside the new bounds wrap on the next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Append `count` particles. With `randomize_y` the vertical start is
    /// uniform over the viewport, otherwise just below the bottom edge.
    pub fn create(&mut self, count: usize, randomize_y: bool) {
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, self.width, self.height, randomize_y);
            self.particles.push(p);
        }
    }

    /// Grow or shrink the store to exactly `target` particles.
    pub fn reconcile(&mut self, target: usize) {
        if self.particles.len() < target {
            self.create(target - self.particles.len(), true);
        } else {
            self.particles.truncate(target);
        }
    }

    /// Advance every particle by one frame. `pointer` is in the same CSS pixel
    /// space as the particles.
    pub fn update(&mut self, pointer: Vec2) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.phase += PHASE_STEP * p.drift_speed;
            p.vel.x += p.phase.sin() * SWAY_ACCEL;

            let away = p.pos - pointer;
            let dist = away.length();
            let force = repulsion_force(dist);
            if force > 0.0 {
                p.vel += away / dist * force;
            }

            p.vel *= FRICTION;
            p.pos += p.velocity();

            let margin = p.wrap_margin();
            if p.pos.y < -margin {
                p.pos.y = h + margin;
                p.pos.x = self.rng.gen::<f32>() * w;
            } else if p.pos.y > h + margin {
                p.pos.y = -margin;
                p.pos.x = self.rng.gen::<f32>() * w;
            }
            if p.pos.x < -margin {
                p.pos.x = w + margin;
            } else if p.pos.x > w + margin {
                p.pos.x = -margin;
            }
        }
    }
}
