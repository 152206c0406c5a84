// Host-side tests for the particle store and per-frame physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sprite {
    include!("../src/sprite.rs");
}
mod field {
    include!("../src/field.rs");
}

use constants::*;
use field::*;
use glam::Vec2;

const W: f32 = 1024.0;
const H: f32 = 768.0;

fn offscreen() -> Vec2 {
    Vec2::splat(POINTER_OFFSCREEN)
}

#[test]
fn initial_seed_covers_viewport_and_rises() {
    let mut field = ParticleField::new(W, H, 7);
    field.create(80, true);
    assert_eq!(field.len(), 80);

    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < W);
        assert!(p.pos.y >= 0.0 && p.pos.y < H);
        assert!(p.velocity().y < 0.0, "initial vertical velocity must be upward");
        assert!(p.depth >= 0.3 && p.depth <= 1.0);
        assert!(p.opacity >= 0.3 && p.opacity <= 0.7);
        assert!(p.drift_speed >= 0.3 && p.drift_speed <= 1.0);
        assert!(p.size >= BASE_SIZE_MIN * DEPTH_MIN && p.size <= 14.0);
        assert!(NEON_COLORS.contains(&p.color));
    }
}

#[test]
fn closer_particles_rise_faster_on_average() {
    let mut field = ParticleField::new(W, H, 11);
    field.create(400, true);
    let (near, far): (Vec<&Particle>, Vec<&Particle>) =
        field.particles().iter().partition(|p| p.depth > 0.8);
    assert!(!near.is_empty() && !far.is_empty());
    assert!(mean_rise(near.as_slice()) > mean_rise(far.as_slice()));
}

fn mean_rise(ps: &[&Particle]) -> f32 {
    ps.iter().map(|p| -p.rise).sum::<f32>() / ps.len() as f32
}

#[test]
fn steady_state_spawn_starts_below_bottom_edge() {
    let mut field = ParticleField::new(W, H, 3);
    field.create(10, false);
    for p in field.particles() {
        assert_eq!(p.pos.y, H + p.size);
    }
}

#[test]
fn same_seed_same_field() {
    let mut a = ParticleField::new(W, H, 42);
    let mut b = ParticleField::new(W, H, 42);
    a.create(20, true);
    b.create(20, true);
    for _ in 0..50 {
        a.update(Vec2::new(300.0, 200.0));
        b.update(Vec2::new(300.0, 200.0));
    }
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.sprite_key(), pb.sprite_key());
    }
}

#[test]
fn reconcile_matches_target_for_width() {
    assert_eq!(target_count(375.0), PARTICLES_NARROW);
    assert_eq!(target_count(767.9), PARTICLES_NARROW);
    assert_eq!(target_count(768.0), PARTICLES_WIDE);
    assert_eq!(target_count(1920.0), PARTICLES_WIDE);

    let mut field = ParticleField::new(W, H, 5);
    field.create(target_count(W), true);
    assert_eq!(field.len(), 80);

    field.resize(600.0, 900.0);
    field.reconcile(target_count(600.0));
    assert_eq!(field.len(), 40);

    field.resize(1280.0, 800.0);
    field.reconcile(target_count(1280.0));
    assert_eq!(field.len(), 80);

    // from an arbitrary prior count
    let mut odd = ParticleField::new(W, H, 6);
    odd.create(3, true);
    odd.reconcile(target_count(W));
    assert_eq!(odd.len(), 80);
    odd.create(57, true);
    odd.reconcile(target_count(500.0));
    assert_eq!(odd.len(), 40);
}

#[test]
fn reconcile_shrinks_from_the_end() {
    let mut field = ParticleField::new(W, H, 9);
    field.create(80, true);
    let head: Vec<Vec2> = field.particles()[..40].iter().map(|p| p.pos).collect();
    field.reconcile(40);
    let kept: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(head, kept);
}

#[test]
fn positions_stay_within_wrap_margins() {
    let mut field = ParticleField::new(W, H, 1234);
    field.create(80, true);
    for i in 0..5000u32 {
        // sweep the pointer across the viewport, with off-screen stretches
        let pointer = if i % 500 < 50 {
            offscreen()
        } else {
            Vec2::new((i * 37 % W as u32) as f32, (i * 53 % H as u32) as f32)
        };
        field.update(pointer);
        for p in field.particles() {
            let m = p.wrap_margin() + 1e-3;
            assert!(p.pos.x >= -m && p.pos.x <= W + m, "x escaped: {:?}", p.pos);
            assert!(p.pos.y >= -m && p.pos.y <= H + m, "y escaped: {:?}", p.pos);
        }
    }
}

#[test]
fn particles_outside_shrunk_viewport_wrap_back() {
    let mut field = ParticleField::new(W, H, 77);
    field.create(40, true);
    field.resize(320.0, 480.0);
    field.update(offscreen());
    for p in field.particles() {
        let m = p.wrap_margin() + 1e-3;
        assert!(p.pos.x >= -m && p.pos.x <= 320.0 + m);
        assert!(p.pos.y >= -m && p.pos.y <= 480.0 + m);
    }
}

#[test]
fn vertical_exit_wraps_to_opposite_edge() {
    let mut field = ParticleField::new(W, H, 2);
    field.create(1, true);
    {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(500.0, -p.wrap_margin() + 0.01);
        p.vel = Vec2::ZERO;
    }
    field.update(offscreen());
    let p = &field.particles()[0];
    assert_eq!(p.pos.y, H + p.wrap_margin());
    assert!(p.pos.x >= 0.0 && p.pos.x <= W);
}

#[test]
fn horizontal_exit_wraps_to_opposite_edge() {
    let mut field = ParticleField::new(W, H, 2);
    field.create(1, true);
    {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(W + p.wrap_margin() - 0.01, H * 0.5);
        p.vel = Vec2::new(5.0, 0.0);
    }
    field.update(offscreen());
    let p = &field.particles()[0];
    assert_eq!(p.pos.x, -p.wrap_margin());
    assert!(p.pos.y > 0.0 && p.pos.y < H);
}

#[test]
fn repulsion_is_zero_outside_radius_and_at_epsilon() {
    assert_eq!(repulsion_force(REPULSION_RADIUS), 0.0);
    assert_eq!(repulsion_force(REPULSION_RADIUS + 50.0), 0.0);
    assert_eq!(repulsion_force(1.0e6), 0.0);
    assert_eq!(repulsion_force(REPULSION_MIN_DIST), 0.0);
    assert_eq!(repulsion_force(0.0), 0.0);
}

#[test]
fn repulsion_grows_toward_pointer_and_caps() {
    let samples = [110.0, 90.0, 60.0, 40.0, 25.0, 18.0];
    for pair in samples.windows(2) {
        assert!(
            repulsion_force(pair[1]) > repulsion_force(pair[0]),
            "force at {} should exceed force at {}",
            pair[1],
            pair[0]
        );
    }
    for d in [15.0, 10.0, 5.0, 2.0, 1.01] {
        assert_eq!(repulsion_force(d), REPULSION_MAX_FORCE);
    }
    for d in 2..120 {
        assert!(repulsion_force(d as f32) <= REPULSION_MAX_FORCE);
    }
}

#[test]
fn pointer_pushes_particle_away() {
    let mut field = ParticleField::new(W, H, 8);
    field.create(1, true);
    {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(400.0, 400.0);
        p.vel = Vec2::ZERO;
    }
    field.update(Vec2::new(390.0, 400.0));
    let p = &field.particles()[0];
    assert!(p.vel.x > 3.0, "expected strong push to +x, got {:?}", p.vel);
    assert!(p.pos.x > 403.0);
}

#[test]
fn far_pointer_has_no_effect() {
    let mut a = ParticleField::new(W, H, 10);
    let mut b = ParticleField::new(W, H, 10);
    a.create(30, true);
    b.create(30, true);
    for _ in 0..20 {
        a.update(offscreen());
        b.update(Vec2::new(-5000.0, 9000.0));
    }
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
    }
}

#[test]
fn friction_decays_perturbation_but_not_ambient_rise() {
    let mut field = ParticleField::new(W, H, 21);
    field.create(1, true);
    let rise = {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(W * 0.5, H * 0.5);
        p.vel = Vec2::new(6.0, 6.0);
        p.rise
    };

    let mut prev = field.particles()[0].vel.length();
    while prev > 1.0 {
        field.update(offscreen());
        let now = field.particles()[0].vel.length();
        assert!(now < prev, "perturbation grew: {} -> {}", prev, now);
        prev = now;
    }

    for _ in 0..1000 {
        field.update(offscreen());
    }
    let p = &field.particles()[0];
    assert!(p.vel.y.abs() < 1e-3, "vertical perturbation should decay, got {}", p.vel.y);
    assert_eq!(p.rise, rise);
    assert!(p.velocity().y < 0.0, "ambient rise must persist");
}

#[test]
fn particles_keep_rising_without_input() {
    let mut field = ParticleField::new(W, H, 31);
    field.create(1, true);
    {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(W * 0.5, H * 0.5);
    }
    let y0 = field.particles()[0].pos.y;
    for _ in 0..100 {
        field.update(offscreen());
    }
    assert!(field.particles()[0].pos.y < y0);
}

#[test]
fn sway_moves_horizontally() {
    let mut field = ParticleField::new(W, H, 41);
    field.create(1, true);
    {
        let p = &mut field.particles_mut()[0];
        p.pos = Vec2::new(W * 0.5, H * 0.5);
        p.phase = std::f32::consts::FRAC_PI_2;
        p.vel = Vec2::ZERO;
    }
    field.update(offscreen());
    assert!(field.particles()[0].vel.x > 0.0);
}
