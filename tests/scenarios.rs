//! End-to-end frame scenarios through the public `Storm` API.

use glam::{Vec2, Vec3};
use storm_engine::config::{RainConfig, RippleConfig, StormConfig};
use storm_engine::sim::RipplePool;
use storm_engine::world::Footprint;
use storm_engine::{RandomSource, Storm};

/// Every draw lands at the same fraction of its range.
struct Fixed(f32);

impl RandomSource for Fixed {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.0
    }
}

#[test]
fn single_slot_pool_lifecycle() {
    let mut pool = RipplePool::new(&RippleConfig {
        capacity: 1,
        duration: (2.0, 2.0),
        ..RippleConfig::default()
    });
    let mut rng = Fixed(0.0); // strength 0.15, radius 3, wavelength 0.5

    let center = Vec2::new(2.0, -1.0);
    assert_eq!(pool.spawn(center, 0.0, &mut rng), Some(0));

    // Front at r = 1.5 after one second; sample a quarter wavelength out.
    let h = pool.height_at(center + Vec2::new(1.625, 0.0), 1.0);
    assert!(h.abs() > 0.0);

    // Pool full: the second impact gets no ripple.
    assert_eq!(pool.spawn(Vec2::ZERO, 0.5, &mut rng), None);
    assert_eq!(pool.active_count(), 1);

    // Past its duration the ripple contributes nothing and lets go of the slot.
    assert_eq!(pool.height_at(center + Vec2::new(1.625, 0.0), 2.01), 0.0);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn one_drop_one_impact_one_burst_one_ripple() {
    let config = StormConfig {
        rain: RainConfig { drop_count: 1, ..RainConfig::default() },
        ..StormConfig::default()
    };
    let mut storm = Storm::with_rng(config, Fixed(0.5)).unwrap();

    let drops = storm.drops_mut();
    drops.pos[0] = Vec3::new(4.0, 0.05, -3.0);
    drops.vel[0] = Vec3::new(0.0, -0.8, 0.0);

    let hits = storm.tick(1.0 / 60.0, 1.0);
    assert_eq!(hits, 1);
    assert_eq!(storm.impacts()[0].pos, Vec3::new(4.0, 0.0, -3.0));
    assert_eq!(storm.splashes().len(), 8);

    let ripples: Vec<_> = storm.ripples().iter_active().collect();
    assert_eq!(ripples.len(), 1);
    assert_eq!(ripples[0].center, Vec2::new(4.0, -3.0));
    assert_eq!(ripples[0].start, 1.0);

    // Recycled above the scene, inside the footprint.
    let p = storm.drops().pos[0];
    assert!(p.y >= 50.0);
    assert!(p.x.abs() <= 25.0 && p.z.abs() <= 25.0);
}

#[test]
fn drops_above_ground_move_exactly_by_velocity() {
    let config = StormConfig {
        rain: RainConfig { drop_count: 500, ..RainConfig::default() },
        ..StormConfig::default()
    };
    let mut storm = Storm::new(config, 8).unwrap();
    let dt = 1.0 / 30.0;

    for frame in 1..=20 {
        let before = storm.drops().pos.clone();
        let vel = storm.drops().vel.clone();
        storm.tick(dt, frame as f32 * dt);

        let mut recycled = 0;
        for i in 0..before.len() {
            let moved = before[i] + vel[i] * (dt * 60.0);
            if moved.y < 0.0 {
                recycled += 1;
                assert!(storm.drops().pos[i].y >= 50.0);
            } else {
                assert_eq!(storm.drops().pos[i], moved);
            }
        }
        assert_eq!(recycled, storm.impacts().len());
    }
}

#[test]
fn water_under_the_cube_stays_below_its_underside() {
    let mut storm = Storm::new(StormConfig::default(), 21).unwrap();
    let dt = 1.0 / 60.0;

    for frame in 1..=240 {
        storm.tick(dt, frame as f32 * dt);
        let f = storm.floater();
        let fp = Footprint::of_cube(f.pos, f.size);
        for v in storm.water().vertices() {
            let [x, y, z] = v.position;
            if fp.contains(x, z) {
                assert!(y <= fp.bottom, "frame {}: {} above underside {}", frame, y, fp.bottom);
            }
        }
    }
}

#[test]
fn ripple_pool_saturates_under_heavy_rain() {
    let mut storm = Storm::new(StormConfig::default(), 4).unwrap();
    let dt = 1.0 / 60.0;
    for frame in 1..=120 {
        storm.tick(dt, frame as f32 * dt);
        assert!(storm.ripples().active_count() <= storm.ripples().capacity());
    }
    assert_eq!(storm.ripples().active_count(), 30);
    assert!(storm.dropped_ripples() > 0);
}

#[test]
fn expired_ripples_are_not_counted_after_a_frame() {
    let config = StormConfig {
        rain: RainConfig { drop_count: 1, ..RainConfig::default() },
        ..StormConfig::default()
    };
    let mut storm = Storm::with_rng(config, Fixed(0.0)).unwrap();
    storm.drops_mut().pos[0] = Vec3::new(0.0, 0.01, 0.0);

    storm.tick(1.0 / 60.0, 0.0);
    assert_eq!(storm.ripples().active_count(), 1);

    // Fixed(0.0) respawns the drop at y = 50, well clear of the ground for
    // the rest of the test. Duration is 2 s.
    storm.tick(1.0 / 60.0, 2.0);
    assert_eq!(storm.ripples().active_count(), 1);
    storm.tick(1.0 / 60.0, 2.01);
    assert_eq!(storm.ripples().active_count(), 0);
}
