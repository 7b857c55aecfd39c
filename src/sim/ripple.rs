// ripple.rs - Expanding ripple rings on the water
//
// Fixed-size arena of ripple slots. Spawning claims the first free slot
// or does nothing when the pool is full. Slots are only freed while the
// surface is sampled, when a ripple is found to have outlived its
// duration.

use glam::Vec2;

use super::RandomSource;
use crate::config::RippleConfig;
use crate::world::{Envelope, packet, wavefront_radius};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub start: f32,
    pub strength: f32,
    pub max_radius: f32,
    pub duration: f32,
    pub wavelength: f32,
    pub active: bool,
}

impl Ripple {
    /// Contribution at planar distance `dist`, given an age within `[0, duration]`.
    #[inline]
    fn height(&self, dist: f32, age: f32, envelope: Envelope) -> f32 {
        let amplitude = self.strength * (1.0 - age / self.duration);
        let offset = dist - wavefront_radius(self.max_radius, self.duration, age);
        packet(offset, self.wavelength, amplitude, envelope)
    }
}

pub struct RipplePool {
    slots: Vec<Ripple>,
    cfg: RippleConfig,
    envelope: Envelope,
}

impl RipplePool {
    pub fn new(cfg: &RippleConfig) -> Self {
        Self {
            slots: vec![Ripple::default(); cfg.capacity],
            cfg: cfg.clone(),
            envelope: Envelope { width: cfg.envelope_width, decay: cfg.envelope_decay },
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently flagged active. Expired ripples stay flagged until
    /// the next [`height_at`](Self::height_at) pass reaches them.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|r| r.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|r| r.active)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Ripple> {
        self.slots.iter().filter(|r| r.active)
    }

    /// Start a ripple at `center`. Returns the claimed slot, or `None` when
    /// every slot is busy.
    pub fn spawn(&mut self, center: Vec2, now: f32, rng: &mut impl RandomSource) -> Option<usize> {
        let slot = self.slots.iter().position(|r| !r.active)?;

        self.slots[slot] = Ripple {
            center,
            start: now,
            strength: rng.span(self.cfg.strength),
            max_radius: rng.span(self.cfg.max_radius),
            duration: rng.span(self.cfg.duration),
            wavelength: rng.span(self.cfg.wavelength),
            active: true,
        };
        Some(slot)
    }

    /// Sum of every live ripple's height at `p`. Ripples older than their
    /// duration are retired here and contribute nothing.
    pub fn height_at(&mut self, p: Vec2, now: f32) -> f32 {
        let envelope = self.envelope;
        let mut sum = 0.0;

        for ripple in self.slots.iter_mut().filter(|r| r.active) {
            let age = now - ripple.start;
            if age > ripple.duration {
                ripple.active = false;
                continue;
            }
            sum += ripple.height(p.distance(ripple.center), age, envelope);
        }

        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::testing::Fixed;

    fn pool(capacity: usize) -> RipplePool {
        RipplePool::new(&RippleConfig { capacity, ..RippleConfig::default() })
    }

    #[test]
    fn spawn_claims_first_free_slot_with_ranged_params() {
        let mut pool = pool(3);
        let mut rng = Fixed(0.0);
        assert_eq!(pool.spawn(Vec2::new(1.0, 2.0), 0.5, &mut rng), Some(0));
        assert_eq!(pool.spawn(Vec2::ZERO, 0.5, &mut rng), Some(1));

        let r = pool.iter_active().next().copied().unwrap();
        assert_eq!(r.center, Vec2::new(1.0, 2.0));
        assert_eq!(r.start, 0.5);
        assert_eq!(r.strength, 0.15);
        assert_eq!(r.max_radius, 3.0);
        assert_eq!(r.duration, 2.0);
        assert_eq!(r.wavelength, 0.5);
    }

    #[test]
    fn full_pool_refuses_without_side_effects() {
        let mut pool = pool(30);
        let mut rng = Fixed(0.5);
        for i in 0..30 {
            assert_eq!(pool.spawn(Vec2::splat(i as f32), 0.0, &mut rng), Some(i));
        }
        assert!(pool.is_full());
        let before: Vec<Ripple> = pool.iter_active().copied().collect();

        assert_eq!(pool.spawn(Vec2::new(99.0, 99.0), 0.1, &mut rng), None);
        assert_eq!(pool.active_count(), 30);
        let after: Vec<Ripple> = pool.iter_active().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn expired_ripples_contribute_nothing_and_free_their_slot() {
        let mut pool = pool(2);
        let mut rng = Fixed(0.0); // duration 2.0
        pool.spawn(Vec2::ZERO, 0.0, &mut rng);
        assert_eq!(pool.active_count(), 1);

        assert_eq!(pool.height_at(Vec2::new(3.0, 0.0), 2.01), 0.0);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.spawn(Vec2::ZERO, 2.01, &mut rng), Some(0));
    }

    #[test]
    fn freed_middle_slot_is_reclaimed_first() {
        let mut pool = pool(3);
        let mut rng = Fixed(0.0); // duration 2.0
        assert_eq!(pool.spawn(Vec2::ZERO, 1.0, &mut rng), Some(0));
        assert_eq!(pool.spawn(Vec2::ZERO, 0.0, &mut rng), Some(1));
        assert_eq!(pool.spawn(Vec2::ZERO, 1.0, &mut rng), Some(2));
        assert!(pool.is_full());

        // Only slot 1 is past its duration at t=2.5.
        pool.height_at(Vec2::ZERO, 2.5);
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.spawn(Vec2::new(4.0, 4.0), 2.5, &mut rng), Some(1));
        assert!(pool.is_full());
    }

    #[test]
    fn ripple_at_exactly_its_duration_is_still_live() {
        let mut pool = pool(1);
        pool.spawn(Vec2::ZERO, 0.0, &mut Fixed(0.0));
        pool.height_at(Vec2::ZERO, 2.0);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn contribution_follows_the_expanding_front() {
        let mut pool = pool(1);
        // strength 0.15, radius 3, duration 2, wavelength 0.5
        pool.spawn(Vec2::ZERO, 0.0, &mut Fixed(0.0));

        // At t=1 the front sits at r=1.5 and the amplitude is halved.
        let offset = 0.125_f32;
        let h = pool.height_at(Vec2::new(1.5 + offset, 0.0), 1.0);
        let g = offset / (0.5 * 0.8);
        let expected = 0.075 * (offset / 0.5 * std::f32::consts::TAU).sin() * (-g * g).exp();
        assert!(h != 0.0);
        assert!((h - expected).abs() < 1e-5);

        // Far outside the packet support.
        assert_eq!(pool.height_at(Vec2::new(4.0, 0.0), 1.0), 0.0);
    }

    #[test]
    fn contributions_superpose() {
        let mut pool = pool(2);
        let mut rng = Fixed(0.0);
        pool.spawn(Vec2::ZERO, 0.0, &mut rng);
        let p = Vec2::new(1.6, 0.0);
        let single = pool.height_at(p, 1.0);
        pool.spawn(Vec2::ZERO, 0.0, &mut rng);
        let double = pool.height_at(p, 1.0);
        assert!((double - 2.0 * single).abs() < 1e-6);
    }
}
