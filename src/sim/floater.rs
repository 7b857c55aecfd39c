// floater.rs - The floating cube
//
// Position is a closed-form function of accumulated time: a circular
// orbit over the water plus a vertical bob. Nothing is integrated.

use glam::Vec3;

use crate::config::FloaterConfig;

pub struct Floater {
    pub pos: Vec3,
    pub size: f32,
    pub color: [u8; 4],

    elapsed: f32,
    orbit_radius: f32,
    orbit_speed: f32,
    bob_speed: f32,
    bob_amplitude: f32,
    /// Center height at the bob midpoint.
    baseline: f32,
}

impl Floater {
    pub fn new(cfg: &FloaterConfig, area_size: f32, ground: f32) -> Self {
        let half = cfg.size / 2.0;
        Self {
            pos: Vec3::new(0.0, ground + half + cfg.start_offset, 0.0),
            size: cfg.size,
            color: cfg.color,
            elapsed: 0.0,
            orbit_radius: area_size / cfg.orbit_divisor,
            orbit_speed: cfg.orbit_speed,
            bob_speed: cfg.bob_speed,
            bob_amplitude: cfg.bob_amplitude,
            baseline: ground + half + cfg.float_offset,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.pos = self.position_at(self.elapsed);
    }

    /// Where the cube sits after `t` seconds of motion.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let orbit = t * self.orbit_speed;
        Vec3::new(
            orbit.cos() * self.orbit_radius,
            self.baseline + (t * self.bob_speed).sin() * self.bob_amplitude,
            orbit.sin() * self.orbit_radius,
        )
    }

    /// Height of the cube's underside.
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_above_the_water() {
        let f = Floater::new(&FloaterConfig::default(), 50.0, 0.0);
        assert_eq!(f.pos, Vec3::new(0.0, 3.5, 0.0));
        assert_eq!(f.bottom(), 1.0);
    }

    #[test]
    fn follows_orbit_and_bob() {
        let mut f = Floater::new(&FloaterConfig::default(), 50.0, 0.0);
        f.advance(0.5);
        f.advance(0.75);
        let t = 1.25_f32;
        let r = 50.0 / 3.5;
        assert!((f.pos.x - (t * 0.4).cos() * r).abs() < 1e-5);
        assert!((f.pos.z - (t * 0.4).sin() * r).abs() < 1e-5);
        assert!((f.pos.y - (3.0 + (t * 0.6).sin() * 2.0)).abs() < 1e-5);
        assert_eq!(f.elapsed(), 1.25);
    }

    #[test]
    fn orbit_radius_is_constant() {
        let f = Floater::new(&FloaterConfig::default(), 50.0, 0.0);
        for i in 0..50 {
            let p = f.position_at(i as f32 * 0.37);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 50.0 / 3.5).abs() < 1e-3);
        }
    }
}
