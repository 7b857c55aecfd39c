// splash.rs - Water splash effects
//
// Short-lived ballistic particles thrown up by each impact.
// Dead particles are squeezed out in a single read/write pass, so no
// particle is skipped or processed twice while the set shrinks.

use glam::Vec3;

use super::RandomSource;
use crate::config::SplashConfig;

pub struct Splashes {
    pub pos: Vec<Vec3>,
    pub vel: Vec<Vec3>,
    pub color: Vec<[u8; 4]>,
    /// Seconds left; always in `(0, lifetime]` for a stored particle.
    pub life: Vec<f32>,

    burst: usize,
    lifetime: f32,
    speed: f32,
    gravity: f32,
    spread: f32,
    lift: (f32, f32),
    opacity: f32,
}

impl Splashes {
    pub fn new(cfg: &SplashConfig) -> Self {
        Self {
            pos: Vec::new(),
            vel: Vec::new(),
            color: Vec::new(),
            life: Vec::new(),
            burst: cfg.particles_per_impact,
            lifetime: cfg.lifetime,
            speed: cfg.speed,
            gravity: cfg.gravity,
            spread: cfg.spread,
            lift: cfg.lift,
            opacity: cfg.opacity,
        }
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Throw a burst of particles out of an impact point.
    pub fn spawn(&mut self, at: Vec3, base: [u8; 4], rng: &mut impl RandomSource) {
        let color = [base[0], base[1], base[2], fade(self.opacity)];

        for _ in 0..self.burst {
            let vx = rng.range(-self.speed, self.speed) * self.spread;
            let vy = rng.span(self.lift) * self.speed;
            let vz = rng.range(-self.speed, self.speed) * self.spread;

            self.pos.push(at);
            self.vel.push(Vec3::new(vx, vy, vz));
            self.color.push(color);
            self.life.push(self.lifetime);
        }
    }

    /// Age, fall and fade every particle; drop the expired ones.
    pub fn advance(&mut self, dt: f32) {
        let mut write = 0;

        for read in 0..self.pos.len() {
            let life = self.life[read] - dt;
            if life <= 0.0 {
                continue;
            }

            let mut vel = self.vel[read];
            vel.y += self.gravity * dt;
            let pos = self.pos[read] + vel * dt;
            let mut color = self.color[read];
            color[3] = fade(life / self.lifetime);

            self.pos[write] = pos;
            self.vel[write] = vel;
            self.color[write] = color;
            self.life[write] = life;
            write += 1;
        }

        self.pos.truncate(write);
        self.vel.truncate(write);
        self.color.truncate(write);
        self.life.truncate(write);
    }
}

#[inline]
fn fade(alpha: f32) -> u8 {
    (255.0 * alpha.clamp(0.0, 1.0)) as u8
}
