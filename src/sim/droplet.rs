// droplet.rs - Falling rain droplets
//
// Structure-of-Arrays layout for cache-friendly iteration.
// The drop count never changes: a drop that reaches the ground reports
// an impact and is recycled to a fresh spot above the scene.

use glam::Vec3;

use super::{Impact, RandomSource};
use crate::config::RainConfig;

const DROP_ALPHA: u8 = 200;
const BLUE_TINT: u8 = 10;

pub struct Droplets {
    pub pos: Vec<Vec3>,
    /// Wind plus the drop's own fall speed, in units per 1/60 s.
    pub vel: Vec<Vec3>,
    pub color: Vec<[u8; 4]>,
    pub speed_var: Vec<f32>,

    ground: f32,
    half_area: f32,
    respawn_floor: f32,
    respawn_band: f32,
    motion_scale: f32,
}

impl Droplets {
    /// Fill the sky with `cfg.drop_count` drops at random heights.
    pub fn new(cfg: &RainConfig, rng: &mut impl RandomSource) -> Self {
        let n = cfg.drop_count;
        let half_area = cfg.area_size / 2.0;
        let wind = Vec3::from(cfg.wind);

        let mut drops = Self {
            pos: Vec::with_capacity(n),
            vel: Vec::with_capacity(n),
            color: Vec::with_capacity(n),
            speed_var: Vec::with_capacity(n),
            ground: cfg.ground_level,
            half_area,
            respawn_floor: cfg.ground_level + cfg.area_size,
            respawn_band: cfg.area_size * cfg.respawn_band,
            motion_scale: cfg.motion_scale,
        };

        for _ in 0..n {
            let x = rng.range(-half_area, half_area);
            let y = rng.range(cfg.ground_level + cfg.spawn_floor, cfg.ground_level + cfg.area_size * 1.5);
            let z = rng.range(-half_area, half_area);
            let var = rng.span(cfg.speed_variation);
            let shade = rng.span(cfg.shade) as u8;

            drops.pos.push(Vec3::new(x, y, z));
            drops.vel.push(Vec3::new(0.0, -cfg.base_speed * var, 0.0) + wind);
            drops.color.push([shade, shade, shade.saturating_add(BLUE_TINT), DROP_ALPHA]);
            drops.speed_var.push(var);
        }

        drops
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Lowest height a recycled drop can re-enter at.
    pub fn respawn_floor(&self) -> f32 {
        self.respawn_floor
    }

    /// Half the side length of the square footprint drops land in.
    pub fn half_area(&self) -> f32 {
        self.half_area
    }

    /// Move every drop; push one impact per drop that fell through the ground.
    pub fn advance(&mut self, dt: f32, rng: &mut impl RandomSource, impacts: &mut Vec<Impact>) {
        let step = dt * self.motion_scale;

        for i in 0..self.pos.len() {
            let p = self.pos[i] + self.vel[i] * step;

            if p.y < self.ground {
                impacts.push(Impact {
                    pos: Vec3::new(p.x, self.ground, p.z),
                    color: self.color[i],
                });
                self.pos[i] = self.respawn(rng);
                continue;
            }

            self.pos[i] = p;
        }
    }

    fn respawn(&self, rng: &mut impl RandomSource) -> Vec3 {
        let x = rng.range(-self.half_area, self.half_area);
        let y = self.respawn_floor + rng.range(0.0, self.respawn_band);
        let z = rng.range(-self.half_area, self.half_area);
        Vec3::new(x, y, z)
    }
}
