// wake.rs - Floating object wake and underside clamp

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

/// Rings pushed outward from a floating object's center.
#[derive(Clone, Copy, Debug)]
pub struct Wake {
    pub strength: f32,
    pub wavelength: f32,
    pub speed: f32,
    /// Ring bounds as multiples of the object size.
    pub inner: f32,
    pub outer: f32,
}

impl Wake {
    /// Wake height at planar distance `dist` from an object of edge `size`.
    #[inline]
    pub fn height(&self, dist: f32, size: f32, t: f32) -> f32 {
        let radius = size * self.outer;
        if !(dist < radius && dist > size * self.inner) {
            return 0.0;
        }
        let n = 1.0 - dist / radius;
        let falloff = n * n;
        let phase = dist / self.wavelength - t * self.speed / self.wavelength;
        (phase * TAU).sin() * self.strength * falloff
    }
}

/// Axis-aligned footprint of a cube of edge `size` centered at `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub min: Vec2,
    pub max: Vec2,
    /// Height of the underside.
    pub bottom: f32,
}

impl Footprint {
    pub fn of_cube(center: Vec3, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min: Vec2::new(center.x - half, center.z - half),
            max: Vec2::new(center.x + half, center.z + half),
            bottom: center.y - half,
        }
    }

    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }

    /// Push `height` down to the underside when under the object; never up.
    #[inline]
    pub fn clamp(&self, x: f32, z: f32, height: f32) -> f32 {
        if self.contains(x, z) { height.min(self.bottom) } else { height }
    }
}
