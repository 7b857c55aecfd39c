// water.rs - Height-field water surface
//
// A regular grid whose (x, z) never move. Every frame each vertex height
// is rebuilt from scratch: swell + ripples + wake, then pushed under the
// floating cube.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::{Floater, RipplePool};
use crate::config::WaterConfig;
use crate::world::{Footprint, Swell, Wake};

/// Vertex format uploaded by the renderer.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct WaterVertex {
    pub position: [f32; 3],
}

pub struct WaterSurface {
    vertices: Vec<WaterVertex>,
    indices: Vec<u32>,
    /// Vertices per side.
    side: usize,
    ground: f32,
    swell: Swell,
    wake: Wake,
    pub color: [u8; 4],
}

impl WaterSurface {
    /// Flat grid of `(divisions + 1)^2` vertices spanning `extent` on each
    /// axis, centered on the origin.
    pub fn new(cfg: &WaterConfig, area_size: f32, ground: f32) -> Self {
        let extent = area_size * cfg.size_factor;
        let side = cfg.divisions + 1;
        let step = extent / cfg.divisions as f32;
        let half = extent / 2.0;

        let mut vertices = Vec::with_capacity(side * side);
        for zi in 0..side {
            for xi in 0..side {
                let x = xi as f32 * step - half;
                let z = zi as f32 * step - half;
                vertices.push(WaterVertex { position: [x, ground, z] });
            }
        }

        Self {
            vertices,
            indices: grid_indices(side),
            side,
            ground,
            swell: Swell {
                amplitude: cfg.swell_amplitude,
                frequency: cfg.swell_frequency,
                speed: cfg.swell_speed,
            },
            wake: Wake {
                strength: cfg.wake_strength,
                wavelength: cfg.wake_wavelength,
                speed: cfg.wake_speed,
                inner: cfg.wake_inner,
                outer: cfg.wake_outer,
            },
            color: cfg.color,
        }
    }

    /// Rebuild every vertex height for time `now`.
    pub fn recompute(&mut self, now: f32, ripples: &mut RipplePool, floater: &Floater) {
        let center = Vec2::new(floater.pos.x, floater.pos.z);
        let footprint = Footprint::of_cube(floater.pos, floater.size);

        for v in &mut self.vertices {
            let [x, _, z] = v.position;
            let p = Vec2::new(x, z);

            let mut h = self.ground + self.swell.height(x, z, now);
            h += ripples.height_at(p, now);
            h += self.wake.height(p.distance(center), floater.size, now);

            v.position[1] = footprint.clamp(x, z, h);
        }
    }

    pub fn vertices(&self) -> &[WaterVertex] {
        &self.vertices
    }

    /// Vertex buffer as packed `x, y, z` floats.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Two counter-clockwise (seen from above) triangles per grid cell.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn height(&self, xi: usize, zi: usize) -> f32 {
        self.vertices[zi * self.side + xi].position[1]
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.vertices.iter().map(|v| v.position[1])
    }
}

fn grid_indices(side: usize) -> Vec<u32> {
    let cells = side - 1;
    let mut out = Vec::with_capacity(cells * cells * 6);
    for zi in 0..cells {
        for xi in 0..cells {
            let a = (zi * side + xi) as u32;
            let b = a + 1;
            let c = a + side as u32;
            let d = c + 1;
            out.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    out
}
