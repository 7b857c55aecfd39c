// render.rs - Encode simulation state to draw buffers
//
// Output buffers (for the host renderer):
//   rain     = 2 LineVertex per drop (head, tail), alpha faded by camera distance
//   splashes = 1 PointVertex per live splash particle
//   water    = read straight from WaterSurface (vertices + indices)
// Each vertex is 16 bytes: xyz as f32, rgba as u8.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::config::RenderConfig;
use crate::sim::{Droplets, RandomSource, Splashes, Storm};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
}

/// Splash points share the line layout.
pub type PointVertex = LineVertex;

/// Numbers for the on-screen overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudStats {
    pub drops: usize,
    pub splashes: usize,
    pub active_ripples: usize,
    pub max_ripples: usize,
}

impl HudStats {
    pub fn of<R: RandomSource>(storm: &Storm<R>) -> Self {
        Self {
            drops: storm.drops().len(),
            splashes: storm.splashes().len(),
            active_ripples: storm.ripples().active_count(),
            max_ripples: storm.ripples().capacity(),
        }
    }

    pub fn lines(&self) -> [String; 2] {
        [
            format!("Splashes: {}", self.splashes),
            format!("Active Ripples: {}/{}", self.active_ripples, self.max_ripples),
        ]
    }
}

pub struct Encoder {
    rain: Vec<LineVertex>,
    splashes: Vec<PointVertex>,
    drop_length: f32,
    fade_start: f32,
    fade_end: f32,
    camera: Vec3,
}

impl Encoder {
    pub fn new(cfg: &RenderConfig, area_size: f32) -> Self {
        Self {
            rain: Vec::new(),
            splashes: Vec::new(),
            drop_length: cfg.drop_length,
            fade_start: area_size * cfg.fade_start,
            fade_end: area_size * cfg.fade_end,
            camera: Vec3::from(cfg.camera),
        }
    }

    pub fn set_camera(&mut self, camera: Vec3) {
        self.camera = camera;
    }

    /// Encode everything the host draws this frame.
    pub fn encode<R: RandomSource>(&mut self, storm: &Storm<R>) {
        self.encode_drops(storm.drops());
        self.encode_splashes(storm.splashes());
    }

    /// Each drop is a short streak trailing back along its velocity.
    pub fn encode_drops(&mut self, drops: &Droplets) {
        self.rain.clear();
        self.rain.reserve(drops.len() * 2);

        for i in 0..drops.len() {
            let head = drops.pos[i];
            let tail = head - drops.vel[i].normalize_or_zero() * self.drop_length;

            let mut color = drops.color[i];
            color[3] = (color[3] as f32 * self.fade(head.distance(self.camera))) as u8;

            self.rain.push(LineVertex { position: head.to_array(), color });
            self.rain.push(LineVertex { position: tail.to_array(), color });
        }
    }

    pub fn encode_splashes(&mut self, splashes: &Splashes) {
        self.splashes.clear();
        self.splashes.extend(
            splashes
                .pos
                .iter()
                .zip(&splashes.color)
                .map(|(p, &color)| PointVertex { position: p.to_array(), color }),
        );
    }

    /// 1 up close, linear down to 0 at `fade_end`.
    #[inline]
    fn fade(&self, dist: f32) -> f32 {
        if dist <= self.fade_start {
            return 1.0;
        }
        (1.0 - (dist - self.fade_start) / (self.fade_end - self.fade_start)).clamp(0.0, 1.0)
    }

    pub fn rain(&self) -> &[LineVertex] {
        &self.rain
    }

    pub fn splashes(&self) -> &[PointVertex] {
        &self.splashes
    }

    pub fn rain_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rain)
    }

    pub fn splash_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.splashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RainConfig, SplashConfig, StormConfig};
    use crate::sim::rng::testing::Fixed;

    fn one_drop(at: Vec3, vel: Vec3) -> Droplets {
        let cfg = RainConfig { drop_count: 1, ..RainConfig::default() };
        let mut drops = Droplets::new(&cfg, &mut Fixed(0.5));
        drops.pos[0] = at;
        drops.vel[0] = vel;
        drops
    }

    #[test]
    fn drop_streak_trails_back_along_velocity() {
        let mut enc = Encoder::new(&RenderConfig::default(), 50.0);
        enc.set_camera(Vec3::new(0.0, 10.0, 0.0));
        enc.encode_drops(&one_drop(Vec3::new(1.0, 10.0, 2.0), Vec3::new(0.0, -0.8, 0.0)));

        let rain = enc.rain();
        assert_eq!(rain.len(), 2);
        assert_eq!(rain[0].position, [1.0, 10.0, 2.0]);
        assert!((rain[1].position[1] - 10.4).abs() < 1e-6);
        // Close to the camera: full drop alpha.
        assert_eq!(rain[0].color[3], 200);
    }

    #[test]
    fn far_drops_fade_out() {
        let mut enc = Encoder::new(&RenderConfig::default(), 50.0);
        enc.set_camera(Vec3::ZERO);
        let down = Vec3::new(0.0, -1.0, 0.0);

        // Halfway through the 25..75 fade band.
        enc.encode_drops(&one_drop(Vec3::new(50.0, 0.0, 0.0), down));
        assert_eq!(enc.rain()[0].color[3], 100);

        enc.encode_drops(&one_drop(Vec3::new(80.0, 0.0, 0.0), down));
        assert_eq!(enc.rain()[0].color[3], 0);
    }

    #[test]
    fn splash_points_mirror_live_particles() {
        let mut splashes = Splashes::new(&SplashConfig::default());
        splashes.spawn(Vec3::new(1.0, 0.0, 1.0), [10, 20, 30, 255], &mut Fixed(0.5));
        let mut enc = Encoder::new(&RenderConfig::default(), 50.0);
        enc.encode_splashes(&splashes);

        assert_eq!(enc.splashes().len(), 8);
        assert_eq!(enc.splash_bytes().len(), 8 * 16);
        assert!(enc.splashes().iter().all(|p| p.position == [1.0, 0.0, 1.0]));
    }

    #[test]
    fn hud_reports_pool_usage() {
        let storm = Storm::new(
            StormConfig {
                rain: RainConfig { drop_count: 10, ..RainConfig::default() },
                ..StormConfig::default()
            },
            1,
        )
        .unwrap();
        let stats = HudStats::of(&storm);
        assert_eq!(stats, HudStats { drops: 10, splashes: 0, active_ripples: 0, max_ripples: 30 });
        assert_eq!(stats.lines()[1], "Active Ripples: 0/30");
    }
}
