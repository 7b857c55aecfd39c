// sim/ - Storm simulation
//
// One owned state struct, advanced once per frame in a fixed order:
// cube, drops, impacts -> splashes + ripples, splashes, water.
// Entity management uses Structure-of-Arrays for cache efficiency.
// Each entity type in its own module.

mod droplet;
mod floater;
mod ripple;
pub mod rng;
mod splash;
mod water;

pub use droplet::Droplets;
pub use floater::Floater;
pub use ripple::{Ripple, RipplePool};
pub use rng::{RandomSource, SimRng};
pub use splash::Splashes;
pub use water::{WaterSurface, WaterVertex};

use glam::{Vec2, Vec3};

use crate::config::StormConfig;
use crate::error::ConfigError;

/// A drop reaching the ground this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impact {
    /// Horizontal position of the drop, height set to ground level.
    pub pos: Vec3,
    pub color: [u8; 4],
}

/// Rain, splashes, ripples, water and the floating cube.
pub struct Storm<R: RandomSource = SimRng> {
    drops: Droplets,
    splashes: Splashes,
    ripples: RipplePool,
    water: WaterSurface,
    floater: Floater,

    // Reused every frame
    impacts: Vec<Impact>,
    dropped_ripples: u64,

    rng: R,
}

impl Storm<SimRng> {
    pub fn new(config: StormConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimRng::from_seed_u64(seed))
    }
}

impl<R: RandomSource> Storm<R> {
    /// Validate `config` and build the initial scene.
    pub fn with_rng(config: StormConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let rain = &config.rain;
        let drops = Droplets::new(rain, &mut rng);
        let splashes = Splashes::new(&config.splash);
        let ripples = RipplePool::new(&config.ripple);
        let water = WaterSurface::new(&config.water, rain.area_size, rain.ground_level);
        let floater = Floater::new(&config.floater, rain.area_size, rain.ground_level);

        log::info!(
            "storm ready: {} drops, {}x{} water grid, {} ripple slots",
            drops.len(),
            water.side(),
            water.side(),
            ripples.capacity()
        );

        Ok(Self {
            drops,
            splashes,
            ripples,
            water,
            floater,
            impacts: Vec::new(),
            dropped_ripples: 0,
            rng,
        })
    }

    /// Advance one frame. `dt` is the frame delta, `now` the absolute clock,
    /// both in seconds. Returns the number of impacts this frame.
    pub fn tick(&mut self, dt: f32, now: f32) -> usize {
        self.floater.advance(dt);

        self.impacts.clear();
        self.drops.advance(dt, &mut self.rng, &mut self.impacts);

        for impact in &self.impacts {
            self.splashes.spawn(impact.pos, impact.color, &mut self.rng);
            let center = Vec2::new(impact.pos.x, impact.pos.z);
            if self.ripples.spawn(center, now, &mut self.rng).is_none() {
                self.dropped_ripples += 1;
                log::trace!("ripple pool full, no ripple at ({:.2}, {:.2})", center.x, center.y);
            }
        }

        self.splashes.advance(dt);
        self.water.recompute(now, &mut self.ripples, &self.floater);

        self.impacts.len()
    }

    pub fn drops(&self) -> &Droplets {
        &self.drops
    }

    pub fn drops_mut(&mut self) -> &mut Droplets {
        &mut self.drops
    }

    pub fn splashes(&self) -> &Splashes {
        &self.splashes
    }

    pub fn ripples(&self) -> &RipplePool {
        &self.ripples
    }

    pub fn water(&self) -> &WaterSurface {
        &self.water
    }

    pub fn floater(&self) -> &Floater {
        &self.floater
    }

    /// Impacts reported by the last [`tick`](Self::tick).
    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Impacts that found the ripple pool full, since construction.
    pub fn dropped_ripples(&self) -> u64 {
        self.dropped_ripples
    }
}
