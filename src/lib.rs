use wasm_bindgen::prelude::*;

// ============================================================================
// STORM WORLD - Rain over water with a floating cube
// ============================================================================
//
// The simulation lives in `sim`, the wave math in `world`, and `render`
// packs the result into flat buffers. This file is the thin wasm surface
// the page drives once per animation frame.

pub mod config;
pub mod error;
pub mod render;
pub mod sim;
pub mod world;

pub use config::StormConfig;
pub use error::ConfigError;
pub use render::{Encoder, HudStats, LineVertex, PointVertex};
pub use sim::{Impact, RandomSource, SimRng, Storm};

#[wasm_bindgen]
pub struct StormWorld {
    storm: Storm,
    encoder: Encoder,
}

#[wasm_bindgen]
impl StormWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<StormWorld, JsError> {
        Self::build(StormConfig::default(), seed)
    }

    /// Build from a JSON config; absent fields take their defaults.
    pub fn from_json(json: &str, seed: u32) -> Result<StormWorld, JsError> {
        Self::build(StormConfig::from_json(json)?, seed)
    }

    /// Advance one frame and refresh every output buffer.
    pub fn tick(&mut self, dt: f32, now: f32) -> usize {
        let hits = self.storm.tick(dt, now);
        self.encoder.encode(&self.storm);
        hits
    }

    pub fn set_camera(&mut self, x: f32, y: f32, z: f32) {
        self.encoder.set_camera(glam::Vec3::new(x, y, z));
    }

    // Water: xyz f32 per vertex, u32 triangle list
    pub fn water_ptr(&self) -> *const f32 { self.storm.water().vertex_floats().as_ptr() }
    pub fn water_len(&self) -> usize { self.storm.water().vertex_floats().len() }
    pub fn index_ptr(&self) -> *const u32 { self.storm.water().indices().as_ptr() }
    pub fn index_len(&self) -> usize { self.storm.water().indices().len() }

    /// Copy of the water vertex buffer, for hosts that don't read linear memory.
    pub fn water_vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.storm.water().vertex_floats())
    }

    // Rain and splashes: 16-byte vertices (xyz f32, rgba u8)
    pub fn rain_ptr(&self) -> *const u8 { self.encoder.rain_bytes().as_ptr() }
    pub fn rain_len(&self) -> usize { self.encoder.rain_bytes().len() }
    pub fn splash_ptr(&self) -> *const u8 { self.encoder.splash_bytes().as_ptr() }
    pub fn splash_len(&self) -> usize { self.encoder.splash_bytes().len() }

    pub fn splash_count(&self) -> usize { self.storm.splashes().len() }
    pub fn active_ripples(&self) -> usize { self.storm.ripples().active_count() }
    pub fn max_ripples(&self) -> usize { self.storm.ripples().capacity() }

    pub fn object_x(&self) -> f32 { self.storm.floater().pos.x }
    pub fn object_y(&self) -> f32 { self.storm.floater().pos.y }
    pub fn object_z(&self) -> f32 { self.storm.floater().pos.z }
    pub fn object_size(&self) -> f32 { self.storm.floater().size }

    /// Packed `0xRRGGBBAA`.
    pub fn object_color(&self) -> u32 { u32::from_be_bytes(self.storm.floater().color) }
    pub fn water_color(&self) -> u32 { u32::from_be_bytes(self.storm.water().color) }
}

impl StormWorld {
    fn build(config: StormConfig, seed: u32) -> Result<StormWorld, JsError> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let encoder = Encoder::new(&config.render, config.rain.area_size);
        let storm = Storm::new(config, seed as u64)?;
        Ok(Self { storm, encoder })
    }
}
