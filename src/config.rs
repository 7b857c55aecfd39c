// config.rs - Storm tuning parameters
//
// Every knob the simulation reads lives here. Defaults reproduce the
// reference storm: 3000 drops over a 50x50 area, a 60x60 water grid,
// a 30 slot ripple pool and a 5 unit floating cube.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive `(min, max)` range that random draws are taken from.
pub type Span = (f32, f32);

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StormConfig {
    pub rain: RainConfig,
    pub splash: SplashConfig,
    pub ripple: RippleConfig,
    pub water: WaterConfig,
    pub floater: FloaterConfig,
    pub render: RenderConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub drop_count: usize,
    /// Side length of the square footprint drops fall into.
    pub area_size: f32,
    pub base_speed: f32,
    pub speed_variation: Span,
    pub ground_level: f32,
    pub wind: [f32; 3],
    /// Velocities are expressed per 1/60 s; `advance` multiplies `dt` by this.
    pub motion_scale: f32,
    /// Lowest starting height above ground for the initial fill.
    pub spawn_floor: f32,
    /// Recycled drops re-enter at `area + U(0, area * respawn_band)`.
    pub respawn_band: f32,
    pub shade: Span,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            drop_count: 3000,
            area_size: 50.0,
            base_speed: 0.8,
            speed_variation: (0.8, 1.2),
            ground_level: 0.0,
            wind: [0.1, 0.0, 0.04],
            motion_scale: 60.0,
            spawn_floor: 5.0,
            respawn_band: 0.5,
            shade: (100.0, 180.0),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub particles_per_impact: usize,
    pub lifetime: f32,
    pub speed: f32,
    pub gravity: f32,
    /// Horizontal velocity is `U(-speed, speed) * spread`.
    pub spread: f32,
    /// Upward velocity is `U(lift) * speed`.
    pub lift: Span,
    /// Opacity of a fresh particle relative to the drop color.
    pub opacity: f32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            particles_per_impact: 8,
            lifetime: 0.3,
            speed: 2.0,
            gravity: -5.0,
            spread: 0.5,
            lift: (0.5, 1.0),
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub capacity: usize,
    pub strength: Span,
    pub max_radius: Span,
    pub duration: Span,
    pub wavelength: Span,
    /// Packet support is `|offset| < wavelength * envelope_width`.
    pub envelope_width: f32,
    /// Gaussian width of the packet, in wavelengths.
    pub envelope_decay: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            capacity: 30,
            strength: (0.15, 0.3),
            max_radius: (3.0, 5.0),
            duration: (2.0, 3.5),
            wavelength: (0.5, 1.0),
            envelope_width: 1.5,
            envelope_decay: 0.8,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Water plane side length as a multiple of the rain area.
    pub size_factor: f32,
    pub divisions: usize,
    pub swell_amplitude: [f32; 2],
    pub swell_frequency: [f32; 2],
    pub swell_speed: [f32; 2],
    pub wake_strength: f32,
    pub wake_wavelength: f32,
    pub wake_speed: f32,
    /// Wake ring bounds as multiples of the object size.
    pub wake_inner: f32,
    pub wake_outer: f32,
    pub color: [u8; 4],
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            size_factor: 1.5,
            divisions: 60,
            swell_amplitude: [0.3, 0.25],
            swell_frequency: [0.3, 0.25],
            swell_speed: [1.5, 1.1],
            wake_strength: 0.1,
            wake_wavelength: 2.5,
            wake_speed: 2.0,
            wake_inner: 0.3,
            wake_outer: 1.5,
            color: [60, 100, 150, 200],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FloaterConfig {
    pub size: f32,
    pub orbit_speed: f32,
    /// Orbit radius is `area_size / orbit_divisor`.
    pub orbit_divisor: f32,
    pub bob_speed: f32,
    pub bob_amplitude: f32,
    /// Height of the cube's underside above ground at the bob midpoint.
    pub float_offset: f32,
    /// Underside height above ground before the first frame.
    pub start_offset: f32,
    pub color: [u8; 4],
}

impl Default for FloaterConfig {
    fn default() -> Self {
        Self {
            size: 5.0,
            orbit_speed: 0.4,
            orbit_divisor: 3.5,
            bob_speed: 0.6,
            bob_amplitude: 2.0,
            float_offset: 0.5,
            start_offset: 1.0,
            color: [230, 41, 55, 255],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub drop_length: f32,
    /// Rain fade distances as multiples of the rain area size.
    pub fade_start: f32,
    pub fade_end: f32,
    pub camera: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            drop_length: 0.4,
            fade_start: 0.5,
            fade_end: 1.5,
            camera: [25.0, 15.0, 25.0],
        }
    }
}

impl StormConfig {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StormConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded storm config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rain = &self.rain;
        let (area, ground) = (rain.area_size, rain.ground_level);
        non_empty("rain.drop_count", rain.drop_count)?;
        positive("rain.area_size", area)?;
        positive("rain.motion_scale", rain.motion_scale)?;
        finite("rain.ground_level", &[ground])?;
        finite("rain.base_speed", &[rain.base_speed])?;
        finite("rain.wind", &rain.wind)?;
        span("rain.speed_variation", rain.speed_variation)?;
        span("rain.shade", rain.shade)?;
        if rain.shade.0 < 0.0 || rain.shade.1 > 245.0 {
            return Err(ConfigError::OutOfBounds {
                field: "rain.shade",
                min: rain.shade.0,
                max: rain.shade.1,
                lo: 0.0,
                hi: 245.0,
            });
        }
        // Drops are placed by draws derived from the area.
        bounds("rain.area_size", -area / 2.0, area / 2.0)?;
        bounds("rain.spawn_floor", ground + rain.spawn_floor, ground + area * 1.5)?;
        bounds("rain.respawn_band", ground + area, ground + area + area * rain.respawn_band)?;

        let splash = &self.splash;
        positive("splash.lifetime", splash.lifetime)?;
        finite("splash.gravity", &[splash.gravity])?;
        finite("splash.spread", &[splash.spread])?;
        finite("splash.opacity", &[splash.opacity])?;
        bounds("splash.speed", -splash.speed, splash.speed)?;
        span("splash.lift", splash.lift)?;

        let ripple = &self.ripple;
        non_empty("ripple.capacity", ripple.capacity)?;
        span("ripple.strength", ripple.strength)?;
        span("ripple.max_radius", ripple.max_radius)?;
        span("ripple.duration", ripple.duration)?;
        span("ripple.wavelength", ripple.wavelength)?;
        positive("ripple.duration", ripple.duration.0)?;
        positive("ripple.wavelength", ripple.wavelength.0)?;
        positive("ripple.envelope_width", ripple.envelope_width)?;
        positive("ripple.envelope_decay", ripple.envelope_decay)?;

        let water = &self.water;
        non_empty("water.divisions", water.divisions)?;
        positive("water.size_factor", water.size_factor)?;
        positive("water.wake_wavelength", water.wake_wavelength)?;
        positive("water.wake_outer", water.wake_outer)?;
        finite("water.size_factor", &[area * water.size_factor])?;
        finite("water.swell_amplitude", &water.swell_amplitude)?;
        finite("water.swell_frequency", &water.swell_frequency)?;
        finite("water.swell_speed", &water.swell_speed)?;
        finite("water.wake", &[water.wake_strength, water.wake_speed, water.wake_inner])?;

        let floater = &self.floater;
        positive("floater.size", floater.size)?;
        positive("floater.orbit_divisor", floater.orbit_divisor)?;
        finite("floater.orbit_divisor", &[area / floater.orbit_divisor])?;
        finite(
            "floater.motion",
            &[
                floater.orbit_speed,
                floater.bob_speed,
                floater.bob_amplitude,
                floater.float_offset,
                floater.start_offset,
            ],
        )?;

        let render = &self.render;
        finite("render.drop_length", &[render.drop_length])?;
        finite("render.camera", &render.camera)?;
        span("render.fade", (render.fade_start, render.fade_end))?;
        finite("render.fade", &[area * render.fade_start, area * render.fade_end])?;
        Ok(())
    }
}

/// A `[min, max]` range drawn from as-is.
fn span(field: &'static str, (min, max): Span) -> Result<(), ConfigError> {
    bounds(field, min, max)?;
    if min > max {
        return Err(ConfigError::InvalidRange { field, min, max });
    }
    Ok(())
}

/// Both ends of a uniform draw and the width between them must be finite
/// for the sampler to accept them.
fn bounds(field: &'static str, lo: f32, hi: f32) -> Result<(), ConfigError> {
    finite(field, &[lo, hi, hi - lo])
}

fn finite(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(ConfigError::NonFinite { field, value }),
        None => Ok(()),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Written so NaN is rejected too.
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    finite(field, &[value])
}

fn non_empty(field: &'static str, count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}
