// waves.rs - Ambient swell and ripple wave packets
//
// A ripple is a sine packet riding on an expanding ring. Its amplitude
// decays linearly with age and a Gaussian envelope keeps it close to
// the wavefront.

use std::f32::consts::TAU;

/// Two crossed travelling sinusoids, present everywhere regardless of rain.
#[derive(Clone, Copy, Debug)]
pub struct Swell {
    pub amplitude: [f32; 2],
    pub frequency: [f32; 2],
    pub speed: [f32; 2],
}

impl Swell {
    #[inline]
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.amplitude[0] * (x * self.frequency[0] + t * self.speed[0]).sin()
            + self.amplitude[1] * (z * self.frequency[1] + t * self.speed[1]).cos()
    }
}

/// Shape constants shared by every ripple packet.
#[derive(Clone, Copy, Debug)]
pub struct Envelope {
    /// Support half-width in wavelengths.
    pub width: f32,
    /// Gaussian width in wavelengths.
    pub decay: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self { width: 1.5, decay: 0.8 }
    }
}

/// Radius reached by a wavefront travelling `max_radius` in `duration`.
#[inline]
pub fn wavefront_radius(max_radius: f32, duration: f32, age: f32) -> f32 {
    (max_radius / duration) * age
}

/// Height of a packet at signed distance `offset` from its wavefront.
///
/// Zero outside `|offset| < wavelength * envelope.width`.
#[inline]
pub fn packet(offset: f32, wavelength: f32, amplitude: f32, envelope: Envelope) -> f32 {
    if offset.abs() >= wavelength * envelope.width {
        return 0.0;
    }
    let phase = offset / wavelength * TAU;
    let g = offset / (wavelength * envelope.decay);
    amplitude * phase.sin() * (-g * g).exp()
}
