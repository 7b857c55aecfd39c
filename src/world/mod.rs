// world/ - Wave math
//
// Pure functions that shape the water surface.
// No state, no allocation - just math.

mod waves;
mod wake;

pub use waves::*;
pub use wake::*;
