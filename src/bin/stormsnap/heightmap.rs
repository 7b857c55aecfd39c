// heightmap.rs - Water surface to grayscale image

use std::path::Path;

use image::{GrayImage, ImageResult, Luma};
use storm_engine::sim::WaterSurface;

/// One pixel per vertex, heights stretched over the frame's own min..max.
pub fn to_image(water: &WaterSurface) -> GrayImage {
    let side = water.side() as u32;
    let (lo, hi) = water
        .heights()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), h| (lo.min(h), hi.max(h)));
    let span = (hi - lo).max(f32::EPSILON);

    GrayImage::from_fn(side, side, |x, y| {
        let h = water.height(x as usize, y as usize);
        Luma([(((h - lo) / span) * 255.0).round() as u8])
    })
}

pub fn write_png(water: &WaterSurface, path: &Path) -> ImageResult<()> {
    to_image(water).save(path)
}
