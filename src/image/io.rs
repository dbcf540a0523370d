//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: decode a PNG/JPEG into an owned RGBA8 buffer.
//! - `save_region_overlay`: draw region outlines over the source image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgba8, CHANNELS};
use crate::error::{Error, Result};
use crate::types::{Region, RegionKind};
use image::{Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned, tightly packed RGBA8 buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaImageBuf {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImageBuf {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        ImageRgba8::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgba8` view
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8 {
            w: self.width,
            h: self.height,
            stride: self.width * CHANNELS,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImageBuf> {
    let img = image::open(path)?.into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaImageBuf::new(width, height, img.into_raw())
}

fn outline_color(kind: RegionKind) -> Rgba<u8> {
    match kind {
        RegionKind::Border => Rgba([230, 40, 40, 255]),
        RegionKind::Text => Rgba([40, 90, 230, 255]),
        RegionKind::Photo => Rgba([40, 190, 70, 255]),
    }
}

/// Draw a 1-pixel outline around every region, clipped to the canvas.
///
/// Regions may have been edited after detection, so bounds partly or wholly
/// outside the image are tolerated; the latter are skipped.
pub fn draw_region_outlines(out: &mut RgbaImage, regions: &[Region]) {
    let (w, h) = (out.width() as i64, out.height() as i64);
    if w == 0 || h == 0 {
        return;
    }
    for region in regions {
        let b = region.bounds;
        let x0 = b.x.floor() as i64;
        let y0 = b.y.floor() as i64;
        let x1 = (b.x + b.width).ceil() as i64 - 1;
        let y1 = (b.y + b.height).ceil() as i64 - 1;
        if x1 < x0 || y1 < y0 || x1 < 0 || y1 < 0 || x0 >= w || y0 >= h {
            continue;
        }
        let (x0, x1) = (x0.clamp(0, w - 1) as u32, x1.clamp(0, w - 1) as u32);
        let (y0, y1) = (y0.clamp(0, h - 1) as u32, y1.clamp(0, h - 1) as u32);
        let color = outline_color(region.kind);
        for x in x0..=x1 {
            out.put_pixel(x, y0, color);
            out.put_pixel(x, y1, color);
        }
        for y in y0..=y1 {
            out.put_pixel(x0, y, color);
            out.put_pixel(x1, y, color);
        }
    }
}

/// Save a copy of `source` with region outlines drawn over it.
pub fn save_region_overlay(source: &RgbaImageBuf, regions: &[Region], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = RgbaImage::from_raw(
        source.width as u32,
        source.height as u32,
        source.data.clone(),
    )
    .ok_or_else(|| Error::InvalidInput("overlay buffer does not match dimensions".to_string()))?;
    draw_region_outlines(&mut out, regions);
    out.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;

    fn region(kind: RegionKind, x: f32, y: f32, width: f32, height: f32) -> Region {
        Region {
            id: format!("{kind}-0"),
            kind,
            bounds: Bounds {
                x,
                y,
                width,
                height,
            },
            confidence: 1.0,
            layer_ids: Vec::new(),
        }
    }

    #[test]
    fn outlines_are_clipped_to_the_canvas() {
        let mut canvas = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        let regions = [
            region(RegionKind::Border, -10.0, 2.0, 15.0, 6.0),
            region(RegionKind::Text, 15.0, 15.0, 30.0, 30.0),
        ];
        draw_region_outlines(&mut canvas, &regions);
        let red = outline_color(RegionKind::Border);
        let blue = outline_color(RegionKind::Text);
        // Left edge clipped to column 0, right edge at x = 4.
        assert_eq!(*canvas.get_pixel(0, 4), red);
        assert_eq!(*canvas.get_pixel(4, 2), red);
        assert_eq!(*canvas.get_pixel(4, 7), red);
        assert_eq!(*canvas.get_pixel(5, 2), Rgba([0, 0, 0, 255]));
        // Bottom/right edges clipped to the last row and column.
        assert_eq!(*canvas.get_pixel(19, 19), blue);
        assert_eq!(*canvas.get_pixel(15, 17), blue);
    }

    #[test]
    fn regions_outside_the_canvas_are_skipped() {
        let mut canvas = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        let before = canvas.clone();
        let regions = [
            region(RegionKind::Photo, -10.0, 0.0, 5.0, 5.0),
            region(RegionKind::Photo, 25.0, 3.0, 5.0, 5.0),
            region(RegionKind::Photo, 3.0, -40.0, 5.0, 5.0),
            region(RegionKind::Photo, 3.0, 3.0, 0.0, 5.0),
        ];
        draw_region_outlines(&mut canvas, &regions);
        assert_eq!(canvas, before);
    }
}
