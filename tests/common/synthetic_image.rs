#![allow(dead_code)]

use card_regions::ImageRgba8;

/// Owned RGBA8 test canvas.
pub struct Canvas {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl Canvas {
    pub fn filled(w: usize, h: usize, v: u8) -> Self {
        assert!(w > 0 && h > 0, "image dimensions must be positive");
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        Self { w, h, data }
    }

    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = (y * self.w + x) * 4;
        self.data[i..i + 3].copy_from_slice(&[v, v, v]);
    }

    pub fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, v: u8) {
        for y in y0..(y0 + h).min(self.h) {
            for x in x0..(x0 + w).min(self.w) {
                self.set(x, y, v);
            }
        }
    }

    /// Outline of a rectangle, `t` pixels thick.
    pub fn stroke_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, t: usize, v: u8) {
        self.fill_rect(x0, y0, w, t, v);
        self.fill_rect(x0, y0 + h - t, w, t, v);
        self.fill_rect(x0, y0, t, h, v);
        self.fill_rect(x0 + w - t, y0, t, h, v);
    }

    /// A connected "line of print": a baseline with evenly spaced stems.
    pub fn text_line(&mut self, x0: usize, y0: usize, width: usize, height: usize, v: u8) {
        self.fill_rect(x0, y0 + height - 3, width, 3, v);
        let mut x = x0;
        while x + 3 <= x0 + width {
            self.fill_rect(x, y0, 3, height, v);
            x += 12;
        }
    }

    pub fn view(&self) -> ImageRgba8<'_> {
        ImageRgba8::new(self.w, self.h, &self.data).expect("valid canvas")
    }
}

/// White canvas with one solid black square.
pub fn square_on_white(size: usize, x0: usize, y0: usize, side: usize) -> Canvas {
    let mut c = Canvas::filled(size, size, 255);
    c.fill_rect(x0, y0, side, side, 0);
    c
}

/// High-contrast checkerboard.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> Canvas {
    assert!(cell > 0, "cell size must be positive");
    let mut c = Canvas::filled(width, height, 0);
    for y in 0..height {
        for x in 0..width {
            let val = if ((x / cell) + (y / cell)) & 1 == 0 { 32u8 } else { 220u8 };
            c.set(x, y, val);
        }
    }
    c
}

/// Deterministic per-pixel noise in `[lo, hi)`.
pub fn noise(width: usize, height: usize, lo: u8, hi: u8, seed: u32) -> Canvas {
    let mut c = Canvas::filled(width, height, lo);
    let mut state = seed.max(1);
    let span = (hi - lo) as u32;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            c.set(x, y, lo + (state % span) as u8);
        }
    }
    c
}

/// Portrait card mock-up: dark frame, outlined art window, a mid-gray flat
/// panel and a line of print.
pub fn card(width: usize, height: usize) -> Canvas {
    let mut c = Canvas::filled(width, height, 235);
    c.stroke_rect(0, 0, width, height, 10, 30);
    c.stroke_rect(24, 30, width - 48, height / 2, 2, 0);
    c.fill_rect(60, height / 2 + 50, width - 120, 40, 150);
    c.text_line(40, height - 60, 150, 18, 10);
    c
}
