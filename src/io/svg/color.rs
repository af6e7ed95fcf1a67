//! Color mapping utilities for SVG visualization.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Component-wise linear blend, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Viridis stops at t = 0, 0.1, ..., 1.0.
const VIRIDIS: [Rgb; 11] = [
    Rgb::new(0x44, 0x01, 0x54),
    Rgb::new(0x48, 0x28, 0x78),
    Rgb::new(0x3e, 0x4a, 0x89),
    Rgb::new(0x31, 0x68, 0x8e),
    Rgb::new(0x26, 0x82, 0x8e),
    Rgb::new(0x1f, 0x9e, 0x89),
    Rgb::new(0x35, 0xb7, 0x79),
    Rgb::new(0x6d, 0xcd, 0x59),
    Rgb::new(0xb4, 0xde, 0x2c),
    Rgb::new(0xd8, 0xe2, 0x19),
    Rgb::new(0xfd, 0xe7, 0x25),
];

/// Viridis ramp for `t` in [0, 1]. Non-finite input maps to the low end.
pub fn viridis(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    VIRIDIS[lo].lerp(VIRIDIS[hi], pos - lo as f64)
}

/// Linear continuous scale from `min..=max` onto a color ramp.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Position of `value` in [0, 1]. A degenerate range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 { ((value - self.min) / range).clamp(0.0, 1.0) } else { 0.0 }
    }

    pub fn color(&self, value: f64) -> Rgb { viridis(self.normalize(value)) }
}

/// Categorical palette for bars (bright, high saturation).
const BRIGHT: [Rgb; 10] = [
    Rgb::new(0x02, 0x3e, 0xff),
    Rgb::new(0xff, 0x7c, 0x00),
    Rgb::new(0x1a, 0xc9, 0x38),
    Rgb::new(0xe8, 0x00, 0x0b),
    Rgb::new(0x8b, 0x2b, 0xe2),
    Rgb::new(0x9f, 0x48, 0x00),
    Rgb::new(0xf1, 0x4c, 0xc1),
    Rgb::new(0xa3, 0xa3, 0xa3),
    Rgb::new(0xff, 0xc4, 0x00),
    Rgb::new(0x00, 0xd7, 0xff),
];

/// Cycle through the bright palette.
pub fn bright(index: usize) -> Rgb { BRIGHT[index % BRIGHT.len()] }

/// Series colors for scatter and box marks.
const SERIES: [Rgb; 4] = [
    Rgb::new(0x63, 0x6e, 0xfa),
    Rgb::new(0xef, 0x55, 0x3b),
    Rgb::new(0x00, 0xcc, 0x96),
    Rgb::new(0xab, 0x63, 0xfa),
];

pub fn series(index: usize) -> Rgb { SERIES[index % SERIES.len()] }
