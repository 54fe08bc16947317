//! Reduces a pixel grid to its mean color
//!
//! The mean is the similarity proxy used everywhere in the mosaic: tiles are
//! summarized once when the library is loaded, target blocks once each when
//! they are matched.

use image::{GenericImageView, Rgb};

/// Real-valued RGB triple holding channel means
///
/// Values are not clamped or rounded; they only feed distance comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Mean red channel value
    pub red: f64,
    /// Mean green channel value
    pub green: f64,
    /// Mean blue channel value
    pub blue: f64,
}

impl Color {
    /// Create a color from its channel values
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Sum of squared per-channel differences
    ///
    /// The square root is never taken since only relative ordering matters.
    pub fn squared_distance(&self, other: &Self) -> f64 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        db.mul_add(db, dr.mul_add(dr, dg * dg))
    }

    /// Channels as an array in RGB order
    pub const fn to_array(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[f64; 3]> for Color {
    fn from([red, green, blue]: [f64; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self::new(f64::from(red), f64::from(green), f64::from(blue))
    }
}

/// Compute the per-channel arithmetic mean over every pixel of `grid`
///
/// Sums are accumulated in `u64`, which cannot overflow for any image the
/// `image` crate can represent. Returns `None` for a grid with no pixels.
pub fn summarize<I>(grid: &I) -> Option<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = grid.dimensions();
    let area = u64::from(width) * u64::from(height);
    if area == 0 {
        return None;
    }

    let mut sums = [0u64; 3];
    for (_, _, pixel) in grid.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }

    let count = area as f64;
    let [red, green, blue] = sums.map(|sum| sum as f64 / count);
    Some(Color::new(red, green, blue))
}
