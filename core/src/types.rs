use serde::{Deserialize, Serialize};

/// Whole seconds, used for elapsed bake time and band thresholds.
pub type Seconds = u64;

/// A bake is ended automatically once it reaches this many elapsed seconds.
pub const BAKE_LIMIT_SECS: Seconds = 30;

/// Color with every component in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RAW_DOUGH: Rgba = Rgba::opaque(1.0, 0.9373, 0.8471);
    pub const WARMING: Rgba = Rgba::opaque(1.0, 0.8627, 0.6588);
    pub const GOLDEN: Rgba = Rgba::opaque(0.9176, 0.6275, 0.2745);
    pub const CRISPY: Rgba = Rgba::opaque(0.7098, 0.5294, 0.0);
    pub const BURNT: Rgba = Rgba::opaque(0.5294, 0.3216, 0.0353);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Quantizes the color channels to bytes, clamping out-of-range components.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn quantize(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::RAW_DOUGH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_dough_quantizes_to_bytes() {
        assert_eq!(Rgba::RAW_DOUGH.to_rgba8(), [255, 239, 216, 255]);
    }

    #[test]
    fn quantize_clamps_out_of_range_channels() {
        assert_eq!(Rgba::new(-1.0, 2.0, 0.5, 1.0).to_rgba8(), [0, 255, 128, 255]);
    }
}
