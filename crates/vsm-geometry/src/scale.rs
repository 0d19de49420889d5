//! Depth scaling for edge length, marker size and color.
//!
//! All three shrink or shift monotonically with layer:
//! - edge length: `base_length / (layer + 2)`, strictly decreasing toward 0
//! - marker size: `max(base_size / (layer + 1), size_floor)`, never below the floor
//! - color value: `clamp(layer / saturation_depth, 0, 1)` on a viridis scale
//!
//! The color saturates at `saturation_depth`: every node at or below that
//! depth shares the terminal color of the scale.

use crate::{Error, Result};

/// Parameters for the depth-scaled functions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleConfig {
    /// Edge length numerator
    pub base_length: f64,
    /// Marker size at the root
    pub base_size: f64,
    /// Smallest marker size, so deep nodes stay selectable
    pub size_floor: f64,
    /// Layer at which the color scale reaches its terminal color
    pub saturation_depth: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            base_length: 1.0,
            base_size: 500.0,
            size_floor: 50.0,
            saturation_depth: 10,
        }
    }
}

impl ScaleConfig {
    /// Radius of the polygon on which a layer-`layer` node places its children.
    pub fn edge_length(&self, layer: u32) -> f64 {
        self.base_length / (f64::from(layer) + 2.0)
    }

    /// Marker area for a node at `layer`.
    pub fn marker_size(&self, layer: u32) -> f64 {
        (self.base_size / (f64::from(layer) + 1.0)).max(self.size_floor)
    }

    /// Position on the color scale for a node at `layer`, in `[0, 1]`.
    pub fn color_value(&self, layer: u32) -> f64 {
        if self.saturation_depth == 0 {
            return 1.0;
        }
        (f64::from(layer) / f64::from(self.saturation_depth)).clamp(0.0, 1.0)
    }

    /// Color for a node at `layer`.
    pub fn color(&self, layer: u32) -> Rgba {
        // color_value is always finite and clamped
        Rgba::viridis(self.color_value(layer)).unwrap_or_else(|_| Rgba::viridis_end())
    }
}

/// Edge length under the default configuration.
pub fn edge_length(layer: u32) -> f64 {
    ScaleConfig::default().edge_length(layer)
}

/// Marker size under the default configuration.
pub fn marker_size(layer: u32) -> f64 {
    ScaleConfig::default().marker_size(layer)
}

/// Color scale value under the default configuration.
pub fn color_value(layer: u32) -> f64 {
    ScaleConfig::default().color_value(layer)
}

/// Color under the default configuration.
pub fn color_for_layer(layer: u32) -> Rgba {
    ScaleConfig::default().color(layer)
}

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Viridis sampled at nine evenly spaced stops (sRGB, 0-255).
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

impl Rgba {
    /// First color of the viridis scale.
    pub fn viridis_start() -> Self {
        Self::from_rgb8(VIRIDIS[0])
    }

    /// Terminal color of the viridis scale.
    pub fn viridis_end() -> Self {
        Self::from_rgb8(VIRIDIS[VIRIDIS.len() - 1])
    }

    fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Sample the viridis scale at `t`. Values outside `[0, 1]` clamp to
    /// the ends; NaN and infinities are rejected.
    pub fn viridis(t: f64) -> Result<Self> {
        if !t.is_finite() {
            return Err(Error::InvalidColorValue(t));
        }
        let t = t.clamp(0.0, 1.0);
        let segments = (VIRIDIS.len() - 1) as f64;
        let pos = t * segments;
        let lower = pos.floor() as usize;
        if lower >= VIRIDIS.len() - 1 {
            return Ok(Self::viridis_end());
        }
        let frac = (pos - lower as f64) as f32;

        let a = Self::from_rgb8(VIRIDIS[lower]);
        let b = Self::from_rgb8(VIRIDIS[lower + 1]);
        Ok(Self {
            r: a.r + (b.r - a.r) * frac,
            g: a.g + (b.g - a.g) * frac,
            b: a.b + (b.b - a.b) * frac,
            a: 1.0,
        })
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` hex string (alpha dropped).
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Components quantized to bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn edge_length_values() {
        assert_eq!(edge_length(0), 0.5);
        assert!((edge_length(1) - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(edge_length(8), 0.1);
    }

    #[test]
    fn marker_size_values() {
        assert_eq!(marker_size(0), 500.0);
        assert_eq!(marker_size(1), 250.0);
        assert_eq!(marker_size(9), 50.0);
        assert_eq!(marker_size(100), 50.0);
    }

    #[test]
    fn color_value_saturates() {
        assert_eq!(color_value(0), 0.0);
        assert_eq!(color_value(5), 0.5);
        assert_eq!(color_value(10), 1.0);
        assert_eq!(color_value(42), 1.0);
    }

    #[test]
    fn deep_layers_share_terminal_color() {
        assert_eq!(color_for_layer(10), Rgba::viridis_end());
        assert_eq!(color_for_layer(11), color_for_layer(10_000));
        assert_eq!(color_for_layer(0), Rgba::viridis_start());
    }

    #[test]
    fn zero_saturation_depth_is_terminal() {
        let config = ScaleConfig {
            saturation_depth: 0,
            ..ScaleConfig::default()
        };
        assert_eq!(config.color_value(0), 1.0);
    }

    #[test]
    fn viridis_rejects_nan() {
        assert_eq!(
            Rgba::viridis(f64::INFINITY).unwrap_err(),
            Error::InvalidColorValue(f64::INFINITY)
        );
        assert!(Rgba::viridis(f64::NAN).is_err());
    }

    #[test]
    fn viridis_hits_stops() {
        assert_eq!(Rgba::viridis(0.5).unwrap().to_rgba8(), [33, 144, 141, 255]);
        assert_eq!(Rgba::viridis(-3.0).unwrap(), Rgba::viridis_start());
    }

    #[test]
    fn hex_string() {
        assert_eq!(Rgba::viridis_start().to_hex(), "#440154");
        assert_eq!(Rgba::viridis_end().to_hex(), "#fde725");
    }

    proptest! {
        #[test]
        fn edge_length_strictly_decreasing(layer in 0u32..100_000) {
            let here = edge_length(layer);
            prop_assert!(here > 0.0);
            prop_assert!(edge_length(layer + 1) < here);
        }

        #[test]
        fn marker_size_non_increasing_with_floor(layer in 0u32..100_000) {
            let here = marker_size(layer);
            prop_assert!(here >= 50.0);
            prop_assert!(marker_size(layer + 1) <= here);
        }

        #[test]
        fn color_value_in_unit_range(layer in any::<u32>()) {
            let v = color_value(layer);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
