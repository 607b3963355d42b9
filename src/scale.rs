//! Threshold color scales: the consumer-facing contract that joins the
//! quantile boundaries with a color list.

use crate::thresholds::quantile_thresholds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default sequential palette (emerald ramp, light to dark).
pub const DEFAULT_PALETTE: [Rgb; 5] = [
    Rgb::new(0x34, 0xd3, 0x99),
    Rgb::new(0x10, 0xb9, 0x81),
    Rgb::new(0x05, 0x96, 0x69),
    Rgb::new(0x04, 0x78, 0x57),
    Rgb::new(0x06, 0x5f, 0x46),
];

/// Fill used for regions absent from the dataset. Never part of the ramp.
pub const NO_DATA_COLOR: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);

/// Opaque RGB color, formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| ((a as f64) + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hex color {0:?}, expected #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let byte = |r: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[r], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Evenly spaced ramp of `steps` colors from `start` to `end`, inclusive.
pub fn color_ramp(start: Rgb, end: Rgb, steps: usize) -> Vec<Rgb> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..steps)
            .map(|i| start.lerp(end, i as f64 / (steps - 1) as f64))
            .collect(),
    }
}

/// A step scale: N−1 ascending thresholds select among N colors.
///
/// A value maps to `colors[k]` where `k` counts the thresholds ≤ the value,
/// so anything below the first threshold gets `colors[0]` and anything at or
/// above the last gets the final color. A missing value always maps to the
/// no-data fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    thresholds: Vec<f64>,
    colors: Vec<Rgb>,
    no_data: Rgb,
}

impl ThresholdScale {
    /// Build a scale from explicit boundaries and colors.
    ///
    /// `colors` must hold exactly `thresholds.len() + 1` entries. Thresholds
    /// are re-sorted here: computed boundaries arrive ascending already, but
    /// user-supplied overrides carry no such guarantee.
    pub fn new(mut thresholds: Vec<f64>, colors: Vec<Rgb>, no_data: Rgb) -> Self {
        debug_assert_eq!(colors.len(), thresholds.len() + 1);
        thresholds.sort_by(f64::total_cmp);
        Self {
            thresholds,
            colors,
            no_data,
        }
    }

    /// Quantile scale over the given values using the default green ramp.
    ///
    /// With an empty (or all-NaN) value set there are no boundaries and the
    /// whole map falls back to the single lightest ramp color.
    pub fn quantile(values: &[f64], buckets: usize) -> Self {
        let thresholds = quantile_thresholds(values, buckets);
        let colors = if buckets == DEFAULT_PALETTE.len() && thresholds.len() + 1 == buckets {
            DEFAULT_PALETTE.to_vec()
        } else {
            color_ramp(DEFAULT_PALETTE[0], DEFAULT_PALETTE[4], thresholds.len() + 1)
        };
        Self::new(thresholds, colors, NO_DATA_COLOR)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn no_data_color(&self) -> Rgb {
        self.no_data
    }

    /// Color for a region's value; `None` (region absent from the dataset)
    /// gets the no-data fill.
    pub fn color_for(&self, value: Option<f64>) -> Rgb {
        let Some(v) = value else { return self.no_data };
        let k = self.thresholds.iter().filter(|t| **t <= v).count();
        self.colors[k]
    }
}
