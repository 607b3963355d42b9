//! statsmap-rs
//!
//! The data side of a choropleth ("stats map") pipeline: resolve free-text
//! region names to canonical codes, and turn a region-keyed value set into
//! quantile color buckets. Pairs with the `statsmap` CLI.
//!
//! ### Features
//! - Per-country region sets (UA, MD, DE, NL, FR, BE, PL, EU) with static
//!   alias tables and qualifier-word stripping
//! - R-7 quantile bucket boundaries with legend-friendly rounding
//! - Threshold color scales with a distinct no-data fill
//! - Load/save of the `{title, valueName, data}` JSON envelope
//!
//! ### Example
//! ```
//! use statsmap_rs::regions::RegionSetId;
//! use statsmap_rs::scale::ThresholdScale;
//! use statsmap_rs::transform::resolve_data_keys;
//!
//! let ua = RegionSetId::Ukraine.get();
//! let raw = [
//!     ("Київська область".to_string(), 1.78),
//!     ("Львівська".to_string(), 2.51),
//!     ("Разом".to_string(), 4.29), // national total, no code: dropped
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolved = resolve_data_keys(ua, &raw);
//! assert_eq!(resolved.len(), 2);
//!
//! let values: Vec<f64> = resolved.values().copied().collect();
//! let scale = ThresholdScale::quantile(&values, 5);
//! let fill = scale.color_for(resolved.values().next().copied());
//! println!("{fill}");
//! ```

pub mod models;
pub mod regions;
pub mod resolve;
pub mod scale;
pub mod storage;
pub mod thresholds;
pub mod transform;

pub use models::{MapData, RegionCode};
pub use regions::RegionSetId;
pub use resolve::RegionSet;
pub use scale::{Rgb, ThresholdScale};
pub use thresholds::quantile_thresholds;
pub use transform::resolve_data_keys;
