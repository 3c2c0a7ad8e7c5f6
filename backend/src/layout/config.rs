//! Layout constants shared by the forward and inverse mappings.

use serde::{Deserialize, Serialize};

/// Geometry of the yearly arcs and of the per-day glyph clusters.
///
/// Every field has a default so a `[layout]` table in the configuration file
/// only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius the scale factor is applied to.
    pub base_radius: f64,
    /// Multiplies `base_radius` to get the arc radius.
    pub arc_radius_scale: f64,
    /// Vertical offset of the arc centre.
    pub arc_base_height: f64,
    /// Horizontal spacing between weekday columns.
    pub day_spread: f64,
    /// Spacing between consecutive year arcs, in multiples of one week's width.
    pub year_arc_spacing_factor: f64,
    /// Scatter sphere radius per `ln(count + 1)`.
    pub scatter_factor: f64,
    pub base_star_scale: f64,
    pub star_scale_min: f64,
    pub star_scale_max: f64,
    /// Upper bound on the number of star instances produced per layout.
    pub max_stars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 200.0,
            arc_radius_scale: 2.5,
            arc_base_height: 5.0,
            day_spread: 60.0,
            year_arc_spacing_factor: 1.2,
            scatter_factor: 5.5,
            base_star_scale: 2.5,
            star_scale_min: 0.4,
            star_scale_max: 1.6,
            max_stars: 100_000,
        }
    }
}

impl LayoutConfig {
    /// Radius of every yearly half-circle.
    pub fn arc_radius(&self) -> f64 {
        self.base_radius * self.arc_radius_scale
    }

    /// Horizontal distance between two consecutive year arcs.
    pub fn arc_spacing(&self) -> f64 {
        self.day_spread * 7.0 * self.year_arc_spacing_factor
    }

    /// Check that the geometry is usable by the inverse mapping.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("base_radius", self.base_radius),
            ("arc_radius_scale", self.arc_radius_scale),
            ("day_spread", self.day_spread),
            ("year_arc_spacing_factor", self.year_arc_spacing_factor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("layout.{} must be a positive number, got {}", name, value));
            }
        }

        if !self.arc_base_height.is_finite() {
            return Err(format!("layout.arc_base_height must be finite, got {}", self.arc_base_height));
        }

        let non_negative = [
            ("scatter_factor", self.scatter_factor),
            ("base_star_scale", self.base_star_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("layout.{} must be a finite, non-negative number, got {}", name, value));
            }
        }

        if !(self.star_scale_min > 0.0 && self.star_scale_min < self.star_scale_max && self.star_scale_max.is_finite()) {
            return Err(format!(
                "layout.star_scale_min ({}) must be positive and below star_scale_max ({})",
                self.star_scale_min, self.star_scale_max
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = LayoutConfig::default();
        assert_eq!(config.arc_radius(), 500.0);
        assert!((config.arc_spacing() - 504.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LayoutConfig = toml::from_str("day_spread = 30.0\narc_base_height = -2.0").unwrap();
        assert_eq!(config.day_spread, 30.0);
        assert_eq!(config.arc_base_height, -2.0);
        assert_eq!(config.arc_radius_scale, 2.5);
        assert_eq!(config.max_stars, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_spacing() {
        let config = LayoutConfig {
            day_spread: 0.0,
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("day_spread"));

        let config = LayoutConfig {
            year_arc_spacing_factor: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_scale_range() {
        let config = LayoutConfig {
            star_scale_min: 2.0,
            star_scale_max: 1.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
