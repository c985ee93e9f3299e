//! # Roof Panel Counts
//!
//! Sheet count and sheet length for a gabled roof skinned with 3 ft modular
//! panels running eave-to-ridge on both slopes.

use serde::{Deserialize, Serialize};

use crate::units::{ceil_div, EDGE_ALLOWANCE_FT, MAX_PANEL_LEN_FT, PANEL_MODULE_FT};

/// Roof sheet takeoff for one structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofPanels {
    /// Total sheets across both slopes.
    pub total_sheets: u32,
    /// Cut length of each sheet in feet (half-span plus eave overhang).
    pub panel_len_ft: f64,
    /// Sheet length is past the 31 ft shipping limit. Callers surface this
    /// as a warning, never an error.
    pub exceeds_max_length: bool,
}

/// Compute roof sheets for a `width_ft` x `length_ft` footprint.
///
/// Two runs of 3 ft sheets (left and right of the ridge) cover the building
/// length plus a 1 ft overlap allowance; each sheet spans half the width
/// plus a 1 ft 3 in eave overhang.
///
/// # Example
///
/// ```rust
/// use bom_core::calculations::roof::roof_panel_sheets;
///
/// let roof = roof_panel_sheets(30.0, 50.0);
/// assert_eq!(roof.total_sheets, 34);
/// assert_eq!(roof.panel_len_ft, 16.25);
/// assert!(!roof.exceeds_max_length);
/// ```
pub fn roof_panel_sheets(width_ft: f64, length_ft: f64) -> RoofPanels {
    let length = if length_ft.is_finite() { length_ft.max(0.0) } else { 0.0 };
    let width = if width_ft.is_finite() { width_ft.max(0.0) } else { 0.0 };

    let total_sheets = ceil_div(length + 1.0, PANEL_MODULE_FT) * 2;
    let panel_len_ft = width / 2.0 + EDGE_ALLOWANCE_FT;

    RoofPanels {
        total_sheets,
        panel_len_ft,
        exceeds_max_length: panel_len_ft > MAX_PANEL_LEN_FT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_30() {
        let roof = roof_panel_sheets(30.0, 50.0);
        assert_eq!(roof.panel_len_ft, 16.25);
        assert!(!roof.exceeds_max_length);
        // ceil(51/3) * 2 = 17 * 2
        assert_eq!(roof.total_sheets, 34);
    }

    #[test]
    fn test_shipping_limit() {
        // panel_len = w/2 + 1.25 > 31 once w > 59.5
        assert!(!roof_panel_sheets(59.5, 40.0).exceeds_max_length);
        assert!(roof_panel_sheets(60.0, 40.0).exceeds_max_length);
    }

    #[test]
    fn test_length_overlap_allowance() {
        // exactly divisible: (20+1)/3 = 7 per slope
        assert_eq!(roof_panel_sheets(20.0, 20.0).total_sheets, 14);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let roof = roof_panel_sheets(0.0, 0.0);
        assert_eq!(roof.panel_len_ft, EDGE_ALLOWANCE_FT);
        assert!(!roof.exceeds_max_length);
        let roof = roof_panel_sheets(-10.0, f64::NAN);
        assert_eq!(roof.total_sheets, 2);
        assert_eq!(roof.panel_len_ft, EDGE_ALLOWANCE_FT);
    }
}
