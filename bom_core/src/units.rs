//! # Stock Dimensions and Length Helpers
//!
//! Shared constants for the panel/trim stock the industry actually ships,
//! plus the small numeric helpers the calculators lean on.
//!
//! ## Design Philosophy
//!
//! All lengths are plain `f64` feet. The estimation formulas mix lengths,
//! counts and ratios freely, so newtype wrappers would add friction without
//! catching real mistakes here; instead the stock sizes live in one place
//! and every ceiling division goes through a guarded helper so degenerate
//! inputs (zero spacing, negative spans) clamp to zero instead of producing
//! NaN or Infinity.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::units::{ceil_div, format_ft_in, PANEL_MODULE_FT};
//!
//! // 50 ft of wall in 3 ft panel modules
//! assert_eq!(ceil_div(50.0, PANEL_MODULE_FT), 17);
//! assert_eq!(format_ft_in(16.25), "16' 3\"");
//! ```

/// Modular panel width: roof and wall sheets come 3 ft wide.
pub const PANEL_MODULE_FT: f64 = 3.0;

/// Longest panel that ships without a permit load.
pub const MAX_PANEL_LEN_FT: f64 = 31.0;

/// Trim stock length: all trim types are cut from 11 ft sticks.
pub const TRIM_STICK_FT: f64 = 11.0;

/// Edge allowance added to roof and vertical wall panels (1 ft 3 in).
pub const EDGE_ALLOWANCE_FT: f64 = 1.25;

/// Default effective coverage per sheet when the job does not override it.
pub const DEFAULT_PANEL_COVERAGE_FT: f64 = 3.0;

/// Guarded ceiling division.
///
/// Returns `ceil(numer / denom)` as a count, or 0 when either operand is
/// non-finite, the denominator is not positive, or the numerator is not
/// positive. Keeps zero-spacing and negative-dimension inputs from turning
/// into NaN/Infinity downstream.
pub fn ceil_div(numer: f64, denom: f64) -> u32 {
    if !numer.is_finite() || !denom.is_finite() || numer <= 0.0 || denom <= 0.0 {
        return 0;
    }
    (numer / denom).ceil() as u32
}

/// Round a length up to the next tenth of a foot.
///
/// The trim packer quotes linear feet at 0.1 ft resolution after applying
/// the waste factor.
pub fn round_up_tenth(feet: f64) -> f64 {
    if !feet.is_finite() || feet <= 0.0 {
        return 0.0;
    }
    (feet * 10.0).ceil() / 10.0
}

/// Format a decimal-feet length as feet and inches, e.g. `16.25` -> `16' 3"`.
pub fn format_ft_in(feet: f64) -> String {
    if !feet.is_finite() {
        return "0' 0\"".to_string();
    }
    let total_inches = (feet * 12.0).round() as i64;
    let ft = total_inches.div_euclid(12);
    let inches = total_inches.rem_euclid(12);
    format!("{}' {}\"", ft, inches)
}
