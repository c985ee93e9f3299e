//! # Framing Counts
//!
//! Truss, leg and brace counts from span and spacing. These are takeoff
//! quantities for pricing, not load engineering — bracing in particular is a
//! rule-of-thumb estimate.

/// Number of trusses for a run of `length_ft` at `spacing_ft` on-center.
///
/// `ceil(length / spacing) + 1`; the `+1` is the closing truss at the far
/// end of the run. Zero or degenerate dimensions produce zero trusses.
///
/// # Example
///
/// ```rust
/// use bom_core::calculations::framing::truss_count;
///
/// assert_eq!(truss_count(50.0, 5.0), 11);
/// ```
pub fn truss_count(length_ft: f64, spacing_ft: f64) -> u32 {
    if !spacing_ft.is_finite() || spacing_ft <= 0.0 {
        return 0;
    }
    if !length_ft.is_finite() || length_ft <= 0.0 {
        return 0;
    }
    (length_ft / spacing_ft).ceil() as u32 + 1
}

/// Two legs per truss.
pub fn leg_count(trusses: u32) -> u32 {
    trusses * 2
}

/// Estimate brace count from footprint and leg height.
///
/// Rule of thumb: two braces per ~20 ft bay, extra bracing for buildings
/// wider than 30 ft, and one more per bay once legs pass 12 ft. An
/// estimate for material takeoff, not a structural guarantee.
pub fn estimate_braces(width_ft: f64, length_ft: f64, leg_height_ft: f64) -> u32 {
    let bays = if length_ft.is_finite() && length_ft > 0.0 {
        ((length_ft / 20.0).ceil() as u32).max(1)
    } else {
        1
    };
    let mut base = bays * 2;
    if width_ft.is_finite() && width_ft > 30.0 {
        base += ((width_ft - 30.0) / 20.0).ceil() as u32;
    }
    if leg_height_ft > 12.0 {
        base += bays;
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truss_count_basic() {
        assert_eq!(truss_count(50.0, 5.0), 11);
        assert_eq!(truss_count(20.0, 5.0), 5);
        assert_eq!(truss_count(21.0, 5.0), 6);
    }

    #[test]
    fn test_truss_count_degenerate() {
        assert_eq!(truss_count(50.0, 0.0), 0);
        assert_eq!(truss_count(50.0, -5.0), 0);
        assert_eq!(truss_count(0.0, 5.0), 0);
        assert_eq!(truss_count(f64::NAN, 5.0), 0);
    }

    #[test]
    fn test_leg_count() {
        assert_eq!(leg_count(11), 22);
        assert_eq!(leg_count(0), 0);
    }

    #[test]
    fn test_estimate_braces_small_building() {
        // 20x20x10: one bay -> 2 braces
        assert_eq!(estimate_braces(20.0, 20.0, 10.0), 2);
    }

    #[test]
    fn test_estimate_braces_wide_and_tall() {
        // 40x50x14: 3 bays -> 6, +1 for width over 30, +3 for tall legs
        assert_eq!(estimate_braces(40.0, 50.0, 14.0), 10);
    }

    #[test]
    fn test_estimate_braces_zero_length() {
        // degenerate length still counts a single bay
        assert_eq!(estimate_braces(20.0, 0.0, 10.0), 2);
    }
}
