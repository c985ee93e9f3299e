//! # Screw Counts
//!
//! Fastener counts per sheet and per linear foot of trim, bagged into
//! 250-count units.

use serde::{Deserialize, Serialize};

/// Screws per bag as purchased.
pub const SCREWS_PER_BAG: u32 = 250;

/// Screw takeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrewCount {
    pub total: u32,
    pub bags: u32,
}

/// Support lines per sheet, derived from panel gauge.
///
/// Thinner (higher-gauge) material needs more fastening points; the mapping
/// is a rule of thumb, not a structural spec.
pub fn supports_per_sheet(gauge: u32) -> u32 {
    if gauge <= 16 {
        6
    } else if gauge <= 22 {
        8
    } else {
        10
    }
}

/// Roof screws: 5 per support line per sheet.
pub fn count_roof_screws(sheet_count: u32, supports_per_sheet: u32) -> ScrewCount {
    let total = sheet_count * supports_per_sheet * 5;
    ScrewCount {
        total,
        bags: total.div_ceil(SCREWS_PER_BAG),
    }
}

/// Roof screws with the support count derived from gauge.
pub fn count_roof_screws_by_gauge(sheet_count: u32, gauge: u32) -> ScrewCount {
    count_roof_screws(sheet_count, supports_per_sheet(gauge))
}

/// Trim screws: 3 per support contact along the trim run.
pub fn count_trim_screws(total_lf: f64, supports_per_lf: f64) -> ScrewCount {
    let contacts = if total_lf.is_finite() && supports_per_lf.is_finite() {
        (total_lf * supports_per_lf).max(0.0)
    } else {
        0.0
    };
    let total = (contacts * 3.0).ceil() as u32;
    ScrewCount {
        total,
        bags: total.div_ceil(SCREWS_PER_BAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_per_sheet_mapping() {
        assert_eq!(supports_per_sheet(12), 6);
        assert_eq!(supports_per_sheet(16), 6);
        assert_eq!(supports_per_sheet(18), 8);
        assert_eq!(supports_per_sheet(22), 8);
        assert_eq!(supports_per_sheet(26), 10);
        assert_eq!(supports_per_sheet(29), 10);
    }

    #[test]
    fn test_roof_screws() {
        // 34 sheets x 10 supports x 5 = 1700 screws -> 7 bags
        let s = count_roof_screws_by_gauge(34, 26);
        assert_eq!(s.total, 1700);
        assert_eq!(s.bags, 7);
    }

    #[test]
    fn test_zero_sheets() {
        let s = count_roof_screws_by_gauge(0, 29);
        assert_eq!(s.total, 0);
        assert_eq!(s.bags, 0);
    }

    #[test]
    fn test_trim_screws() {
        // 104 lf x 2 supports/lf x 3 = 624 screws -> 3 bags
        let s = count_trim_screws(104.0, 2.0);
        assert_eq!(s.total, 624);
        assert_eq!(s.bags, 3);
    }

    #[test]
    fn test_trim_screws_degenerate() {
        assert_eq!(count_trim_screws(-50.0, 2.0).total, 0);
        assert_eq!(count_trim_screws(f64::NAN, 2.0).total, 0);
    }
}
