//! # Anchor Counts
//!
//! Foundation- and gauge-dependent anchor hardware per structure.

use serde::{Deserialize, Serialize};

use crate::job::Foundation;

/// Anchor hardware family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    None,
    Rebar,
    Wedge,
    AsphaltKit,
}

impl AnchorKind {
    /// BOM item label (matches the serialized identifier).
    pub fn label(self) -> &'static str {
        match self {
            AnchorKind::None => "none",
            AnchorKind::Rebar => "rebar",
            AnchorKind::Wedge => "wedge",
            AnchorKind::AsphaltKit => "asphalt_kit",
        }
    }
}

/// Anchor takeoff for one structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchors {
    pub kind: AnchorKind,
    pub qty: u32,
    /// Anchors per leg; zero for packaged kits.
    pub per_leg: u32,
}

/// Count anchors for `legs` on the given foundation.
///
/// - Bare ground gets rebar stakes: 4 per leg for heavy gauge
///   (`gauge <= 18`) or wide (`width > 40 ft`) buildings, else 2.
/// - Concrete gets wedge anchors, 4 per leg (one per base-plate corner).
/// - Asphalt gets packaged kits, one per ~10 legs.
///
/// # Example
///
/// ```rust
/// use bom_core::calculations::anchors::{count_anchors_detailed, AnchorKind};
/// use bom_core::job::Foundation;
///
/// let a = count_anchors_detailed(6, Foundation::Bare, 24, 20.0);
/// assert_eq!(a.kind, AnchorKind::Rebar);
/// assert_eq!(a.qty, 12);
/// ```
pub fn count_anchors_detailed(
    legs: u32,
    foundation: Foundation,
    gauge: u32,
    width_ft: f64,
) -> Anchors {
    if legs == 0 {
        return Anchors {
            kind: AnchorKind::None,
            qty: 0,
            per_leg: 0,
        };
    }

    match foundation {
        Foundation::Bare => {
            let per_leg = if gauge <= 18 || width_ft > 40.0 { 4 } else { 2 };
            Anchors {
                kind: AnchorKind::Rebar,
                qty: legs * per_leg,
                per_leg,
            }
        }
        Foundation::Concrete => Anchors {
            kind: AnchorKind::Wedge,
            qty: legs * 4,
            per_leg: 4,
        },
        Foundation::Asphalt => Anchors {
            kind: AnchorKind::AsphaltKit,
            qty: legs.div_ceil(10),
            per_leg: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_legs_no_anchors() {
        let a = count_anchors_detailed(0, Foundation::Bare, 24, 20.0);
        assert_eq!(a.kind, AnchorKind::None);
        assert_eq!(a.qty, 0);
        assert_eq!(a.per_leg, 0);
    }

    #[test]
    fn test_bare_light_gauge_narrow() {
        let a = count_anchors_detailed(6, Foundation::Bare, 24, 20.0);
        assert_eq!(a.kind, AnchorKind::Rebar);
        assert_eq!(a.qty, 12);
        assert_eq!(a.per_leg, 2);
    }

    #[test]
    fn test_bare_heavy_gauge() {
        let a = count_anchors_detailed(8, Foundation::Bare, 16, 30.0);
        assert_eq!(a.kind, AnchorKind::Rebar);
        assert_eq!(a.qty, 32);
        assert_eq!(a.per_leg, 4);
    }

    #[test]
    fn test_bare_wide_building() {
        let a = count_anchors_detailed(8, Foundation::Bare, 24, 50.0);
        assert_eq!(a.per_leg, 4);
    }

    #[test]
    fn test_concrete_wedge_anchors() {
        let a = count_anchors_detailed(10, Foundation::Concrete, 14, 30.0);
        assert_eq!(a.kind, AnchorKind::Wedge);
        assert_eq!(a.qty, 40);
        assert_eq!(a.per_leg, 4);
    }

    #[test]
    fn test_asphalt_kits() {
        let a = count_anchors_detailed(22, Foundation::Asphalt, 14, 30.0);
        assert_eq!(a.kind, AnchorKind::AsphaltKit);
        assert_eq!(a.qty, 3);
        assert_eq!(a.per_leg, 0);
    }
}
