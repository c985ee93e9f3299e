//! # Trim Breakdown
//!
//! Converts named linear-foot trim requirements into 11 ft stock pieces.
//! Two figures are produced and both are kept: a per-type piece count
//! (`ceil(rounded_lf / 11)`, what the BOM lists), and an aggregate stick
//! count from a greedy first-fit packing of all types' segments combined.
//! The two are not guaranteed equal; downstream expectations are calibrated
//! to this exact heuristic, so it must not be "improved" to an optimal
//! packing.

use serde::{Deserialize, Serialize};

use crate::units::{round_up_tenth, TRIM_STICK_FT};

/// Default waste factor applied to every trim length.
pub const DEFAULT_WASTE_FACTOR: f64 = 1.05;

/// Packing tolerance: a segment fits a stick within this slack.
const FIT_EPSILON: f64 = 1e-6;

/// The trim profiles a structure takes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimKind {
    Eave,
    Rake,
    Gable,
    Corner,
    Ridge,
}

impl TrimKind {
    /// Capitalized BOM label.
    pub fn label(self) -> &'static str {
        match self {
            TrimKind::Eave => "Eave",
            TrimKind::Rake => "Rake",
            TrimKind::Gable => "Gable",
            TrimKind::Corner => "Corner",
            TrimKind::Ridge => "Ridgecap",
        }
    }
}

/// Named linear-foot trim requirements.
///
/// `ridge` is synthesized by the generator as building length plus a 1 ft
/// allowance; the others derive from the footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrimLengths {
    pub eave: f64,
    pub rake: f64,
    pub gable: f64,
    pub corner: f64,
    pub ridge: f64,
}

/// One trim type after waste and rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimItem {
    pub kind: TrimKind,
    /// Raw requested linear feet.
    pub lf: f64,
    /// After waste factor, rounded up to 0.1 ft.
    pub rounded_lf: f64,
    /// 11 ft stock pieces for this type alone.
    pub pieces: u32,
}

/// Full trim takeoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimBreakdown {
    pub items: Vec<TrimItem>,
    /// Sum of raw requested linear feet.
    pub total_lf: f64,
    pub waste_factor: f64,
    /// Sum of rounded (post-waste) linear feet.
    pub total_rounded_lf: f64,
    /// Aggregate stick count from the first-fit packing.
    pub sticks: u32,
    /// Fill level of each packed stick, for inspection.
    pub stick_fill: Vec<f64>,
}

/// Break trim requirements into stock with the default waste factor.
pub fn breakdown_trims(lengths: &TrimLengths) -> TrimBreakdown {
    breakdown_trims_with(lengths, DEFAULT_WASTE_FACTOR)
}

/// Break trim requirements into stock.
///
/// Per type: apply the waste factor, round up to 0.1 ft, and quote
/// `ceil(rounded / 11)` pieces. The aggregate count instead splits every
/// type's rounded length into <=11 ft segments, sorts all segments
/// descending, and first-fits them into shared sticks — a looser upper
/// bound than the per-type ceiling sum, since short tails from different
/// types can share a stick.
pub fn breakdown_trims_with(lengths: &TrimLengths, waste_factor: f64) -> TrimBreakdown {
    let waste = if waste_factor.is_finite() && waste_factor > 0.0 {
        waste_factor
    } else {
        DEFAULT_WASTE_FACTOR
    };

    let named = [
        (TrimKind::Eave, lengths.eave),
        (TrimKind::Rake, lengths.rake),
        (TrimKind::Gable, lengths.gable),
        (TrimKind::Corner, lengths.corner),
        (TrimKind::Ridge, lengths.ridge),
    ];

    let mut items = Vec::with_capacity(named.len());
    let mut total_lf = 0.0;
    let mut total_rounded_lf = 0.0;
    for (kind, lf) in named {
        let lf = if lf.is_finite() { lf.max(0.0) } else { 0.0 };
        let rounded_lf = round_up_tenth(lf * waste);
        total_lf += lf;
        total_rounded_lf += rounded_lf;
        items.push(TrimItem {
            kind,
            lf,
            rounded_lf,
            pieces: (rounded_lf / TRIM_STICK_FT).ceil() as u32,
        });
    }

    // split each type into <=11 ft segments, then pack all types together
    let mut segments = Vec::new();
    for item in &items {
        let mut remaining = item.rounded_lf;
        while remaining > 1e-4 {
            let take = remaining.min(TRIM_STICK_FT);
            segments.push(take);
            remaining -= take;
        }
    }
    segments.sort_by(|a, b| b.total_cmp(a));

    let mut stick_fill: Vec<f64> = Vec::new();
    for seg in segments {
        match stick_fill
            .iter_mut()
            .find(|fill| **fill + seg <= TRIM_STICK_FT + FIT_EPSILON)
        {
            Some(fill) => *fill += seg,
            None => stick_fill.push(seg),
        }
    }

    TrimBreakdown {
        items,
        total_lf,
        waste_factor: waste,
        total_rounded_lf,
        sticks: stick_fill.len() as u32,
        stick_fill,
    }
}
