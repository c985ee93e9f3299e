//! # Opening Reinforcement
//!
//! Header stock, L-brackets and blocking for wall openings. Quantities
//! accumulate across all openings into one takeoff per structure.

use serde::{Deserialize, Serialize};

use crate::job::{Opening, SideOrEnd};

/// Default walk-door header length in feet.
const WALK_HEADER_FT: f64 = 4.0;
/// Default window width in feet.
const WINDOW_DEFAULT_WIDTH_FT: f64 = 4.0;
/// Widest default rollup; narrower buildings cap it at their own width.
const ROLLUP_MAX_DEFAULT_WIDTH_FT: f64 = 12.0;

/// Aggregated reinforcement takeoff for a structure's openings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningReinforcement {
    /// Header stock in linear feet.
    pub header_lf: f64,
    pub l_brackets: u32,
    pub blocking: u32,
}

/// Accumulate reinforcement for `openings` in a building `building_width_ft`
/// wide.
///
/// Per opening:
/// - walk door: 4 ft header, 4 brackets, 2 blocking
/// - window: `width (default 4) + 1` ft header, 6 brackets, 1 blocking
/// - rollup: `width (default min(12, building width)) + 2` ft header,
///   8 brackets on an end wall / 6 on a side wall, 3 blocking
pub fn opening_reinforcement(
    openings: &[Opening],
    building_width_ft: f64,
) -> OpeningReinforcement {
    let mut out = OpeningReinforcement::default();

    for opening in openings {
        match opening {
            Opening::Walk { .. } => {
                out.header_lf += WALK_HEADER_FT;
                out.l_brackets += 4;
                out.blocking += 2;
            }
            Opening::Window { width_ft, .. } => {
                let w = width_ft.unwrap_or(WINDOW_DEFAULT_WIDTH_FT).max(0.0);
                out.header_lf += w + 1.0;
                out.l_brackets += 6;
                out.blocking += 1;
            }
            Opening::Rollup { width_ft, side } => {
                let w = width_ft
                    .unwrap_or_else(|| ROLLUP_MAX_DEFAULT_WIDTH_FT.min(building_width_ft))
                    .max(0.0);
                out.header_lf += w + 2.0;
                out.l_brackets += if *side == Some(SideOrEnd::Side) { 6 } else { 8 };
                out.blocking += 3;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let r = opening_reinforcement(&[], 30.0);
        assert_eq!(r.header_lf, 0.0);
        assert_eq!(r.l_brackets, 0);
        assert_eq!(r.blocking, 0);
    }

    #[test]
    fn test_walk_door() {
        let r = opening_reinforcement(
            &[Opening::Walk {
                width_ft: None,
                side: None,
            }],
            30.0,
        );
        assert_eq!(r.header_lf, 4.0);
        assert_eq!(r.l_brackets, 4);
        assert_eq!(r.blocking, 2);
    }

    #[test]
    fn test_window_width_default_and_explicit() {
        let r = opening_reinforcement(
            &[Opening::Window {
                width_ft: None,
                side: None,
            }],
            30.0,
        );
        assert_eq!(r.header_lf, 5.0);
        let r = opening_reinforcement(
            &[Opening::Window {
                width_ft: Some(6.0),
                side: None,
            }],
            30.0,
        );
        assert_eq!(r.header_lf, 7.0);
        assert_eq!(r.l_brackets, 6);
        assert_eq!(r.blocking, 1);
    }

    #[test]
    fn test_rollup_default_width_caps_at_building() {
        // wide building: default rollup is 12 ft -> 14 ft header
        let r = opening_reinforcement(
            &[Opening::Rollup {
                width_ft: None,
                side: None,
            }],
            30.0,
        );
        assert_eq!(r.header_lf, 14.0);
        assert_eq!(r.l_brackets, 8);
        assert_eq!(r.blocking, 3);

        // narrow building: capped at the 10 ft width
        let r = opening_reinforcement(
            &[Opening::Rollup {
                width_ft: None,
                side: None,
            }],
            10.0,
        );
        assert_eq!(r.header_lf, 12.0);
    }

    #[test]
    fn test_rollup_side_wall_brackets() {
        let r = opening_reinforcement(
            &[Opening::Rollup {
                width_ft: Some(9.0),
                side: Some(SideOrEnd::Side),
            }],
            30.0,
        );
        assert_eq!(r.l_brackets, 6);
    }

    #[test]
    fn test_accumulation() {
        let r = opening_reinforcement(
            &[
                Opening::Walk {
                    width_ft: None,
                    side: None,
                },
                Opening::Window {
                    width_ft: Some(6.0),
                    side: None,
                },
            ],
            30.0,
        );
        assert_eq!(r.header_lf, 11.0);
        assert_eq!(r.l_brackets, 10);
        assert_eq!(r.blocking, 3);
    }
}
