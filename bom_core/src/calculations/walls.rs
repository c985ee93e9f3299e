//! # Wall Panel Aggregation
//!
//! Resolves each of the four walls' orientation selection and course
//! override into per-wall sheet rows, applies the gable-waste and wainscot
//! adjustments, and merges rows that share a piece length into the
//! consolidated Side/End panel groups the BOM emits.

use serde::{Deserialize, Serialize};

use crate::calculations::courses::{horizontal_panel_summary, CourseInput, HorizontalPanelSummary};
use crate::job::{JobSpec, SideOrEnd, Wall, WallPanelMode, WallSelection};
use crate::units::{ceil_div, EDGE_ALLOWANCE_FT, MAX_PANEL_LEN_FT, PANEL_MODULE_FT};

/// Upper bound on the strips-mode course selector.
pub const MAX_STRIP_COUNT: u32 = 7;

/// Vertical wall takeoff: 3 ft columns running top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalWall {
    /// One sheet per 3 ft column across the span.
    pub columns: u32,
    /// Cut length: wall height plus the edge allowance.
    pub panel_len_ft: f64,
    pub exceeds_max_length: bool,
}

/// Compute a vertical wall for one span.
///
/// In `Partial` mode the covered height rounds up to a 3 ft panel multiple
/// before the edge allowance is added.
pub fn vertical_wall_panels(span_ft: f64, height_ft: f64, mode: WallPanelMode) -> VerticalWall {
    let height = if height_ft.is_finite() { height_ft.max(0.0) } else { 0.0 };
    let used_height = if mode == WallPanelMode::Partial {
        (height / PANEL_MODULE_FT).ceil() * PANEL_MODULE_FT
    } else {
        height
    };
    let panel_len_ft = used_height + EDGE_ALLOWANCE_FT;
    VerticalWall {
        columns: ceil_div(span_ft, PANEL_MODULE_FT),
        panel_len_ft,
        exceeds_max_length: panel_len_ft > MAX_PANEL_LEN_FT,
    }
}

/// Resolve a horizontal wall's course count.
///
/// Strips mode substitutes the strip count (1-7) for the height-derived
/// count; otherwise an explicit override applies. Either way the result is
/// clamped into `[1, max_courses]`. Unselected walls take the full
/// `max_courses`.
pub fn resolve_courses(
    max_courses: u32,
    override_courses: Option<u32>,
    mode: WallPanelMode,
    strip_count: Option<u32>,
) -> u32 {
    let strips = if mode == WallPanelMode::Strips {
        strip_count.filter(|c| (1..=MAX_STRIP_COUNT).contains(c))
    } else {
        None
    };
    match strips.or(override_courses) {
        Some(c) => c.min(max_courses).max(1),
        None => max_courses,
    }
}

/// One wall's contribution before grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallRow {
    pub label: String,
    pub qty: u32,
    /// Run length (vertical walls report their panel length here).
    pub run_ft: f64,
    /// Piece length the row groups under: truss spacing for horizontal
    /// courses, cut length for vertical columns.
    pub piece_length_ft: f64,
    pub side_or_end: SideOrEnd,
    pub vertical: bool,
    /// Resolved course count (zero for vertical walls).
    pub courses: u32,
    /// Courses reached the wall's maximum; drives gable waste and wainscot.
    pub fully_enclosed: bool,
}

/// All four walls resolved, plus the course summary they were resolved
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallsAggregate {
    pub rows: Vec<WallRow>,
    pub summary: HorizontalPanelSummary,
}

fn wall_label(wall: Wall) -> &'static str {
    match wall {
        Wall::Left => "Left Side",
        Wall::Right => "Right Side",
        Wall::Front => "Front End",
        Wall::Back => "Back End",
    }
}

/// Resolve every wall of `spec` into rows.
///
/// - Open walls contribute nothing.
/// - Vertical walls contribute `ceil(run / 3)` columns at the wall height
///   plus edge allowance.
/// - Horizontal walls contribute `courses * ceil(run / coverage)` sheets at
///   the truss-spacing piece length; a fully enclosed end wall under a
///   pitched roof gets one extra sheet for gable cutting waste.
pub fn walls_aggregate(spec: &JobSpec) -> WallsAggregate {
    let summary = horizontal_panel_summary(&CourseInput {
        length_ft: spec.length_ft,
        width_ft: spec.width_ft,
        leg_height_ft: spec.wall_height_ft(),
        panel_coverage_ft: spec.panel_coverage(),
        roof_pitch_x12: spec.roof_pitch_x12,
    });
    let coverage = spec.panel_coverage();
    let spacing = spec.spacing_or_default();
    let pitched = spec.roof_pitch_x12.is_finite() && spec.roof_pitch_x12 > 0.0;

    let mut rows = Vec::new();
    for wall in [Wall::Left, Wall::Right, Wall::Front, Wall::Back] {
        let side_or_end = wall.side_or_end();
        let (run, max_courses) = match side_or_end {
            SideOrEnd::Side => (spec.length_ft, summary.side_courses),
            SideOrEnd::End => (spec.width_ft, summary.end_courses),
        };
        match spec.wall_selection(wall) {
            WallSelection::Open => {}
            WallSelection::Vertical => {
                let v = vertical_wall_panels(run, spec.wall_height_ft(), spec.wall_panel_mode);
                rows.push(WallRow {
                    label: format!("{} (V)", wall_label(wall)),
                    qty: v.columns,
                    run_ft: v.panel_len_ft,
                    piece_length_ft: v.panel_len_ft,
                    side_or_end,
                    vertical: true,
                    courses: 0,
                    fully_enclosed: false,
                });
            }
            WallSelection::Horizontal => {
                let courses = resolve_courses(
                    max_courses,
                    spec.course_override(wall),
                    spec.wall_panel_mode,
                    spec.wall_strip_count,
                );
                let fully_enclosed = max_courses > 0 && courses >= max_courses;
                let mut qty = courses * ceil_div(run, coverage);
                if side_or_end == SideOrEnd::End && fully_enclosed && pitched {
                    // gable cutting waste
                    qty += 1;
                }
                rows.push(WallRow {
                    label: wall_label(wall).to_string(),
                    qty,
                    run_ft: run,
                    piece_length_ft: spacing,
                    side_or_end,
                    vertical: false,
                    courses,
                    fully_enclosed,
                });
            }
        }
    }

    WallsAggregate { rows, summary }
}

/// A consolidated panel line: all wall rows sharing `(side_or_end,
/// piece_length_ft)` merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelGroup {
    pub side_or_end: SideOrEnd,
    pub piece_length_ft: f64,
    pub qty: u32,
    pub color: String,
}

/// Grouped wall panels with the wainscot carve-out applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedWallPanels {
    pub groups: Vec<PanelGroup>,
    /// Bottom-course sheets reclassified to the side wainscot line.
    pub wainscot_side_sheets: u32,
    /// Bottom-course sheets reclassified to the end wainscot line.
    pub wainscot_end_sheets: u32,
    pub summary: HorizontalPanelSummary,
}

/// Group wall rows for BOM emission and apply the wainscot adjustment.
///
/// In wainscot mode each fully enclosed horizontal wall has exactly one
/// course's worth of sheets (`ceil(run / coverage)`) moved out of its group
/// and into the wainscot tally; partially enclosed walls keep all their
/// sheets (there is no bottom course to reclassify). The gable-waste sheet
/// and the wainscot carve-out are independent adjustments and both apply to
/// the same end wall.
pub fn grouped_panel_rows(spec: &JobSpec) -> GroupedWallPanels {
    let agg = walls_aggregate(spec);
    let coverage = spec.panel_coverage();
    let spacing = spec.spacing_or_default();

    let mut groups: Vec<PanelGroup> = Vec::new();
    for row in &agg.rows {
        let existing = groups.iter_mut().find(|g| {
            g.side_or_end == row.side_or_end
                && (g.piece_length_ft - row.piece_length_ft).abs() < 1e-9
        });
        match existing {
            Some(g) => g.qty += row.qty,
            None => {
                let color = match row.side_or_end {
                    SideOrEnd::Side => spec.panel_color_side.clone(),
                    SideOrEnd::End => spec.end_panel_color().to_string(),
                };
                groups.push(PanelGroup {
                    side_or_end: row.side_or_end,
                    piece_length_ft: row.piece_length_ft,
                    qty: row.qty,
                    color,
                });
            }
        }
    }

    let mut wainscot_side_sheets = 0;
    let mut wainscot_end_sheets = 0;
    if spec.wall_panel_mode == WallPanelMode::Wainscot {
        for row in &agg.rows {
            if row.vertical || !row.fully_enclosed {
                continue;
            }
            match row.side_or_end {
                SideOrEnd::Side => wainscot_side_sheets += ceil_div(spec.length_ft, coverage),
                SideOrEnd::End => wainscot_end_sheets += ceil_div(spec.width_ft, coverage),
            }
        }
        for (side_or_end, carved) in [
            (SideOrEnd::Side, wainscot_side_sheets),
            (SideOrEnd::End, wainscot_end_sheets),
        ] {
            if carved == 0 {
                continue;
            }
            if let Some(g) = groups.iter_mut().find(|g| {
                g.side_or_end == side_or_end && (g.piece_length_ft - spacing).abs() < 1e-9
            }) {
                g.qty = g.qty.saturating_sub(carved);
            }
        }
    }

    GroupedWallPanels {
        groups,
        wainscot_side_sheets,
        wainscot_end_sheets,
        summary: agg.summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::WallOrientation;
    use proptest::prelude::*;

    /// 30x50x12, pitch 3, everything horizontal.
    fn horizontal_spec() -> JobSpec {
        JobSpec {
            wall_orientation: WallOrientation::Horizontal,
            ..JobSpec::default()
        }
    }

    #[test]
    fn test_open_walls_contribute_nothing() {
        let spec = JobSpec {
            wall_orientation: WallOrientation::Open,
            ..JobSpec::default()
        };
        let agg = walls_aggregate(&spec);
        assert!(agg.rows.is_empty());
        assert!(grouped_panel_rows(&spec).groups.is_empty());
    }

    #[test]
    fn test_vertical_wall_columns() {
        let v = vertical_wall_panels(50.0, 12.0, WallPanelMode::Full);
        assert_eq!(v.columns, 17);
        assert_eq!(v.panel_len_ft, 13.25);
        assert!(!v.exceeds_max_length);
    }

    #[test]
    fn test_vertical_partial_mode_rounds_height() {
        let v = vertical_wall_panels(50.0, 10.0, WallPanelMode::Partial);
        // 10 ft rounds up to 12 ft of coverage
        assert_eq!(v.panel_len_ft, 13.25);
    }

    #[test]
    fn test_resolve_courses_clamps() {
        assert_eq!(resolve_courses(4, None, WallPanelMode::Full, None), 4);
        assert_eq!(resolve_courses(4, Some(2), WallPanelMode::Full, None), 2);
        assert_eq!(resolve_courses(4, Some(10), WallPanelMode::Full, None), 4);
        assert_eq!(resolve_courses(4, Some(0), WallPanelMode::Full, None), 1);
    }

    #[test]
    fn test_resolve_courses_strips_mode() {
        // strip count replaces the height-derived count
        assert_eq!(resolve_courses(5, None, WallPanelMode::Strips, Some(3)), 3);
        // out-of-range strip counts are ignored
        assert_eq!(resolve_courses(5, None, WallPanelMode::Strips, Some(9)), 5);
        // still clamped to the wall's maximum
        assert_eq!(resolve_courses(2, None, WallPanelMode::Strips, Some(6)), 2);
    }

    #[test]
    fn test_horizontal_sheet_quantities() {
        let spec = horizontal_spec();
        let agg = walls_aggregate(&spec);
        // side: 4 courses x ceil(50/3)=17 sheets
        let left = agg.rows.iter().find(|r| r.label == "Left Side").unwrap();
        assert_eq!(left.courses, 4);
        assert_eq!(left.qty, 4 * 17);
        // end: ceil((12 + 3.75)/3) = 6 courses x ceil(30/3)=10, +1 gable waste
        let front = agg.rows.iter().find(|r| r.label == "Front End").unwrap();
        assert_eq!(front.courses, 6);
        assert!(front.fully_enclosed);
        assert_eq!(front.qty, 6 * 10 + 1);
    }

    #[test]
    fn test_gable_extra_requires_pitch_and_full_enclosure() {
        let mut spec = horizontal_spec();
        spec.roof_pitch_x12 = 0.0;
        let agg = walls_aggregate(&spec);
        let front = agg.rows.iter().find(|r| r.label == "Front End").unwrap();
        // flat roof: no gable waste sheet
        assert_eq!(front.qty, front.courses * 10);

        let mut spec = horizontal_spec();
        spec.front_end_courses = Some(2);
        let agg = walls_aggregate(&spec);
        let front = agg.rows.iter().find(|r| r.label == "Front End").unwrap();
        assert!(!front.fully_enclosed);
        assert_eq!(front.qty, 2 * 10);
    }

    #[test]
    fn test_sides_and_ends_group_separately() {
        let spec = horizontal_spec();
        let grouped = grouped_panel_rows(&spec);
        assert_eq!(grouped.groups.len(), 2);
        let side = grouped
            .groups
            .iter()
            .find(|g| g.side_or_end == SideOrEnd::Side)
            .unwrap();
        let end = grouped
            .groups
            .iter()
            .find(|g| g.side_or_end == SideOrEnd::End)
            .unwrap();
        // both side walls merge, both end walls merge
        assert_eq!(side.qty, 2 * 4 * 17);
        assert_eq!(end.qty, 2 * (6 * 10 + 1));
        // horizontal pieces are cut at truss spacing
        assert_eq!(side.piece_length_ft, 5.0);
    }

    #[test]
    fn test_mixed_orientations_do_not_merge() {
        let mut spec = horizontal_spec();
        spec.left_side = Some(WallSelection::Vertical);
        let grouped = grouped_panel_rows(&spec);
        // vertical left side groups under its cut length, away from the
        // horizontal right side
        let side_groups: Vec<_> = grouped
            .groups
            .iter()
            .filter(|g| g.side_or_end == SideOrEnd::Side)
            .collect();
        assert_eq!(side_groups.len(), 2);
    }

    #[test]
    fn test_wainscot_moves_one_course_per_enclosed_wall() {
        let mut spec = horizontal_spec();
        spec.wall_panel_mode = WallPanelMode::Wainscot;
        let grouped = grouped_panel_rows(&spec);
        // both sides fully enclosed: 2 x ceil(50/3) = 34 sheets
        assert_eq!(grouped.wainscot_side_sheets, 34);
        // both ends: 2 x ceil(30/3) = 20 sheets
        assert_eq!(grouped.wainscot_end_sheets, 20);
        let side = grouped
            .groups
            .iter()
            .find(|g| g.side_or_end == SideOrEnd::Side)
            .unwrap();
        assert_eq!(side.qty, 2 * 4 * 17 - 34);
    }

    #[test]
    fn test_wainscot_skips_partial_walls() {
        let mut spec = horizontal_spec();
        spec.wall_panel_mode = WallPanelMode::Wainscot;
        spec.left_side_courses = Some(2);
        spec.right_side_courses = Some(2);
        let grouped = grouped_panel_rows(&spec);
        assert_eq!(grouped.wainscot_side_sheets, 0);
        // ends untouched
        assert_eq!(grouped.wainscot_end_sheets, 20);
    }

    #[test]
    fn test_wainscot_and_gable_extra_are_additive() {
        let mut spec = horizontal_spec();
        spec.wall_panel_mode = WallPanelMode::Wainscot;
        let grouped = grouped_panel_rows(&spec);
        let end = grouped
            .groups
            .iter()
            .find(|g| g.side_or_end == SideOrEnd::End)
            .unwrap();
        // base 2 x (6 courses x 10 + 1 gable sheet), minus 2 x 10 wainscot
        assert_eq!(end.qty, 2 * 61 - 20);
    }

    #[test]
    fn test_group_colors() {
        let mut spec = horizontal_spec();
        spec.panel_color_side = "Clay".to_string();
        spec.panel_color_end = Some("Burgundy".to_string());
        let grouped = grouped_panel_rows(&spec);
        for g in &grouped.groups {
            match g.side_or_end {
                SideOrEnd::Side => assert_eq!(g.color, "Clay"),
                SideOrEnd::End => assert_eq!(g.color, "Burgundy"),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_resolved_courses_in_range(
            max in 1u32..12,
            override_courses in proptest::option::of(0u32..20),
            strips in proptest::option::of(0u32..10),
        ) {
            for mode in [WallPanelMode::Full, WallPanelMode::Strips] {
                let resolved = resolve_courses(max, override_courses, mode, strips);
                prop_assert!(resolved >= 1);
                prop_assert!(resolved <= max);
            }
        }
    }
}
