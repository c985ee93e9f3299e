//! # Course Counts
//!
//! Converts wall height (plus gable rise for end walls) into whole horizontal
//! courses of fixed panel coverage. Side walls run the building length and
//! ignore the gable; end walls must clear the ridge.

use serde::{Deserialize, Serialize};

use crate::units::{ceil_div, DEFAULT_PANEL_COVERAGE_FT};

/// Geometry inputs for the course computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub length_ft: f64,
    pub width_ft: f64,
    /// Effective wall height (low eave for single-slope structures).
    pub leg_height_ft: f64,
    pub panel_coverage_ft: f64,
    pub roof_pitch_x12: f64,
}

/// Horizontal panel summary for all four walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalPanelSummary {
    /// Total courses across both side walls (`2 * side_courses`).
    pub side_panels_count: u32,
    /// Run length of side-wall courses (the building length).
    pub side_run_ft: f64,
    /// Total courses across both end walls (`2 * end_courses`).
    pub end_panels_count: u32,
    /// Run length of end-wall courses (the building width).
    pub end_run_ft: f64,
    /// Vertical rise from eave to ridge at the end wall.
    pub gable_rise_ft: f64,
    pub side_courses: u32,
    pub end_courses: u32,
}

/// Compute the course summary.
///
/// `gable_rise = (pitch / 12) * (width / 2)`; side courses stack to the wall
/// height, end courses to the wall height plus the gable rise. A pitch of
/// zero makes end and side counts equal. Degenerate coverage falls back to
/// the 3 ft default; negative heights clamp to zero courses.
///
/// # Example
///
/// ```rust
/// use bom_core::calculations::courses::{horizontal_panel_summary, CourseInput};
///
/// let summary = horizontal_panel_summary(&CourseInput {
///     length_ft: 30.0,
///     width_ft: 20.0,
///     leg_height_ft: 12.0,
///     panel_coverage_ft: 3.0,
///     roof_pitch_x12: 3.0,
/// });
/// assert_eq!(summary.side_courses, 4);
/// assert_eq!(summary.end_courses, 5);
/// ```
pub fn horizontal_panel_summary(input: &CourseInput) -> HorizontalPanelSummary {
    let coverage = if input.panel_coverage_ft.is_finite() && input.panel_coverage_ft > 0.0 {
        input.panel_coverage_ft
    } else {
        DEFAULT_PANEL_COVERAGE_FT
    };
    let pitch = if input.roof_pitch_x12.is_finite() {
        input.roof_pitch_x12.max(0.0)
    } else {
        0.0
    };
    let width = if input.width_ft.is_finite() {
        input.width_ft.max(0.0)
    } else {
        0.0
    };

    let gable_rise_ft = (pitch / 12.0) * (width / 2.0);
    let side_courses = ceil_div(input.leg_height_ft, coverage);
    let end_courses = ceil_div(input.leg_height_ft + gable_rise_ft, coverage);

    HorizontalPanelSummary {
        side_panels_count: 2 * side_courses,
        side_run_ft: input.length_ft,
        end_panels_count: 2 * end_courses,
        end_run_ft: input.width_ft,
        gable_rise_ft,
        side_courses,
        end_courses,
    }
}
