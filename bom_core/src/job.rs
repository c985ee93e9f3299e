//! # Job Specification
//!
//! The `JobSpec` struct is the single input to the estimation engine: building
//! geometry, gauges, colors, wall selections, openings and lean-to
//! attachments. The UI layer owns construction and validation; the engine
//! receives an immutable value per call and holds no state between calls.
//!
//! All types are JSON-serializable with camelCase field names matching the
//! job shape the UI persists, and every field is defaulted so a partial
//! document (even `{}`) parses into a usable spec.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::job::JobSpec;
//!
//! let spec: JobSpec = serde_json::from_str(r#"{"widthFt": 24, "lengthFt": 40}"#).unwrap();
//! assert_eq!(spec.width_ft, 24.0);
//! assert_eq!(spec.leg_height_ft, 12.0); // default
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{EstimateError, EstimateResult};
use crate::units::DEFAULT_PANEL_COVERAGE_FT;

/// Default truss spacing when the job leaves it unset or degenerate.
pub const DEFAULT_SPACING_FT: f64 = 5.0;

/// Widths above this default every wall to vertical orientation:
/// a horizontal run on a wider building would need sheets past the
/// shipping limit.
pub const VERTICAL_ENFORCE_WIDTH_FT: f64 = 30.0;

/// Sheet metal gauge, for both framing tube and panel skin.
///
/// Lower numbers are thicker material. The gauge drives the anchor-per-leg
/// rule (framing) and the supports-per-sheet fastening rule (panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gauge {
    #[serde(rename = "12ga")]
    G12,
    #[serde(rename = "14ga")]
    G14,
    #[serde(rename = "26ga")]
    G26,
    #[serde(rename = "29ga")]
    G29,
}

impl Gauge {
    /// Numeric gauge value used by the anchor and screw rules.
    pub fn thickness(self) -> u32 {
        match self {
            Gauge::G12 => 12,
            Gauge::G14 => 14,
            Gauge::G26 => 26,
            Gauge::G29 => 29,
        }
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ga", self.thickness())
    }
}

/// Foundation the structure anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foundation {
    Bare,
    Asphalt,
    Concrete,
}

/// Legacy whole-building wall orientation selector.
///
/// Per-wall selections override this; it remains the fallback for walls
/// without an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallOrientation {
    Vertical,
    Horizontal,
    Open,
}

/// Per-wall orientation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSelection {
    Open,
    Vertical,
    Horizontal,
}

/// Wall panel coverage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallPanelMode {
    /// Panel every enclosed wall to full height.
    Full,
    /// Full walls with the bottom course carved out in a contrast color.
    Wainscot,
    /// A fixed number of horizontal strips (1-7) instead of full height.
    Strips,
    /// Partial-height walls, rounded up to a 3 ft panel multiple.
    Partial,
}

/// Whether a wall (or an opening's host wall) runs along the building's
/// side or its gabled end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideOrEnd {
    Side,
    End,
}

/// The four walls of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Front,
    Back,
}

impl Wall {
    /// Side walls run the building length; end walls span its width.
    pub fn side_or_end(self) -> SideOrEnd {
        match self {
            Wall::Left | Wall::Right => SideOrEnd::Side,
            Wall::Front | Wall::Back => SideOrEnd::End,
        }
    }
}

/// A door or window opening in a wall.
///
/// Discriminated by `type`; width defaults are type-specific and resolved by
/// the reinforcement calculator (rollups default to the building width,
/// capped at 12 ft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Opening {
    /// Walk-in door (36 in standard).
    Walk {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width_ft: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        side: Option<SideOrEnd>,
    },
    /// Window.
    Window {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width_ft: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        side: Option<SideOrEnd>,
    },
    /// Roll-up garage door.
    Rollup {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width_ft: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        side: Option<SideOrEnd>,
    },
}

/// A manually specified supplemental panel line.
///
/// Included in the BOM verbatim when both `qty` and `length_ft` are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraPanel {
    pub qty: f64,
    pub length_ft: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for ExtraPanel {
    fn default() -> Self {
        ExtraPanel {
            qty: 0.0,
            length_ft: 0.0,
            color: None,
        }
    }
}

/// Which side of the main structure a lean-to attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeanToPosition {
    Front,
    Back,
    Left,
    Right,
}

impl LeanToPosition {
    /// Capitalized label used to prefix BOM items ("Front Truss").
    pub fn label(self) -> &'static str {
        match self {
            LeanToPosition::Front => "Front",
            LeanToPosition::Back => "Back",
            LeanToPosition::Left => "Left",
            LeanToPosition::Right => "Right",
        }
    }
}

impl fmt::Display for LeanToPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lean-to attachment.
///
/// Every field except `position` is optional: a set field overrides the main
/// spec, an unset field inherits it. [`LeanTo::scoped`] performs the merge;
/// see its docs for the exact inherit/override rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeanTo {
    pub position: Option<LeanToPosition>,
    pub width_ft: Option<f64>,
    pub length_ft: Option<f64>,
    pub leg_height_ft: Option<f64>,
    pub high_side_height_ft: Option<f64>,
    pub low_side_height_ft: Option<f64>,
    pub roof_pitch_x12: Option<f64>,
    pub spacing_ft: Option<f64>,
    pub panel_coverage_ft: Option<f64>,
    pub frame_gauge: Option<Gauge>,
    pub panel_gauge: Option<Gauge>,
    pub foundation: Option<Foundation>,
    pub wall_orientation: Option<WallOrientation>,
    pub left_side: Option<WallSelection>,
    pub right_side: Option<WallSelection>,
    pub front_end: Option<WallSelection>,
    pub back_end: Option<WallSelection>,
    pub left_side_courses: Option<u32>,
    pub right_side_courses: Option<u32>,
    pub front_end_courses: Option<u32>,
    pub back_end_courses: Option<u32>,
    pub wall_panel_mode: Option<WallPanelMode>,
    pub wall_strip_count: Option<u32>,
    pub panel_color_roof: Option<String>,
    pub panel_color_side: Option<String>,
    pub panel_color_end: Option<String>,
    pub wainscot_color: Option<String>,
    pub openings: Option<Vec<Opening>>,
    pub extra_panels: Option<Vec<ExtraPanel>>,
}

impl LeanTo {
    /// Create a lean-to at `position` with the creation-time defaults the UI
    /// uses: its own empty openings/extra-panels lists and the main spec's
    /// panel colors captured as explicit overrides.
    pub fn new(position: LeanToPosition, main: &JobSpec) -> Self {
        LeanTo {
            position: Some(position),
            panel_color_roof: Some(main.panel_color_roof.clone()),
            panel_color_side: Some(main.panel_color_side.clone()),
            panel_color_end: main.panel_color_end.clone(),
            wainscot_color: main.wainscot_color.clone(),
            openings: Some(Vec::new()),
            extra_panels: Some(Vec::new()),
            ..LeanTo::default()
        }
    }

    /// Build the scoped spec this lean-to is computed with.
    ///
    /// Inherit/override rules:
    /// - Any set field replaces the main spec's value; any unset field
    ///   inherits it. This includes `openings` and `extra_panels` as whole
    ///   lists (no element-wise merging).
    /// - Wall heights are treated as a group: if the lean-to sets any of
    ///   `leg_height_ft` / `high_side_height_ft` / `low_side_height_ft`,
    ///   the main spec's high/low heights are discarded rather than bleeding
    ///   into the attachment's height resolution.
    /// - The scoped spec never carries nested lean-tos.
    pub fn scoped(&self, main: &JobSpec) -> JobSpec {
        let mut scope = main.clone();
        scope.lean_tos = Vec::new();

        if let Some(v) = self.width_ft {
            scope.width_ft = v;
        }
        if let Some(v) = self.length_ft {
            scope.length_ft = v;
        }
        if self.leg_height_ft.is_some()
            || self.high_side_height_ft.is_some()
            || self.low_side_height_ft.is_some()
        {
            scope.leg_height_ft = self.leg_height_ft.unwrap_or(main.leg_height_ft);
            scope.high_side_height_ft = self.high_side_height_ft;
            scope.low_side_height_ft = self.low_side_height_ft;
        }
        if let Some(v) = self.roof_pitch_x12 {
            scope.roof_pitch_x12 = v;
        }
        if let Some(v) = self.spacing_ft {
            scope.spacing_ft = v;
        }
        if let Some(v) = self.panel_coverage_ft {
            scope.panel_coverage_ft = v;
        }
        if let Some(v) = self.frame_gauge {
            scope.frame_gauge = v;
        }
        if let Some(v) = self.panel_gauge {
            scope.panel_gauge = v;
        }
        if let Some(v) = self.foundation {
            scope.foundation = v;
        }
        if let Some(v) = self.wall_orientation {
            scope.wall_orientation = v;
        }
        if self.left_side.is_some() {
            scope.left_side = self.left_side;
        }
        if self.right_side.is_some() {
            scope.right_side = self.right_side;
        }
        if self.front_end.is_some() {
            scope.front_end = self.front_end;
        }
        if self.back_end.is_some() {
            scope.back_end = self.back_end;
        }
        if self.left_side_courses.is_some() {
            scope.left_side_courses = self.left_side_courses;
        }
        if self.right_side_courses.is_some() {
            scope.right_side_courses = self.right_side_courses;
        }
        if self.front_end_courses.is_some() {
            scope.front_end_courses = self.front_end_courses;
        }
        if self.back_end_courses.is_some() {
            scope.back_end_courses = self.back_end_courses;
        }
        if let Some(v) = self.wall_panel_mode {
            scope.wall_panel_mode = v;
        }
        if self.wall_strip_count.is_some() {
            scope.wall_strip_count = self.wall_strip_count;
        }
        if let Some(v) = &self.panel_color_roof {
            scope.panel_color_roof = v.clone();
        }
        if let Some(v) = &self.panel_color_side {
            scope.panel_color_side = v.clone();
        }
        if self.panel_color_end.is_some() {
            scope.panel_color_end = self.panel_color_end.clone();
        }
        if self.wainscot_color.is_some() {
            scope.wainscot_color = self.wainscot_color.clone();
        }
        if let Some(v) = &self.openings {
            scope.openings = v.clone();
        }
        if let Some(v) = &self.extra_panels {
            scope.extra_panels = v.clone();
        }
        scope
    }
}

/// Complete parametric description of one estimated structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpec {
    /// Stable job identity carried from the UI; never consumed by calculators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<String>,

    // Geometry
    pub width_ft: f64,
    pub length_ft: f64,
    pub leg_height_ft: f64,
    /// High eave for lean-to-shaped (single-slope) mains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_side_height_ft: Option<f64>,
    /// Low eave for lean-to-shaped mains; walls panel to this height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_side_height_ft: Option<f64>,
    pub roof_pitch_x12: f64,
    pub spacing_ft: f64,
    pub panel_coverage_ft: f64,

    // Materials
    pub frame_gauge: Gauge,
    pub panel_gauge: Gauge,
    pub foundation: Foundation,

    // Walls
    pub wall_orientation: WallOrientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_side: Option<WallSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_side: Option<WallSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_end: Option<WallSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_end: Option<WallSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_side_courses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_side_courses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_end_courses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_end_courses: Option<u32>,
    pub wall_panel_mode: WallPanelMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_strip_count: Option<u32>,

    // Colors
    pub panel_color_roof: String,
    pub panel_color_side: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_color_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wainscot_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_color: Option<String>,

    // Attachments and extras
    pub openings: Vec<Opening>,
    pub extra_panels: Vec<ExtraPanel>,
    pub lean_tos: Vec<LeanTo>,
}

impl Default for JobSpec {
    fn default() -> Self {
        JobSpec {
            id: None,
            work_order_id: None,
            width_ft: 30.0,
            length_ft: 50.0,
            leg_height_ft: 12.0,
            high_side_height_ft: None,
            low_side_height_ft: None,
            roof_pitch_x12: 3.0,
            spacing_ft: DEFAULT_SPACING_FT,
            panel_coverage_ft: DEFAULT_PANEL_COVERAGE_FT,
            frame_gauge: Gauge::G14,
            panel_gauge: Gauge::G29,
            foundation: Foundation::Bare,
            wall_orientation: WallOrientation::Vertical,
            left_side: None,
            right_side: None,
            front_end: None,
            back_end: None,
            left_side_courses: None,
            right_side_courses: None,
            front_end_courses: None,
            back_end_courses: None,
            wall_panel_mode: WallPanelMode::Full,
            wall_strip_count: Some(4),
            panel_color_roof: "Galvalume".to_string(),
            panel_color_side: "Galvalume".to_string(),
            panel_color_end: None,
            wainscot_color: None,
            trim_color: None,
            openings: Vec::new(),
            extra_panels: Vec::new(),
            lean_tos: Vec::new(),
        }
    }
}

impl JobSpec {
    /// Parse a spec from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> EstimateResult<JobSpec> {
        serde_json::from_str(json).map_err(|e| EstimateError::serialization(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> EstimateResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EstimateError::serialization(e.to_string()))
    }

    /// Effective wall height: single-slope structures panel to the low eave.
    pub fn wall_height_ft(&self) -> f64 {
        self.low_side_height_ft.unwrap_or(self.leg_height_ft)
    }

    /// Panel coverage with the degenerate-input guard applied.
    pub fn panel_coverage(&self) -> f64 {
        if self.panel_coverage_ft.is_finite() && self.panel_coverage_ft > 0.0 {
            self.panel_coverage_ft
        } else {
            DEFAULT_PANEL_COVERAGE_FT
        }
    }

    /// Truss spacing with the degenerate-input guard applied.
    pub fn spacing_or_default(&self) -> f64 {
        if self.spacing_ft.is_finite() && self.spacing_ft > 0.0 {
            self.spacing_ft
        } else {
            DEFAULT_SPACING_FT
        }
    }

    /// Resolve one wall's orientation selection.
    ///
    /// An explicit per-wall choice wins. Otherwise buildings wider than 30 ft
    /// default to vertical (horizontal runs would exceed the panel shipping
    /// limit), and anything else falls back to the whole-building
    /// `wall_orientation` selector.
    pub fn wall_selection(&self, wall: Wall) -> WallSelection {
        let explicit = match wall {
            Wall::Left => self.left_side,
            Wall::Right => self.right_side,
            Wall::Front => self.front_end,
            Wall::Back => self.back_end,
        };
        if let Some(sel) = explicit {
            return sel;
        }
        if self.width_ft > VERTICAL_ENFORCE_WIDTH_FT {
            return WallSelection::Vertical;
        }
        match self.wall_orientation {
            WallOrientation::Vertical => WallSelection::Vertical,
            WallOrientation::Horizontal => WallSelection::Horizontal,
            WallOrientation::Open => WallSelection::Open,
        }
    }

    /// Per-wall course override, if one was selected.
    pub fn course_override(&self, wall: Wall) -> Option<u32> {
        match wall {
            Wall::Left => self.left_side_courses,
            Wall::Right => self.right_side_courses,
            Wall::Front => self.front_end_courses,
            Wall::Back => self.back_end_courses,
        }
    }

    /// End-wall panel color, falling back to the side color when unset.
    pub fn end_panel_color(&self) -> &str {
        self.panel_color_end
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.panel_color_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_parses_to_defaults() {
        let spec = JobSpec::from_json("{}").unwrap();
        assert_eq!(spec.width_ft, 30.0);
        assert_eq!(spec.length_ft, 50.0);
        assert_eq!(spec.frame_gauge, Gauge::G14);
        assert_eq!(spec.panel_gauge, Gauge::G29);
        assert_eq!(spec.foundation, Foundation::Bare);
        assert!(spec.openings.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut spec = JobSpec::default();
        spec.openings.push(Opening::Rollup {
            width_ft: Some(10.0),
            side: Some(SideOrEnd::End),
        });
        let lt = LeanTo::new(LeanToPosition::Left, &spec);
        spec.lean_tos.push(lt);
        let json = spec.to_json_pretty().unwrap();
        let roundtrip = JobSpec::from_json(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }

    #[test]
    fn test_gauge_serialization() {
        assert_eq!(serde_json::to_string(&Gauge::G14).unwrap(), "\"14ga\"");
        let g: Gauge = serde_json::from_str("\"26ga\"").unwrap();
        assert_eq!(g.thickness(), 26);
    }

    #[test]
    fn test_opening_tagged_json() {
        let o: Opening =
            serde_json::from_str(r#"{"type": "window", "widthFt": 6, "side": "side"}"#).unwrap();
        assert_eq!(
            o,
            Opening::Window {
                width_ft: Some(6.0),
                side: Some(SideOrEnd::Side),
            }
        );
    }

    #[test]
    fn test_wall_selection_explicit_wins() {
        let mut spec = JobSpec::default();
        spec.left_side = Some(WallSelection::Open);
        assert_eq!(spec.wall_selection(Wall::Left), WallSelection::Open);
    }

    #[test]
    fn test_wall_selection_wide_building_forces_vertical() {
        let mut spec = JobSpec::default();
        spec.width_ft = 40.0;
        spec.wall_orientation = WallOrientation::Horizontal;
        assert_eq!(spec.wall_selection(Wall::Right), WallSelection::Vertical);
    }

    #[test]
    fn test_wall_selection_falls_back_to_global() {
        let mut spec = JobSpec::default();
        spec.wall_orientation = WallOrientation::Horizontal;
        assert_eq!(spec.wall_selection(Wall::Front), WallSelection::Horizontal);
        spec.wall_orientation = WallOrientation::Open;
        assert_eq!(spec.wall_selection(Wall::Front), WallSelection::Open);
    }

    #[test]
    fn test_end_color_fallback() {
        let mut spec = JobSpec::default();
        spec.panel_color_side = "Burgundy".to_string();
        assert_eq!(spec.end_panel_color(), "Burgundy");
        spec.panel_color_end = Some("Clay".to_string());
        assert_eq!(spec.end_panel_color(), "Clay");
        spec.panel_color_end = Some(String::new());
        assert_eq!(spec.end_panel_color(), "Burgundy");
    }

    #[test]
    fn test_scoped_inherits_unset_fields() {
        let mut main = JobSpec::default();
        main.panel_color_side = "Quaker Gray".to_string();
        main.openings.push(Opening::Walk {
            width_ft: None,
            side: None,
        });
        let lt = LeanTo {
            position: Some(LeanToPosition::Front),
            width_ft: Some(12.0),
            length_ft: Some(20.0),
            ..LeanTo::default()
        };
        let scope = lt.scoped(&main);
        assert_eq!(scope.width_ft, 12.0);
        assert_eq!(scope.length_ft, 20.0);
        // inherited
        assert_eq!(scope.leg_height_ft, main.leg_height_ft);
        assert_eq!(scope.panel_color_side, "Quaker Gray");
        assert_eq!(scope.openings, main.openings);
        // never nested
        assert!(scope.lean_tos.is_empty());
    }

    #[test]
    fn test_scoped_height_group_override() {
        let mut main = JobSpec::default();
        main.low_side_height_ft = Some(8.0);
        let lt = LeanTo {
            position: Some(LeanToPosition::Left),
            leg_height_ft: Some(10.0),
            ..LeanTo::default()
        };
        let scope = lt.scoped(&main);
        // setting any height clears the main's high/low pair
        assert_eq!(scope.leg_height_ft, 10.0);
        assert_eq!(scope.low_side_height_ft, None);
        assert_eq!(scope.wall_height_ft(), 10.0);
    }

    #[test]
    fn test_lean_to_new_captures_colors() {
        let mut main = JobSpec::default();
        main.panel_color_roof = "Barn Red".to_string();
        let lt = LeanTo::new(LeanToPosition::Back, &main);
        assert_eq!(lt.panel_color_roof.as_deref(), Some("Barn Red"));
        assert_eq!(lt.openings.as_deref(), Some(&[][..]));
        // changing the main color later does not follow the lean-to
        main.panel_color_roof = "White".to_string();
        let scope = lt.scoped(&main);
        assert_eq!(scope.panel_color_roof, "Barn Red");
    }
}
