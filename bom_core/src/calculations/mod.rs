//! # Estimation Calculators
//!
//! The leaf calculators of the engine, each a pure function from geometry
//! and material selections to a takeoff quantity. `bom::build_bom` fans a
//! job out across all of them; each is also usable standalone.
//!
//! ## Available Calculators
//!
//! - [`framing`] - truss, leg and brace counts
//! - [`roof`] - roof sheet count and length
//! - [`courses`] - horizontal course counts from wall height and gable rise
//! - [`walls`] - per-wall resolution, aggregation, wainscot carve-out
//! - [`trims`] - linear-foot trim into 11 ft stock (greedy bin-pack)
//! - [`anchors`] - foundation/gauge anchor rules
//! - [`screws`] - gauge-derived fastener counts, bagged
//! - [`openings`] - header/bracket/blocking reinforcement

pub mod anchors;
pub mod courses;
pub mod framing;
pub mod openings;
pub mod roof;
pub mod screws;
pub mod trims;
pub mod walls;

// Re-export commonly used types
pub use anchors::{count_anchors_detailed, AnchorKind, Anchors};
pub use courses::{horizontal_panel_summary, CourseInput, HorizontalPanelSummary};
pub use framing::{estimate_braces, leg_count, truss_count};
pub use openings::{opening_reinforcement, OpeningReinforcement};
pub use roof::{roof_panel_sheets, RoofPanels};
pub use screws::{count_roof_screws_by_gauge, ScrewCount};
pub use trims::{breakdown_trims, TrimBreakdown, TrimLengths};
pub use walls::{grouped_panel_rows, walls_aggregate, GroupedWallPanels, WallsAggregate};
