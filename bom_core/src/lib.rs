//! # bom_core - Metal Building BOM Estimation Engine
//!
//! `bom_core` turns a parametric description of a prefabricated metal
//! structure (dimensions, roof pitch, wall orientation, gauges, colors,
//! openings, lean-to attachments) into a fully itemized bill of materials:
//! quantities, lengths, units, colors and notes for framing, panels, trim,
//! anchors, screws and opening reinforcement.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`bom::build_bom`] is a pure function of a [`job::JobSpec`]
//!   value; no ambient state, no I/O. Callers recompute on every input change.
//! - **JSON-First**: every type implements Serialize/Deserialize, and a
//!   partial job document parses into a spec with sensible defaults.
//! - **Never throws**: degenerate inputs (zero dimensions, missing fields)
//!   degrade to zero/empty rows; schema validation belongs to the UI layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use bom_core::job::JobSpec;
//! use bom_core::bom::build_bom;
//!
//! let spec: JobSpec = serde_json::from_str(
//!     r#"{"widthFt": 30, "lengthFt": 50, "foundation": "concrete"}"#,
//! ).unwrap();
//!
//! let bom = build_bom(&spec);
//! assert!(bom.iter().any(|row| row.item == "Roof Panel"));
//! ```
//!
//! ## Modules
//!
//! - [`job`] - job spec data model, defaults and lean-to scoping
//! - [`calculations`] - the leaf calculators (framing, roof, walls, trim, ...)
//! - [`bom`] - the row model and the generator
//! - [`units`] - stock constants and length helpers
//! - [`errors`] - structured boundary error types

pub mod bom;
pub mod calculations;
pub mod errors;
pub mod job;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bom::{build_bom, BomRow, Category, Unit};
pub use errors::{EstimateError, EstimateResult};
pub use job::JobSpec;
