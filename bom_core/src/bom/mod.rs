//! # Bill of Materials
//!
//! The BOM row model and the generator that produces an ordered row list
//! from a [`JobSpec`](crate::job::JobSpec). Consumers group rows by
//! [`Category`] for review tables and exports; the row shape carries
//! explicit color, piece length and side/end discriminants so presentation
//! layers never re-derive values.

pub mod generator;

pub use generator::build_bom;

use serde::{Deserialize, Serialize};

use crate::job::{Gauge, SideOrEnd};

/// BOM section a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Framing,
    Roof,
    Walls,
    Trim,
    Hardware,
    Openings,
    Panels,
}

/// Purchase unit for a row quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "ea")]
    Each,
    #[serde(rename = "sheet")]
    Sheet,
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "lf")]
    LinearFeet,
    #[serde(rename = "kit")]
    Kit,
}

impl Unit {
    /// Short display form, identical to the serialized identifier.
    pub fn abbrev(self) -> &'static str {
        match self {
            Unit::Each => "ea",
            Unit::Sheet => "sheet",
            Unit::Pieces => "pcs",
            Unit::LinearFeet => "lf",
            Unit::Kit => "kit",
        }
    }
}

/// One line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomRow {
    pub category: Category,
    /// Item label; lean-to rows carry the attachment position prefix
    /// ("Front Truss").
    pub item: String,
    pub description: String,
    /// Material gauge for framing and panel rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge: Option<Gauge>,
    pub qty: f64,
    pub unit: Unit,
    /// Display length in feet (sheet or stock length).
    #[serde(rename = "length", skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,
    /// Cut length panels group under for consolidation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_length_ft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_or_end: Option<SideOrEnd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BomRow {
    /// Start a row with the always-present fields.
    pub fn new(
        category: Category,
        item: impl Into<String>,
        description: impl Into<String>,
        qty: f64,
        unit: Unit,
    ) -> Self {
        BomRow {
            category,
            item: item.into(),
            description: description.into(),
            gauge: None,
            qty,
            unit,
            length_ft: None,
            piece_length_ft: None,
            side_or_end: None,
            panel_color: None,
            notes: None,
        }
    }

    pub fn gauge(mut self, gauge: Gauge) -> Self {
        self.gauge = Some(gauge);
        self
    }

    pub fn length(mut self, length_ft: f64) -> Self {
        self.length_ft = Some(length_ft);
        self
    }

    pub fn piece_length(mut self, piece_length_ft: f64) -> Self {
        self.piece_length_ft = Some(piece_length_ft);
        self
    }

    pub fn side_or_end(mut self, side_or_end: SideOrEnd) -> Self {
        self.side_or_end = Some(side_or_end);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.panel_color = Some(color.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serialization_skips_empty_fields() {
        let row = BomRow::new(Category::Framing, "Truss", "Steel truss", 11.0, Unit::Each);
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"category\":\"Framing\""));
        assert!(json.contains("\"unit\":\"ea\""));
        assert!(!json.contains("panelColor"));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_row_builder() {
        let row = BomRow::new(Category::Walls, "Side Panels", "wall panel", 68.0, Unit::Sheet)
            .gauge(Gauge::G29)
            .length(5.0)
            .piece_length(5.0)
            .side_or_end(SideOrEnd::Side)
            .color("Galvalume");
        assert_eq!(row.gauge, Some(Gauge::G29));
        assert_eq!(row.piece_length_ft, Some(5.0));
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"length\":5.0"));
        assert!(json.contains("\"sideOrEnd\":\"side\""));
    }
}
