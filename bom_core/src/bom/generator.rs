//! # BOM Generation
//!
//! Orchestrates every leaf calculator against a job spec and flattens the
//! results into the ordered row list. Lean-to attachments run through the
//! same emission with a scoped spec and a position prefix on every item
//! label; their rows append to the same flat list.
//!
//! The generator never fails: structurally incomplete specs degrade to
//! zero/empty rows per calculator, and validation is the UI layer's
//! concern.

use tracing::{debug, warn};

use crate::bom::{BomRow, Category, Unit};
use crate::calculations::anchors::{count_anchors_detailed, AnchorKind};
use crate::calculations::framing::{leg_count, truss_count};
use crate::calculations::openings::opening_reinforcement;
use crate::calculations::roof::roof_panel_sheets;
use crate::calculations::screws::count_roof_screws_by_gauge;
use crate::calculations::trims::{breakdown_trims, TrimKind, TrimLengths};
use crate::calculations::walls::grouped_panel_rows;
use crate::job::{JobSpec, SideOrEnd};
use crate::units::TRIM_STICK_FT;

/// Build the complete bill of materials for `spec` and its lean-tos.
///
/// The output is an ordered flat list; consumers group by
/// [`Category`](crate::bom::Category). Calling twice with the same spec
/// yields identical output — the engine holds no state.
///
/// # Example
///
/// ```rust
/// use bom_core::bom::build_bom;
/// use bom_core::job::JobSpec;
///
/// let bom = build_bom(&JobSpec::default());
/// assert!(bom.iter().any(|row| row.item == "Truss"));
/// ```
pub fn build_bom(spec: &JobSpec) -> Vec<BomRow> {
    let mut bom = Vec::new();
    emit_structure(&mut bom, spec, None);

    for lean_to in &spec.lean_tos {
        let scope = lean_to.scoped(spec);
        debug!(
            position = lean_to.position.map(|p| p.label()).unwrap_or("unlabeled"),
            "estimating lean-to attachment"
        );
        emit_structure(&mut bom, &scope, lean_to.position.map(|p| p.label()));
    }

    bom
}

/// Emit all rows for one structure (main or scoped lean-to).
fn emit_structure(bom: &mut Vec<BomRow>, spec: &JobSpec, prefix: Option<&str>) {
    let attachment = prefix.is_some();
    let label = |name: &str| -> String {
        match prefix {
            Some(p) => format!("{} {}", p, name),
            None => name.to_string(),
        }
    };

    // framing
    let trusses = truss_count(spec.length_ft, spec.spacing_ft);
    let legs = leg_count(trusses);
    bom.push(
        BomRow::new(
            Category::Framing,
            label("Truss"),
            if attachment { "Lean-to steel truss" } else { "Steel truss" },
            trusses as f64,
            Unit::Each,
        )
        .gauge(spec.frame_gauge),
    );
    bom.push(
        BomRow::new(
            Category::Framing,
            label("Leg"),
            if attachment { "Lean-to support leg" } else { "Support leg" },
            legs as f64,
            Unit::Each,
        )
        .gauge(spec.frame_gauge),
    );

    // roof
    let roof = roof_panel_sheets(spec.width_ft, spec.length_ft);
    if roof.exceeds_max_length {
        warn!(
            panel_len_ft = roof.panel_len_ft,
            "roof panel length exceeds the 31 ft shipping limit"
        );
    }
    bom.push(
        BomRow::new(
            Category::Roof,
            label("Roof Panel"),
            "3' width panel (roof)",
            roof.total_sheets as f64,
            Unit::Sheet,
        )
        .gauge(spec.panel_gauge)
        .length(roof.panel_len_ft)
        .color(spec.panel_color_roof.clone()),
    );

    // walls
    let walls = grouped_panel_rows(spec);
    for group in &walls.groups {
        let (item, description) = match group.side_or_end {
            SideOrEnd::Side => ("Side Panels", "3' width wall panel (side)"),
            SideOrEnd::End => ("End Panels", "3' width wall panel (end)"),
        };
        bom.push(
            BomRow::new(
                Category::Walls,
                label(item),
                description,
                group.qty as f64,
                Unit::Sheet,
            )
            .gauge(spec.panel_gauge)
            .length(group.piece_length_ft)
            .piece_length(group.piece_length_ft)
            .side_or_end(group.side_or_end)
            .color(group.color.clone()),
        );
    }
    let spacing = spec.spacing_or_default();
    let wainscot_color = spec.wainscot_color.clone().unwrap_or_default();
    if walls.wainscot_side_sheets > 0 {
        bom.push(
            BomRow::new(
                Category::Walls,
                label("Wainscot (Sides)"),
                "3' width wainscot panel (side)",
                walls.wainscot_side_sheets as f64,
                Unit::Sheet,
            )
            .gauge(spec.panel_gauge)
            .length(spacing)
            .piece_length(spacing)
            .side_or_end(SideOrEnd::Side)
            .color(wainscot_color.clone()),
        );
    }
    if walls.wainscot_end_sheets > 0 {
        bom.push(
            BomRow::new(
                Category::Walls,
                label("Wainscot (Ends)"),
                "3' width wainscot panel (end)",
                walls.wainscot_end_sheets as f64,
                Unit::Sheet,
            )
            .gauge(spec.panel_gauge)
            .length(spacing)
            .piece_length(spacing)
            .side_or_end(SideOrEnd::End)
            .color(wainscot_color),
        );
    }

    // trim: footprint-derived lengths plus the synthetic ridge allowance
    let trims = breakdown_trims(&TrimLengths {
        eave: spec.width_ft * 2.0,
        rake: spec.length_ft * 2.0,
        gable: 0.0,
        corner: 4.0,
        ridge: if spec.length_ft > 0.0 { spec.length_ft + 1.0 } else { 0.0 },
    });
    let trim_color = spec.trim_color.clone().unwrap_or_default();
    for item in &trims.items {
        if item.kind == TrimKind::Ridge {
            continue;
        }
        bom.push(
            BomRow::new(
                Category::Trim,
                label(item.kind.label()),
                format!("{} trim (11ft pieces)", item.kind.label()),
                item.pieces as f64,
                Unit::Pieces,
            )
            .length(TRIM_STICK_FT)
            .color(trim_color.clone())
            .note(format!("lf:{}", item.rounded_lf)),
        );
    }
    // ridgecap runs the roof color, not the trim color
    if let Some(ridge) = trims
        .items
        .iter()
        .find(|i| i.kind == TrimKind::Ridge && i.rounded_lf > 0.0)
    {
        bom.push(
            BomRow::new(
                Category::Trim,
                label("Ridgecap"),
                "Ridge cap (11ft pieces)",
                ridge.pieces as f64,
                Unit::Pieces,
            )
            .length(TRIM_STICK_FT)
            .color(spec.panel_color_roof.clone())
            .note(format!("lf:{}", ridge.rounded_lf)),
        );
    }
    if !attachment {
        bom.push(
            BomRow::new(
                Category::Trim,
                label("Trim Sticks"),
                "11ft trim sticks (approx)",
                trims.sticks as f64,
                Unit::Pieces,
            )
            .length(TRIM_STICK_FT)
            .color(trim_color)
            .note(format!("waste:{}", trims.waste_factor)),
        );
    }

    // hardware
    let anchors = count_anchors_detailed(
        legs,
        spec.foundation,
        spec.frame_gauge.thickness(),
        spec.width_ft,
    );
    bom.push(BomRow::new(
        Category::Hardware,
        label(anchors.kind.label()),
        "Anchors/fasteners",
        anchors.qty as f64,
        if anchors.kind == AnchorKind::AsphaltKit {
            Unit::Kit
        } else {
            Unit::Each
        },
    ));
    let screws = count_roof_screws_by_gauge(roof.total_sheets, spec.panel_gauge.thickness());
    bom.push(
        BomRow::new(
            Category::Hardware,
            label("Roof Screws"),
            "Assorted screws",
            screws.total as f64,
            Unit::Each,
        )
        .note(format!("bags:{}", screws.bags)),
    );

    // openings
    if !spec.openings.is_empty() {
        let reinforcement = opening_reinforcement(&spec.openings, spec.width_ft);
        bom.push(BomRow::new(
            Category::Openings,
            label("Headers (LF)"),
            "Opening headers",
            reinforcement.header_lf,
            Unit::LinearFeet,
        ));
        bom.push(BomRow::new(
            Category::Openings,
            label("L-Brackets"),
            "L brackets for openings",
            reinforcement.l_brackets as f64,
            Unit::Each,
        ));
        bom.push(BomRow::new(
            Category::Openings,
            label("Blocking"),
            "Blocking pieces",
            reinforcement.blocking as f64,
            Unit::Each,
        ));
    }

    // extra panels: verbatim lines, zero entries suppressed
    for panel in &spec.extra_panels {
        if panel.qty > 0.0 && panel.length_ft > 0.0 {
            bom.push(
                BomRow::new(
                    Category::Panels,
                    label("Panels (Extra)"),
                    "Extra panels",
                    panel.qty,
                    Unit::Sheet,
                )
                .length(panel.length_ft)
                .piece_length(panel.length_ft)
                .color(panel.color.clone().unwrap_or_default()),
            );
        }
    }
}
