//! FILENAME: reconcile-engine/src/lookup.rs
//! PURPOSE: End-to-end anchor lookup: from an anchor id to a full record.
//! CONTEXT: Resolves the configured anchor range, exact-matches the id,
//! then runs per-field best-effort matching for every binding in the
//! source's capability table. Ambiguity is a hard error: two rows claiming
//! the same anchor id is a structural problem in user-maintained content
//! that must surface, never be silently resolved.

use crate::definition::{FieldTag, SheetSource};
use crate::error::ReconcileError;
use crate::matcher::{find_corresponding_cell_best_effort, find_corresponding_cells_best_effort};
use engine::{find_cells, Cell, CellValue, Spreadsheet};
use parser::parse;
use rustc_hash::FxHashMap;

/// A matched field: either the single best candidate (None when nothing
/// fell inside the window) or every qualifying candidate for multi-valued
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatch {
    Single(Option<Cell>),
    Many(Vec<Cell>),
}

/// The anchor cell plus every field the capability table resolved.
#[derive(Debug, Clone)]
pub struct AnchorRecord {
    pub anchor: Cell,
    pub fields: FxHashMap<FieldTag, FieldMatch>,
}

impl AnchorRecord {
    /// The matched cell for a single-valued field, if any.
    pub fn single(&self, tag: FieldTag) -> Option<&Cell> {
        match self.fields.get(&tag) {
            Some(FieldMatch::Single(cell)) => cell.as_ref(),
            _ => None,
        }
    }

    /// The matched cells for a multi-valued field (empty when unbound).
    pub fn many(&self, tag: FieldTag) -> &[Cell] {
        match self.fields.get(&tag) {
            Some(FieldMatch::Many(cells)) => cells,
            _ => &[],
        }
    }
}

/// Reads a configured range off the spreadsheet as a flat cell list.
fn resolve_range(
    spreadsheet: &mut Spreadsheet,
    range_text: &str,
) -> Result<Vec<Cell>, ReconcileError> {
    let address = parse(range_text)?;
    let sheet_name = address.sheet.clone();
    let rows = spreadsheet
        .get_range(&address)
        .ok_or_else(|| ReconcileError::SheetNotFound(sheet_name.unwrap_or_default()))?;
    Ok(rows.into_iter().flatten().collect())
}

/// End-to-end lookup: locates `anchor_id` in the source's anchor range and
/// best-effort-matches every configured field against it.
///
/// Zero anchor matches raise `AnchorNotFound`; more than one raises
/// `DuplicateAnchor`. Date/time fields must resolve to string-typed cells;
/// a numeric or boolean value raises `FieldTypeMismatch` instead of being
/// silently reinterpreted.
pub fn from_id(
    spreadsheet: &mut Spreadsheet,
    source: &SheetSource,
    anchor_id: &str,
    filled_only: bool,
) -> Result<AnchorRecord, ReconcileError> {
    let anchor_cells = resolve_range(spreadsheet, &source.anchor_range)?;
    let hits = find_cells(&anchor_cells, anchor_id, true);

    let anchor = match hits.as_slice() {
        [] => return Err(ReconcileError::AnchorNotFound(anchor_id.to_string())),
        [only] => only.clone(),
        _ => return Err(ReconcileError::DuplicateAnchor(anchor_id.to_string())),
    };
    log::debug!(
        "anchor {} located at ({}, {}) in {}",
        anchor_id,
        anchor.x,
        anchor.y,
        source.anchor_range
    );

    // Sorted tag order keeps matching and error precedence deterministic.
    let mut bindings: Vec<_> = source.fields.iter().collect();
    bindings.sort_by_key(|(tag, _)| **tag);

    let mut fields = FxHashMap::default();
    for (tag, binding) in bindings {
        let candidates = resolve_range(spreadsheet, &binding.range)?;
        let window = source.window_for(binding);

        let matched = if binding.multi {
            FieldMatch::Many(find_corresponding_cells_best_effort(
                &candidates,
                &anchor,
                window,
                filled_only,
            ))
        } else {
            let hit = find_corresponding_cell_best_effort(
                &candidates,
                &anchor,
                window,
                binding.to_string,
            );

            if tag.is_date_time() {
                if let Some(cell) = &hit {
                    if matches!(cell.value, CellValue::Number(_) | CellValue::Boolean(_)) {
                        return Err(ReconcileError::FieldTypeMismatch(*tag));
                    }
                }
            }

            FieldMatch::Single(hit)
        };

        fields.insert(*tag, matched);
    }

    Ok(AnchorRecord { anchor, fields })
}
