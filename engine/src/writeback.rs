//! FILENAME: engine/src/writeback.rs
//! PURPOSE: The write-back planner: turns dirty cells into minimal range writes.
//! CONTEXT: The external service charges per write call, so dirty cells are
//! coalesced into one bounding rectangle per worksheet instead of being
//! pushed cell-by-cell. Cells inside the rectangle that are not themselves
//! dirty are included at their current value, making each rectangle a fully
//! populated single write.

use crate::cell::CellValue;
use crate::spreadsheet::Spreadsheet;
use crate::worksheet::{ResolvedRect, Worksheet};
use parser::address::RangeAddress;

/// One planned external write: a worksheet, the textual range address the
/// service understands, and the full value matrix for that rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeUpdate {
    pub worksheet: String,
    pub range: String,
    pub values: Vec<Vec<CellValue>>,
}

/// The minimal bounding rectangle containing all of a worksheet's dirty
/// cells, or None when the worksheet is clean.
fn dirty_bounds(worksheet: &Worksheet) -> Option<ResolvedRect> {
    let dirty = worksheet.dirty_cells();
    let first = dirty.first()?;

    let mut rect = ResolvedRect {
        x1: first.x,
        y1: first.y,
        x2: first.x,
        y2: first.y,
    };
    for cell in &dirty[1..] {
        rect.x1 = rect.x1.min(cell.x);
        rect.y1 = rect.y1.min(cell.y);
        rect.x2 = rect.x2.max(cell.x);
        rect.y2 = rect.y2.max(cell.y);
    }
    Some(rect)
}

impl Spreadsheet {
    /// Plans the write-back for every worksheet with at least one dirty
    /// cell: one (range text, value matrix) pair per such worksheet, sized
    /// to the minimal bounding rectangle of its dirty cells.
    ///
    /// Deterministic and idempotent: identical dirty sets yield identical,
    /// stably ordered output across repeated calls. Dirty flags are NOT
    /// cleared here; clearing is the caller's responsibility after a
    /// confirmed successful external write.
    pub fn get_updated_values_with_ranges(&self) -> Vec<RangeUpdate> {
        let mut updates = Vec::new();

        for worksheet in self.worksheets() {
            let Some(rect) = dirty_bounds(worksheet) else {
                continue;
            };

            let values: Vec<Vec<CellValue>> = (rect.y1..=rect.y2)
                .map(|y| {
                    (rect.x1..=rect.x2)
                        .map(|x| {
                            worksheet
                                .peek_cell(x, y)
                                .map(|cell| cell.value.clone())
                                .unwrap_or(CellValue::Empty)
                        })
                        .collect()
                })
                .collect();

            let range = RangeAddress::rect(rect.x1, rect.y1, rect.x2, rect.y2)
                .with_sheet(worksheet.name.clone())
                .to_string();

            log::debug!(
                "planned write-back for {}: {} ({} dirty cell(s))",
                worksheet.name,
                range,
                worksheet.dirty_cells().len()
            );

            updates.push(RangeUpdate {
                worksheet: worksheet.name.clone(),
                range,
                values,
            });
        }

        updates
    }
}
