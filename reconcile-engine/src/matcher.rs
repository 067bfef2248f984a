//! FILENAME: reconcile-engine/src/matcher.rs
//! PURPOSE: Best-effort row matching between independently configured ranges.
//! CONTEXT: Tournament spreadsheets place related fields (lobby id,
//! participants, referee, date, time) in independent column ranges that are
//! not guaranteed to be row-aligned. The matcher reconciles them by vertical
//! proximity to an anchor cell, bounded by a per-field row window.

use engine::Cell;
use smallvec::SmallVec;

/// Selects the candidate whose row distance |y - anchor.y| is minimal and
/// at most `max_row_window`. Ties are broken by preferring the candidate at
/// row >= anchor.y (same-or-below) over one strictly above, then by
/// ascending row-then-column order. Empty-valued candidates participate:
/// a same-row empty cell beats a neighbouring filled one.
///
/// Returns None when no candidate lies within the window. `to_string`
/// coerces the winning value to its string form regardless of stored type.
pub fn find_corresponding_cell_best_effort(
    candidates: &[Cell],
    anchor: &Cell,
    max_row_window: u32,
    to_string: bool,
) -> Option<Cell> {
    let mut best: Option<(&Cell, (u32, u8, u32, u32))> = None;

    for cell in candidates {
        let distance = cell.y.abs_diff(anchor.y);
        if distance > max_row_window {
            continue;
        }

        // Sort key: distance first, then below-or-same beats above,
        // then reading order.
        let above = (cell.y < anchor.y) as u8;
        let key = (distance, above, cell.y, cell.x);

        match &best {
            Some((_, best_key)) if *best_key <= key => {}
            _ => best = Some((cell, key)),
        }
    }

    best.map(|(cell, _)| {
        log::debug!(
            "matched candidate at ({}, {}) for anchor at ({}, {})",
            cell.x,
            cell.y,
            anchor.x,
            anchor.y
        );
        if to_string { cell.to_text_cell() } else { cell.clone() }
    })
}

/// Collects *all* candidates within the row window (for multi-valued fields
/// such as a lobby's participant list), ordered by ascending row then
/// column. With `filled_only`, empty-valued candidates are dropped.
pub fn find_corresponding_cells_best_effort(
    candidates: &[Cell],
    anchor: &Cell,
    max_row_window: u32,
    filled_only: bool,
) -> Vec<Cell> {
    let mut hits: SmallVec<[&Cell; 8]> = candidates
        .iter()
        .filter(|cell| cell.y.abs_diff(anchor.y) <= max_row_window)
        .filter(|cell| !filled_only || !cell.is_empty())
        .collect();

    hits.sort_by_key(|cell| (cell.y, cell.x));
    hits.into_iter().cloned().collect()
}
