//! FILENAME: engine/src/worksheet.rs
//! PURPOSE: Manages the collection of cells for one worksheet (The Grid).
//! CONTEXT: This file defines the `Worksheet` struct which acts as the
//! container for cell data. Storage is a dense row-major rectangle that is
//! lazily extended: the grid is always padded to the largest coordinate
//! ever materialized, and unrequested cells default to an empty value
//! rather than an absent entry.

use crate::cell::{Cell, CellValue};
use parser::address::RangeAddress;
use serde::{Deserialize, Serialize};

/// A resolved rectangle: concrete 0-based inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl ResolvedRect {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }
}

/// One worksheet of a spreadsheet: a name, its index within the parent
/// spreadsheet, and the rectangular cell grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub name: String,
    pub index: usize,
    /// Row-major storage: `rows[y][x]`. Every row has length `width`.
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Worksheet {
    /// Creates a new, empty worksheet.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Worksheet {
            name: name.into(),
            index,
            rows: Vec::new(),
            width: 0,
        }
    }

    /// Wraps a fetched 2D value array into a worksheet. Ragged input rows
    /// are padded so the grid starts out rectangular.
    pub fn from_values(name: impl Into<String>, index: usize, values: Vec<Vec<CellValue>>) -> Self {
        let width = values.iter().map(|row| row.len()).max().unwrap_or(0);
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                let mut cells: Vec<Cell> = row
                    .into_iter()
                    .enumerate()
                    .map(|(x, value)| Cell::with_value(x as u32, y as u32, value))
                    .collect();
                for x in cells.len()..width {
                    cells.push(Cell::new(x as u32, y as u32));
                }
                cells
            })
            .collect();

        Worksheet {
            name: name.into(),
            index,
            rows,
            width,
        }
    }

    /// Number of materialized columns.
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Number of materialized rows.
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Extends the grid so that (x, y) exists, padding every row to keep
    /// the rectangle invariant.
    fn grow_to(&mut self, x: u32, y: u32) {
        let x = x as usize;
        let y = y as usize;

        if x >= self.width {
            self.width = x + 1;
            for (row_y, row) in self.rows.iter_mut().enumerate() {
                for col_x in row.len()..self.width {
                    row.push(Cell::new(col_x as u32, row_y as u32));
                }
            }
        }

        while self.rows.len() <= y {
            let row_y = self.rows.len() as u32;
            let row = (0..self.width as u32).map(|col_x| Cell::new(col_x, row_y)).collect();
            self.rows.push(row);
        }
    }

    /// Returns the cell at (x, y), materializing a new empty one (and
    /// growing the bounds) if it was never requested before.
    pub fn get_cell(&mut self, x: u32, y: u32) -> &Cell {
        self.grow_to(x, y);
        &self.rows[y as usize][x as usize]
    }

    /// Mutable access to the cell at (x, y), materializing it if needed.
    pub fn get_cell_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        self.grow_to(x, y);
        &mut self.rows[y as usize][x as usize]
    }

    /// Returns the cell only if it has already been materialized.
    pub fn peek_cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.rows.get(y as usize)?.get(x as usize)
    }

    /// Resolves a range address against the worksheet's extent *at call
    /// time*. Open-ended bounds snap to the current extent; later growth is
    /// not retroactively included. Returns None for a range that resolves
    /// to nothing (e.g. open end on an empty worksheet, or a start past
    /// the resolved end).
    pub fn resolve(&self, address: &RangeAddress) -> Option<ResolvedRect> {
        let x1 = address.start_col.unwrap_or(0);
        let y1 = address.start_row.unwrap_or(0);

        let x2 = match address.end_col {
            Some(x) => x,
            None if self.width == 0 => return None,
            None => self.width() - 1,
        };
        let y2 = match address.end_row {
            Some(y) => y,
            None if self.rows.is_empty() => return None,
            None => self.height() - 1,
        };

        if x1 > x2 || y1 > y2 {
            return None;
        }

        Some(ResolvedRect { x1, y1, x2, y2 })
    }

    /// Returns an ordered 2D sequence of cells for the resolved rectangle.
    /// The dimensions always match the resolved address exactly; cells that
    /// were never populated are materialized as empty cells at their
    /// correct coordinates.
    pub fn get_range(&mut self, address: &RangeAddress) -> Vec<Vec<Cell>> {
        let Some(rect) = self.resolve(address) else {
            return Vec::new();
        };

        self.grow_to(rect.x2, rect.y2);

        (rect.y1..=rect.y2)
            .map(|y| {
                (rect.x1..=rect.x2)
                    .map(|x| self.rows[y as usize][x as usize].clone())
                    .collect()
            })
            .collect()
    }

    /// Mutates the cell at (x, y) and marks it dirty, growing the grid
    /// first if the coordinate was previously unmaterialized.
    pub fn set_value(&mut self, x: u32, y: u32, value: CellValue) {
        let cell = self.get_cell_mut(x, y);
        cell.value = value;
        cell.dirty = true;
    }

    /// All currently dirty cells, in row-major order.
    pub fn dirty_cells(&self) -> Vec<&Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.dirty)
            .collect()
    }

    /// Clears every dirty flag. Called by the owner after a confirmed
    /// successful external write.
    pub fn clear_dirty(&mut self) {
        for row in &mut self.rows {
            for cell in row {
                cell.dirty = false;
            }
        }
    }
}

/// Returns the subset of `cells` whose display value matches `target`.
/// Exact comparison is case-sensitive; otherwise both sides are trimmed
/// and compared case-insensitively. Returns an empty vector when nothing
/// matches.
pub fn find_cells(cells: &[Cell], target: &str, exact: bool) -> Vec<Cell> {
    let target_normalized = if exact {
        target.to_string()
    } else {
        target.trim().to_lowercase()
    };

    cells
        .iter()
        .filter(|cell| {
            let value = cell.display_value();
            if exact {
                value == target_normalized
            } else {
                value.trim().to_lowercase() == target_normalized
            }
        })
        .cloned()
        .collect()
}
