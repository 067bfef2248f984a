//! FILENAME: engine/src/spreadsheet.rs
//! PURPOSE: The top-level spreadsheet snapshot: an id plus ordered worksheets.
//! CONTEXT: A Spreadsheet is fetched as an immutable snapshot once per
//! logical operation. Mutations accumulate as dirty cells in its worksheets
//! and are flushed through the write-back planner; the snapshot is never
//! shared across operations.

use crate::cell::{Cell, CellValue};
use crate::worksheet::Worksheet;
use parser::address::RangeAddress;
use serde::{Deserialize, Serialize};

/// A spreadsheet snapshot: identifier, ordered worksheets, and the index of
/// the "main" worksheet used when a range address has no sheet qualifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spreadsheet {
    pub id: String,
    worksheets: Vec<Worksheet>,
    pub main_worksheet: usize,
}

impl Spreadsheet {
    pub fn new(id: impl Into<String>) -> Self {
        Spreadsheet {
            id: id.into(),
            worksheets: Vec::new(),
            main_worksheet: 0,
        }
    }

    /// Wraps a fetch response (worksheet name + 2D values per sheet) into a
    /// spreadsheet snapshot. Worksheet order follows the response order.
    pub fn from_values(
        id: impl Into<String>,
        sheets: Vec<(String, Vec<Vec<CellValue>>)>,
    ) -> Self {
        let worksheets = sheets
            .into_iter()
            .enumerate()
            .map(|(index, (name, values))| Worksheet::from_values(name, index, values))
            .collect();

        Spreadsheet {
            id: id.into(),
            worksheets,
            main_worksheet: 0,
        }
    }

    /// Appends an empty worksheet and returns a mutable reference to it.
    pub fn add_worksheet(&mut self, name: impl Into<String>) -> &mut Worksheet {
        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name, index));
        &mut self.worksheets[index]
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name == name)
    }

    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name == name)
    }

    pub fn main(&self) -> Option<&Worksheet> {
        self.worksheets.get(self.main_worksheet)
    }

    pub fn main_mut(&mut self) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(self.main_worksheet)
    }

    /// The worksheet a range address targets: the named sheet if the
    /// address carries a qualifier, the main worksheet otherwise.
    pub fn target_mut(&mut self, address: &RangeAddress) -> Option<&mut Worksheet> {
        match &address.sheet {
            Some(name) => {
                let index = self.worksheets.iter().position(|ws| ws.name == *name)?;
                self.worksheets.get_mut(index)
            }
            None => self.main_mut(),
        }
    }

    /// Resolves and reads a range. Returns None only when the address names
    /// a worksheet this spreadsheet does not have.
    pub fn get_range(&mut self, address: &RangeAddress) -> Option<Vec<Vec<Cell>>> {
        Some(self.target_mut(address)?.get_range(address))
    }

    /// Clears dirty flags on every worksheet. The owner calls this after a
    /// confirmed successful external write.
    pub fn clear_dirty(&mut self) {
        for ws in &mut self.worksheets {
            ws.clear_dirty();
        }
    }
}
