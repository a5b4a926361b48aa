//! This module contains the candidate-inference core of this crate: the
//! [CandidateTable] derived from a [Grid] by applying the row/column/block
//! exclusion rule to every cell.

use crate::{Grid, index};
use crate::error::{SudokuError, SudokuResult};
use crate::util::CandidateSet;

use std::fmt::{self, Display, Formatter};

/// A square table holding one [CandidateSet] per grid cell. For a filled
/// cell, the set is the singleton containing the cell's value; for an empty
/// cell, it contains every value in `[1, size]` that does not occur in the
/// cell's row, column, or block.
///
/// An empty set marks a cell for which no legal value remains. That is a
/// statement about the puzzle, not an error of the derivation.
///
/// Tables are plain values: deriving one does not modify the grid it was
/// derived from, and deriving twice from the same grid state yields equal
/// tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateTable {
    size: usize,
    cells: Vec<CandidateSet>
}

fn free_candidates(grid: &Grid, column: usize, row: usize) -> CandidateSet {
    let mut candidates = CandidateSet::full(grid.size());
    let row_cells = grid.row(row).unwrap();
    let column_cells = grid.column(column).unwrap();
    let block_cells = grid.block(column, row).unwrap();
    let occupied = row_cells.iter()
        .chain(column_cells.iter())
        .chain(block_cells.iter());

    for &cell in occupied {
        if let Some(number) = cell {
            candidates.remove(number).unwrap();
        }
    }

    candidates
}

impl CandidateTable {

    /// Derives the candidate table of the given grid's current state. The
    /// grid is only read, and the returned table is freshly allocated on
    /// every call.
    pub fn of(grid: &Grid) -> CandidateTable {
        let size = grid.size();
        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for column in 0..size {
                let set = match grid.get_cell(column, row).unwrap() {
                    Some(number) => CandidateSet::singleton(number).unwrap(),
                    None => free_candidates(grid, column, row)
                };

                cells.push(set);
            }
        }

        CandidateTable {
            size,
            cells
        }
    }

    /// Gets the side length of this table, which equals the size of the grid
    /// it was derived from.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the candidate set of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::IndexOutOfRange` is returned.
    pub fn get(&self, column: usize, row: usize)
            -> SudokuResult<&CandidateSet> {
        if column >= self.size || row >= self.size {
            Err(SudokuError::IndexOutOfRange)
        }
        else {
            Ok(&self.cells[index(column, row, self.size)])
        }
    }
}

impl Display for CandidateTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                if column > 0 {
                    f.write_str(" ")?;
                }

                let cell = &self.cells[index(column, row, self.size)];

                if cell.is_empty() {
                    f.write_str("-")?;
                }
                else {
                    for number in cell.iter() {
                        write!(f, "{}", number)?;
                    }
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
