// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a small, easy-to-understand Sudoku engine. It
//! supports the following key features:
//!
//! * Parsing and printing Sudoku in a flat digit-string format
//! * Extracting rows, columns, and blocks of the grid
//! * Inferring the set of legal candidate values for every cell under the
//! standard row/column/block exclusion rule
//!
//! It does *not* solve Sudoku — it only reports, for each empty cell, which
//! values would currently be legal there. A cell whose candidate set comes
//! out empty has no legal value, which callers can use to detect an
//! unsatisfiable puzzle.
//!
//! # Parsing Sudoku
//!
//! A puzzle is encoded as a flat string of `size²` ASCII digits in row-major
//! order, where `0` denotes an empty cell. See [Puzzle::parse] for the exact
//! validation rules.
//!
//! ```
//! use sudoku_inference::Puzzle;
//!
//! let mut puzzle = Puzzle::new(3, 9).unwrap();
//! puzzle.parse(
//!     "017903600000080000900000507072010430000402070064370250701000065000\
//!     030000005601720").unwrap();
//! println!("{}", puzzle);
//! ```
//!
//! # Inferring candidates
//!
//! [Puzzle::infer] produces a [CandidateTable](inference::CandidateTable)
//! with one entry per cell: the singleton of the cell's value for filled
//! cells, and the ascending set of values not yet present in the cell's row,
//! column, or block for empty cells.
//!
//! ```
//! use sudoku_inference::Puzzle;
//!
//! let mut puzzle = Puzzle::new(3, 9).unwrap();
//! puzzle.parse(
//!     "017903600000080000900000507072010430000402070064370250701000065000\
//!     030000005601720").unwrap();
//!
//! let table = puzzle.infer();
//!
//! // The top-left cell is empty and could hold 2, 4, 5 or 8.
//! let candidates: Vec<usize> = table.get(0, 0).unwrap().iter().collect();
//! assert_eq!(vec![2, 4, 5, 8], candidates);
//!
//! // Its right neighbor is a given, so its set is a singleton.
//! assert_eq!(vec![1],
//!     table.get(1, 0).unwrap().iter().collect::<Vec<usize>>());
//! ```
//!
//! # Serialization
//!
//! [Puzzle::to_digit_string] is the inverse of [Puzzle::parse] and yields
//! the same flat digit-string format. Through serde, a [Puzzle] (de)serializes
//! as that string, with the grid dimensions recovered from its length.
//!
//! ```
//! use sudoku_inference::Puzzle;
//!
//! let puzzle = Puzzle::from_digit_string("1234341221434321").unwrap();
//! assert_eq!(4, puzzle.grid().size());
//! assert_eq!("1234341221434321", puzzle.to_digit_string());
//! ```

pub mod error;
pub mod inference;
pub mod util;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use inference::CandidateTable;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// A Sudoku grid is composed of cells that are organized into square blocks
/// of a given side length in a way that makes the entire grid a square.
/// Consequently, the grid size is the square of the block size, and the
/// number of blocks in a row or column equals the block size. Each cell may
/// or may not be occupied by a number.
///
/// In ordinary Sudoku, the block size is 3, resulting in a 9x9 grid:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ … │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// `Grid` implements `Display`, but only grids with a size of less than or
/// equal to 9 can be displayed with the digits 1 to 9. Grids of all other
/// sizes will raise an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    block_size: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &Grid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.block_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &Grid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &Grid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &Grid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &Grid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.block_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

impl Grid {

    /// Creates a new, empty grid with the given block size and total size.
    /// Unlike constructors that derive one dimension from the other, both are
    /// provided and checked against each other, so that invalid parameter
    /// combinations are rejected before any cell storage is allocated.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The side length of one sub-block of the grid. For an
    /// ordinary Sudoku grid, this is 3.
    /// * `size`: The total width and height of the grid. Must be positive and
    /// equal to the square of `block_size`. For an ordinary Sudoku grid, this
    /// is 9.
    ///
    /// # Errors
    ///
    /// If `size` is zero or does not equal `block_size * block_size`. In that
    /// case, `SudokuError::InvalidParameter` is returned.
    pub fn new(block_size: usize, size: usize) -> SudokuResult<Grid> {
        if size == 0 || size != block_size * block_size {
            return Err(SudokuError::InvalidParameter);
        }

        let cells = vec![None; size * size];

        Ok(Grid {
            block_size,
            size,
            cells
        })
    }

    /// Gets the side length of one sub-block of the grid.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
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
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::IndexOutOfRange)
        }
        else {
            Ok(self.cells[index(column, row, size)])
        }
    }

    /// Gets the cells of the given row as a borrowed slice, ordered by
    /// column.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, size[`. In that case,
    /// `SudokuError::IndexOutOfRange` is returned.
    pub fn row(&self, row: usize) -> SudokuResult<&[Option<usize>]> {
        if row >= self.size {
            Err(SudokuError::IndexOutOfRange)
        }
        else {
            let start = index(0, row, self.size);
            Ok(&self.cells[start..start + self.size])
        }
    }

    /// Gets the cells of the given column as a vector, ordered by row.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, size[`. In that case,
    /// `SudokuError::IndexOutOfRange` is returned.
    pub fn column(&self, column: usize) -> SudokuResult<Vec<Option<usize>>> {
        if column >= self.size {
            Err(SudokuError::IndexOutOfRange)
        }
        else {
            Ok((0..self.size)
                .map(|row| self.cells[index(column, row, self.size)])
                .collect())
        }
    }

    /// Gets the cells of the block containing the specified position,
    /// flattened in row-major order. The block origin is the cell at
    /// `((column / block_size) * block_size, (row / block_size) *
    /// block_size)`.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of a cell inside the desired
    /// block. Must be in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of a cell inside the desired block.
    /// Must be in the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::IndexOutOfRange` is returned.
    pub fn block(&self, column: usize, row: usize)
            -> SudokuResult<Vec<Option<usize>>> {
        let size = self.size;

        if column >= size || row >= size {
            return Err(SudokuError::IndexOutOfRange);
        }

        let block_size = self.block_size;
        let start_column = (column / block_size) * block_size;
        let start_row = (row / block_size) * block_size;
        let mut cells = Vec::with_capacity(block_size * block_size);

        for r in start_row..start_row + block_size {
            for c in start_column..start_column + block_size {
                cells.push(self.cells[index(c, r, size)]);
            }
        }

        Ok(cells)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

fn exact_sqrt(number: usize) -> Option<usize> {
    let root = (number as f64).sqrt().round() as usize;

    if root * root == number {
        Some(root)
    }
    else {
        None
    }
}

/// A Sudoku puzzle wraps a [Grid] and adds the operations that work with the
/// flat digit-string format: parsing, serialization, and candidate
/// inference. Two puzzles are equal if and only if their grids are equal.
///
/// A freshly created puzzle is entirely empty; [Puzzle::parse] fills it from
/// a digit string and may be called repeatedly on the same instance, each
/// successful call replacing all cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Puzzle {
    grid: Grid
}

impl Puzzle {

    /// Creates a new puzzle with an empty grid of the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The side length of one sub-block of the grid. For an
    /// ordinary Sudoku puzzle, this is 3.
    /// * `size`: The total width and height of the grid. Must be positive
    /// and equal to the square of `block_size`. For an ordinary Sudoku
    /// puzzle, this is 9.
    ///
    /// # Errors
    ///
    /// If `size` is zero or does not equal `block_size * block_size`. In
    /// that case, `SudokuError::InvalidParameter` is returned.
    pub fn new(block_size: usize, size: usize) -> SudokuResult<Puzzle> {
        Ok(Puzzle {
            grid: Grid::new(block_size, size)?
        })
    }

    /// Creates a puzzle directly from a digit string, deriving the grid
    /// dimensions from the string's length: the grid size is the square root
    /// of the length, and the block size the square root of the grid size.
    ///
    /// ```
    /// use sudoku_inference::Puzzle;
    ///
    /// let puzzle = Puzzle::from_digit_string("0102000000401020").unwrap();
    /// assert_eq!(2, puzzle.grid().block_size());
    /// assert_eq!(4, puzzle.grid().size());
    /// ```
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::InvalidSize`: If the length of `input` is not the
    /// fourth power of a positive integer, i.e. no valid grid dimensions can
    /// be derived from it.
    /// * `SudokuParseError::InvalidCharacter`: If `input` contains a
    /// character other than the ASCII digits '0' to '9'.
    pub fn from_digit_string(input: &str) -> SudokuParseResult<Puzzle> {
        let size = exact_sqrt(input.len())
            .ok_or(SudokuParseError::InvalidSize)?;
        let block_size = exact_sqrt(size)
            .ok_or(SudokuParseError::InvalidSize)?;
        let mut puzzle = Puzzle::new(block_size, size)
            .map_err(|_| SudokuParseError::InvalidSize)?;
        puzzle.parse(input)?;
        Ok(puzzle)
    }

    /// Parses a digit string into this puzzle's grid. The input must consist
    /// of exactly `size²` ASCII digits in row-major order, where `0` denotes
    /// an empty cell and any other digit a fixed value.
    ///
    /// The input is validated completely before any cell is written, so a
    /// failed parse leaves the previous grid state entirely unchanged.
    ///
    /// Note that digits greater than the grid size are *not* rejected — only
    /// the digit alphabet is checked. Grids larger than 9 can therefore
    /// never be filled by this format.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::InvalidSize`: If the length of `input` does not
    /// equal `size²`.
    /// * `SudokuParseError::InvalidCharacter`: If `input` contains a
    /// character other than the ASCII digits '0' to '9'.
    pub fn parse(&mut self, input: &str) -> SudokuParseResult<()> {
        let size = self.grid.size;

        if input.len() != size * size {
            return Err(SudokuParseError::InvalidSize);
        }

        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SudokuParseError::InvalidCharacter);
        }

        for (i, digit) in input.bytes().enumerate() {
            let number = (digit - b'0') as usize;

            self.grid.cells[i] = if number == 0 {
                None
            }
            else {
                Some(number)
            };
        }

        Ok(())
    }

    /// Restores a puzzle state previously produced by
    /// [Puzzle::to_digit_string]. Equivalent to [Puzzle::parse], including
    /// all validation and failure semantics.
    ///
    /// # Errors
    ///
    /// See [Puzzle::parse].
    pub fn deserialize(&mut self, data: &str) -> SudokuParseResult<()> {
        self.parse(data)
    }

    /// Computes the [CandidateTable] of the current grid state: for every
    /// filled cell the singleton of its value, and for every empty cell the
    /// ascending set of values in `[1, size]` that do not yet occur in the
    /// cell's row, column, or block.
    ///
    /// This is a pure read — the puzzle is not modified, and every call
    /// returns a freshly allocated table. An unparsed puzzle behaves as an
    /// all-empty grid.
    ///
    /// ```
    /// use sudoku_inference::Puzzle;
    ///
    /// let puzzle = Puzzle::new(3, 9).unwrap();
    /// let table = puzzle.infer();
    ///
    /// // Without any givens, every value is a candidate everywhere.
    /// assert_eq!(9, table.get(4, 4).unwrap().len());
    /// ```
    pub fn infer(&self) -> CandidateTable {
        CandidateTable::of(&self.grid)
    }

    /// Converts the puzzle into a `String` in a way that is consistent with
    /// [Puzzle::parse]: one digit per cell in row-major order, with `0` for
    /// empty cells. A puzzle that is serialized and parsed again will not
    /// change. Cell values above 9 cannot be represented by this format.
    pub fn to_digit_string(&self) -> String {
        self.grid.cells.iter()
            .map(|&cell| {
                match cell {
                    Some(number) => (b'0' + number as u8) as char,
                    None => '0'
                }
            })
            .collect()
    }

    /// Gets a reference to the [Grid] of this puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> String {
        puzzle.to_digit_string()
    }
}

impl TryFrom<String> for Puzzle {
    type Error = SudokuParseError;

    fn try_from(data: String) -> SudokuParseResult<Puzzle> {
        Puzzle::from_digit_string(&data)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const KNOWN_PUZZLE: &str =
        "017903600000080000900000507072010430000402070064370250701000065000\
        030000005601720";

    fn known_puzzle() -> Puzzle {
        let mut puzzle = Puzzle::new(3, 9).unwrap();
        puzzle.parse(KNOWN_PUZZLE).unwrap();
        puzzle
    }

    #[test]
    fn construction_requires_square_size() {
        assert!(Grid::new(3, 9).is_ok());
        assert!(Grid::new(2, 4).is_ok());
        assert!(Grid::new(1, 1).is_ok());

        assert_eq!(Err(SudokuError::InvalidParameter), Grid::new(3, 8));
        assert_eq!(Err(SudokuError::InvalidParameter), Grid::new(3, 0));
        assert_eq!(Err(SudokuError::InvalidParameter), Grid::new(0, 0));
        assert_eq!(Err(SudokuError::InvalidParameter), Grid::new(2, 9));
    }

    #[test]
    fn puzzle_construction_uses_grid_validation() {
        assert!(Puzzle::new(3, 9).is_ok());
        assert_eq!(Err(SudokuError::InvalidParameter), Puzzle::new(3, 8)
            .map(|_| ()));
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(3, 9).unwrap();
        assert!(grid.cells().iter().all(|&cell| cell == None));
        assert_eq!(81, grid.cells().len());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let mut puzzle = Puzzle::new(3, 9).unwrap();
        let too_short = &KNOWN_PUZZLE[..80];
        let too_long = format!("{}0", KNOWN_PUZZLE);

        assert_eq!(Err(SudokuParseError::InvalidSize),
            puzzle.parse(too_short));
        assert_eq!(Err(SudokuParseError::InvalidSize),
            puzzle.parse(&too_long));
    }

    #[test]
    fn parse_rejects_non_digit() {
        let mut puzzle = Puzzle::new(3, 9).unwrap();
        let with_letter = format!("a{}", &KNOWN_PUZZLE[1..]);
        let with_hash = format!("{}#{}", &KNOWN_PUZZLE[..40],
            &KNOWN_PUZZLE[41..]);

        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            puzzle.parse(&with_letter));
        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            puzzle.parse(&with_hash));
    }

    #[test]
    fn length_is_checked_before_characters() {
        let mut puzzle = Puzzle::new(3, 9).unwrap();
        let oversized_with_letter = format!("a{}0", &KNOWN_PUZZLE[1..]);

        assert_eq!(Err(SudokuParseError::InvalidSize),
            puzzle.parse(&oversized_with_letter));
    }

    #[test]
    fn parse_populates_cells_row_major() {
        let puzzle = known_puzzle();
        let grid = puzzle.grid();

        assert_eq!(None, grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(1), grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(7), grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(3, 0).unwrap());
        assert_eq!(Some(8), grid.get_cell(4, 1).unwrap());
        assert_eq!(Some(5), grid.get_cell(2, 8).unwrap());
        assert_eq!(None, grid.get_cell(8, 8).unwrap());
    }

    #[test]
    fn failed_parse_leaves_cells_unchanged() {
        let mut puzzle = known_puzzle();

        assert_eq!(Err(SudokuParseError::InvalidSize), puzzle.parse("123"));
        assert_eq!(KNOWN_PUZZLE, puzzle.to_digit_string());

        let with_letter = format!("x{}", &KNOWN_PUZZLE[1..]);
        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            puzzle.parse(&with_letter));
        assert_eq!(KNOWN_PUZZLE, puzzle.to_digit_string());
    }

    #[test]
    fn round_trip() {
        let puzzle = known_puzzle();
        assert_eq!(KNOWN_PUZZLE, puzzle.to_digit_string());
    }

    #[test]
    fn display_renders_box_drawing() {
        let mut puzzle = Puzzle::new(2, 4).unwrap();
        puzzle.parse("1230341221434321").unwrap();

        assert_eq!(
            "╔═══╤═══╦═══╤═══╗\n\
             ║ 1 │ 2 ║ 3 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║ 3 │ 4 ║ 1 │ 2 ║\n\
             ╠═══╪═══╬═══╪═══╣\n\
             ║ 2 │ 1 ║ 4 │ 3 ║\n\
             ╟───┼───╫───┼───╢\n\
             ║ 4 │ 3 ║ 2 │ 1 ║\n\
             ╚═══╧═══╩═══╧═══╝",
            puzzle.to_string());
    }

    #[test]
    fn display_fails_for_large_grids() {
        use std::fmt::Write;

        let grid = Grid::new(4, 16).unwrap();
        let mut output = String::new();

        assert!(write!(output, "{}", grid).is_err());
    }

    #[test]
    fn unparsed_puzzle_serializes_to_all_zeros() {
        let puzzle = Puzzle::new(2, 4).unwrap();
        assert_eq!("0000000000000000", puzzle.to_digit_string());
    }

    #[test]
    fn repeated_parse_replaces_all_cells() {
        let mut puzzle = known_puzzle();
        let other = "000000000000000000000000000000000000000000000000000000\
            000000000000000000000000001";

        puzzle.parse(other).unwrap();
        assert_eq!(other, puzzle.to_digit_string());
        assert_eq!(Some(1), puzzle.grid().get_cell(8, 8).unwrap());
        assert_eq!(None, puzzle.grid().get_cell(1, 0).unwrap());
    }

    #[test]
    fn digits_above_grid_size_are_accepted() {
        let mut puzzle = Puzzle::new(2, 4).unwrap();

        puzzle.parse("9999999999999999").unwrap();
        assert_eq!(Some(9), puzzle.grid().get_cell(0, 0).unwrap());
        assert_eq!("9999999999999999", puzzle.to_digit_string());
    }

    #[test]
    fn row_contents() {
        let puzzle = known_puzzle();
        let expected = vec![None, Some(1), Some(7), Some(9), None, Some(3),
            Some(6), None, None];

        assert_eq!(&expected[..], puzzle.grid().row(0).unwrap());
    }

    #[test]
    fn column_contents() {
        let puzzle = known_puzzle();
        let expected = vec![None, None, Some(9), None, None, None, Some(7),
            None, None];

        assert_eq!(expected, puzzle.grid().column(0).unwrap());
    }

    #[test]
    fn block_contents() {
        let puzzle = known_puzzle();
        let top_left = vec![None, Some(1), Some(7), None, None, None, Some(9),
            None, None];
        let bottom_right = vec![None, Some(6), Some(5), None, None, None,
            Some(7), Some(2), None];

        assert_eq!(top_left, puzzle.grid().block(0, 0).unwrap());
        assert_eq!(top_left, puzzle.grid().block(2, 2).unwrap());
        assert_eq!(bottom_right, puzzle.grid().block(8, 8).unwrap());
        assert_eq!(bottom_right, puzzle.grid().block(6, 7).unwrap());
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let grid = Grid::new(3, 9).unwrap();

        assert_eq!(Err(SudokuError::IndexOutOfRange), grid.row(9));
        assert_eq!(Err(SudokuError::IndexOutOfRange), grid.column(9));
        assert_eq!(Err(SudokuError::IndexOutOfRange), grid.block(9, 0));
        assert_eq!(Err(SudokuError::IndexOutOfRange), grid.block(0, 9));
        assert_eq!(Err(SudokuError::IndexOutOfRange), grid.get_cell(0, 9));
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let original = known_puzzle();
        let mut clone = original.clone();

        assert_eq!(original, clone);

        let other = "000000000000000000000000000000000000000000000000000000\
            000000000000000000000000001";
        clone.parse(other).unwrap();

        assert_ne!(original, clone);
        assert_eq!(KNOWN_PUZZLE, original.to_digit_string());
    }

    #[test]
    fn from_digit_string_derives_dimensions() {
        let puzzle = Puzzle::from_digit_string(KNOWN_PUZZLE).unwrap();

        assert_eq!(3, puzzle.grid().block_size());
        assert_eq!(9, puzzle.grid().size());
        assert_eq!(KNOWN_PUZZLE, puzzle.to_digit_string());
    }

    #[test]
    fn from_digit_string_rejects_underivable_lengths() {
        // 36 digits would imply a 6x6 grid, which has no square block size.
        let length_36 = "0".repeat(36);

        assert_eq!(Err(SudokuParseError::InvalidSize),
            Puzzle::from_digit_string(&length_36).map(|_| ()));
        assert_eq!(Err(SudokuParseError::InvalidSize),
            Puzzle::from_digit_string("").map(|_| ()));
        assert_eq!(Err(SudokuParseError::InvalidSize),
            Puzzle::from_digit_string("00000").map(|_| ()));
    }

    #[test]
    fn deserialize_behaves_like_parse() {
        let mut puzzle = Puzzle::new(3, 9).unwrap();

        puzzle.deserialize(KNOWN_PUZZLE).unwrap();
        assert_eq!(known_puzzle(), puzzle);

        assert_eq!(Err(SudokuParseError::InvalidSize),
            puzzle.deserialize("42"));
        assert_eq!(KNOWN_PUZZLE, puzzle.to_digit_string());
    }

    #[test]
    fn serde_round_trip() {
        let puzzle = known_puzzle();
        let json = serde_json::to_string(&puzzle).unwrap();

        assert_eq!(format!("\"{}\"", KNOWN_PUZZLE), json);

        let deserialized: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(puzzle, deserialized);
    }

    #[test]
    fn serde_rejects_invalid_strings() {
        assert!(serde_json::from_str::<Puzzle>("\"123\"").is_err());
        assert!(serde_json::from_str::<Puzzle>("\"x000\"").is_err());
    }
}
