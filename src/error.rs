//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing digit strings, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if the size is zero or does not equal the
    /// square of the block size.
    InvalidParameter,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    IndexOutOfRange
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a digit string
/// into a [Puzzle](crate::Puzzle).
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the length of the input does not equal the number of
    /// cells in the grid, i.e. the square of the grid size.
    InvalidSize,

    /// Indicates that the input contains a character other than the ASCII
    /// digits '0' to '9'.
    InvalidCharacter
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::InvalidSize =>
                write!(f, "invalid sudoku size"),
            SudokuParseError::InvalidCharacter =>
                write!(f, "invalid sudoku character")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
