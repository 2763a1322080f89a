//! Parsing of human-entered coordinates such as `B7`.

use core::fmt;

use crate::coord::Coord;
use crate::ship::Orientation;

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordError {
    Empty,
    /// First character is not a letter.
    BadColumn(char),
    /// Text after the column letter is not a positive number.
    BadRow,
    /// Orientation is neither `H` nor `V`.
    BadOrientation,
    /// Parsed cleanly but lies off the board.
    OutOfRange { size: usize },
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::Empty => write!(f, "Empty input"),
            ParseCoordError::BadColumn(ch) => {
                write!(f, "Invalid column '{}' - must be a letter", ch)
            }
            ParseCoordError::BadRow => write!(f, "Invalid row - must be a number starting at 1"),
            ParseCoordError::BadOrientation => write!(f, "Orientation must be H or V"),
            ParseCoordError::OutOfRange { size } if (1..=26).contains(size) => write!(
                f,
                "Out of bounds - columns A-{}, rows 1-{}",
                (b'A' + (*size - 1) as u8) as char,
                size
            ),
            ParseCoordError::OutOfRange { size } => {
                write!(f, "Out of bounds - board is {0}x{0}", size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCoordError {}

/// Parse `<column letter><row number>` (case-insensitive, 1-based row) for
/// a `size×size` board.
pub fn parse_coordinate(input: &str, size: usize) -> Result<Coord, ParseCoordError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(ParseCoordError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(ParseCoordError::BadColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| ParseCoordError::BadRow)?;
    if row == 0 {
        return Err(ParseCoordError::BadRow);
    }
    let coord = Coord::new(row - 1, col);
    if !coord.in_bounds(size) {
        return Err(ParseCoordError::OutOfRange { size });
    }
    Ok(coord)
}

/// Parse a placement such as `A5 H` or `c3 v`.
pub fn parse_placement(input: &str, size: usize) -> Result<(Coord, Orientation), ParseCoordError> {
    let mut parts = input.split_whitespace();
    let coord = parse_coordinate(parts.next().unwrap_or(""), size)?;
    let orientation = match parts.next() {
        None => Orientation::Horizontal,
        Some(o) if o.eq_ignore_ascii_case("h") => Orientation::Horizontal,
        Some(o) if o.eq_ignore_ascii_case("v") => Orientation::Vertical,
        Some(_) => return Err(ParseCoordError::BadOrientation),
    };
    Ok((coord, orientation))
}
