//! Cell identifiers
//!
//! An [`Address`] is the parsed form of an identifier such as `B3`: a single
//! uppercase column letter followed by a 0-based row number. Only the columns
//! `A` through `Z` are addressable.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of addressable columns (A-Z)
pub const MAX_COLUMNS: usize = 26;

/// A cell address (e.g., "A0", "B3")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    /// Row index (0-based, identical to the numeric suffix)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub column: usize,
}

impl Address {
    /// Create a new address
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Parse an address from its identifier
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::Address;
    ///
    /// let addr = Address::parse("B3").unwrap();
    /// assert_eq!(addr.row, 3);
    /// assert_eq!(addr.column, 1);
    ///
    /// assert!(Address::parse("b3").is_err());
    /// assert!(Address::parse("AA1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();

        let letter = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => c,
            Some(c) => {
                return Err(Error::InvalidAddress(format!(
                    "'{}' does not start with an uppercase column letter (got '{}')",
                    s, c
                )))
            }
            None => return Err(Error::InvalidAddress("empty identifier".into())),
        };

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: usize = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number too large in '{}'", s)))?;

        Ok(Self {
            row,
            column: Self::letter_to_column(letter),
        })
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_to_letter(column: usize) -> Option<char> {
        if column < MAX_COLUMNS {
            Some((b'A' + column as u8) as char)
        } else {
            None
        }
    }

    fn letter_to_column(letter: char) -> usize {
        (letter as u8 - b'A') as usize
    }

    /// Move the address by a signed number of rows and columns.
    ///
    /// There is no wraparound: leaving the `A..Z` column space or going above
    /// row 0 is an error.
    pub fn offset(&self, rows: i64, columns: i64) -> Result<Self> {
        let row = self.row as i64 + rows;
        let column = self.column as i64 + columns;

        if row < 0 || column < 0 || column >= MAX_COLUMNS as i64 {
            return Err(Error::ShiftOutOfBounds {
                reference: self.to_string(),
                rows,
                columns,
            });
        }

        Ok(Self::new(row as usize, column as usize))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::column_to_letter(self.column) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            // Only reachable through Address::new with an unchecked column
            None => write!(f, "R{}C{}", self.row, self.column),
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letter() {
        assert_eq!(Address::column_to_letter(0), Some('A'));
        assert_eq!(Address::column_to_letter(1), Some('B'));
        assert_eq!(Address::column_to_letter(25), Some('Z'));
        assert_eq!(Address::column_to_letter(26), None);
    }

    #[test]
    fn test_address_parse() {
        let addr = Address::parse("A0").unwrap();
        assert_eq!(addr.row, 0);
        assert_eq!(addr.column, 0);

        let addr = Address::parse("B3").unwrap();
        assert_eq!(addr.row, 3);
        assert_eq!(addr.column, 1);

        let addr = Address::parse("Z120").unwrap();
        assert_eq!(addr.row, 120);
        assert_eq!(addr.column, 25);

        let addr: Address = "C007".parse().unwrap();
        assert_eq!(addr, Address::new(7, 2));
    }

    #[test]
    fn test_address_parse_errors() {
        assert!(matches!(Address::parse(""), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("A"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("a1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("AB1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("A-1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Address::parse("A1x"), Err(Error::InvalidAddress(_))));
        assert!(matches!(
            Address::parse("A99999999999999999999999"),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::new(0, 0).to_string(), "A0");
        assert_eq!(Address::new(99, 2).to_string(), "C99");
        assert_eq!(Address::new(4, 25).to_string(), "Z4");
        assert_eq!(Address::parse("D12").unwrap().to_string(), "D12");
    }

    #[test]
    fn test_offset() {
        let addr = Address::parse("B2").unwrap();
        assert_eq!(addr.offset(1, 0).unwrap().to_string(), "B3");
        assert_eq!(addr.offset(-1, 0).unwrap().to_string(), "B1");
        assert_eq!(addr.offset(0, 1).unwrap().to_string(), "C2");
        assert_eq!(addr.offset(0, -1).unwrap().to_string(), "A2");
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let z = Address::parse("Z1").unwrap();
        assert!(matches!(
            z.offset(0, 1),
            Err(Error::ShiftOutOfBounds { .. })
        ));

        let a = Address::parse("A1").unwrap();
        assert!(a.offset(0, -1).unwrap_err().is_out_of_bounds());

        let top = Address::parse("C0").unwrap();
        assert!(top.offset(-1, 0).unwrap_err().is_out_of_bounds());
    }
}
