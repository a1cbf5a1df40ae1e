//! Clone directions

/// Direction of a clone directive (`:^`, `:>`, `:v`, `:<`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Parse the direction marker character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }

    /// Parse the content of a clone cell. The content must be exactly two
    /// characters: `:` followed by a direction marker.
    pub fn from_clone(content: &str) -> Option<Self> {
        let mut chars = content.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(':'), Some(marker), None) => Self::from_char(marker),
            _ => None,
        }
    }

    /// Marker character for this direction
    pub fn as_char(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    /// (rows, columns) step from the clone cell to the cell it copies
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// (rows, columns) shift applied to references in a copied expression.
    ///
    /// The copy sits one step further from the source in the opposite sense of
    /// [`offset`](Self::offset), so the shift is its negation: an `Up` clone
    /// increments row numbers, a `Left` clone increments column letters.
    pub fn reference_shift(&self) -> (i64, i64) {
        let (rows, columns) = self.offset();
        (-rows, -columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clone() {
        assert_eq!(Direction::from_clone(":^"), Some(Direction::Up));
        assert_eq!(Direction::from_clone(":>"), Some(Direction::Right));
        assert_eq!(Direction::from_clone(":v"), Some(Direction::Down));
        assert_eq!(Direction::from_clone(":<"), Some(Direction::Left));

        assert_eq!(Direction::from_clone(":"), None);
        assert_eq!(Direction::from_clone(":x"), None);
        assert_eq!(Direction::from_clone(":V"), None);
        assert_eq!(Direction::from_clone(":^^"), None);
        assert_eq!(Direction::from_clone("^"), None);
    }

    #[test]
    fn test_reference_shift() {
        assert_eq!(Direction::Up.reference_shift(), (1, 0));
        assert_eq!(Direction::Down.reference_shift(), (-1, 0));
        assert_eq!(Direction::Left.reference_shift(), (0, 1));
        assert_eq!(Direction::Right.reference_shift(), (0, -1));
    }

    #[test]
    fn test_as_char_roundtrip() {
        for dir in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
            assert_eq!(Direction::from_char(dir.as_char()), Some(dir));
        }
    }
}
