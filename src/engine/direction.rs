use crate::error::InvalidDirection;

use super::grid::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn vector(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Numeric codes: 0 = Down, 1 = Up, 2 = Left, 3 = Right.
impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(InvalidDirection(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOrder {
    len: usize,
    reversed: bool,
}

impl AxisOrder {
    fn for_component(len: usize, component: isize) -> Self {
        Self {
            len,
            reversed: component == 1,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn iter(self) -> impl Iterator<Item = usize> + Clone {
        (0..self.len).map(move |i| if self.reversed { self.len - 1 - i } else { i })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub vector: (isize, isize),
    pub rows: AxisOrder,
    pub cols: AxisOrder,
}

impl Resolved {
    /// Cells in traversal order: rows outer, columns inner. Cells nearest the
    /// edge being moved towards come first.
    pub fn traversal(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.rows
            .iter()
            .flat_map(move |row| cols.iter().map(move |col| Position::new(row, col)))
    }
}

pub fn resolve(dir: Direction, size: usize) -> Resolved {
    let vector = dir.vector();
    Resolved {
        vector,
        rows: AxisOrder::for_component(size, vector.0),
        cols: AxisOrder::for_component(size, vector.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_in_order() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Down));
        assert_eq!(Direction::try_from(1), Ok(Direction::Up));
        assert_eq!(Direction::try_from(2), Ok(Direction::Left));
        assert_eq!(Direction::try_from(3), Ok(Direction::Right));
        assert_eq!(Direction::try_from(4), Err(InvalidDirection(4)));
        assert_eq!(Direction::try_from(255), Err(InvalidDirection(255)));
    }

    #[test]
    fn no_direction_has_a_zero_vector() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.vector();
            assert_eq!(dr.abs() + dc.abs(), 1, "{dir:?}");
        }
    }

    #[test]
    fn traversal_starts_at_the_destination_edge() {
        let down = resolve(Direction::Down, 3);
        assert_eq!(down.rows.iter().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(down.cols.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        let right = resolve(Direction::Right, 3);
        assert_eq!(right.rows.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(right.cols.iter().collect::<Vec<_>>(), vec![2, 1, 0]);

        for dir in [Direction::Up, Direction::Left] {
            let r = resolve(dir, 3);
            assert!(!r.rows.is_reversed() && !r.cols.is_reversed());
        }
    }

    #[test]
    fn traversal_visits_every_cell_once() {
        let r = resolve(Direction::Right, 4);
        let cells: Vec<_> = r.traversal().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Position::new(0, 3));
        assert_eq!(cells[15], Position::new(3, 0));
    }
}
