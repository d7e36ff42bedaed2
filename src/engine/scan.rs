use super::grid::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Last empty cell reached; equals the origin when the first step is blocked.
    pub farthest: Position,
    /// First cell that stopped the walk, or `None` at the board edge.
    pub blocking: Option<Position>,
}

pub fn scan(grid: &Grid, origin: Position, vector: (isize, isize)) -> Scan {
    let mut farthest = origin;
    loop {
        match farthest.step(vector, grid.size()) {
            Some(next) if grid.is_empty_at(next) => farthest = next,
            blocking => return Scan { farthest, blocking },
        }
    }
}
