use crate::consts;
use ratatui::layout::Position;

/// A compass heading on the board.  Rows grow downwards, so "up" decreases
/// the y-coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for drawing a random fallback heading
    pub(super) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the cell one step from `pos` in this direction, or `None` if
    /// the step would leave the board.
    pub(super) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = increment_in_bounds(y, consts::GRID_SIZE.height)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = increment_in_bounds(x, consts::GRID_SIZE.width)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Glyph for a snake head facing this direction (the mouth opens towards
    /// travel)
    pub(super) fn head_symbol(self) -> char {
        match self {
            Direction::Up => consts::HEAD_UP_SYMBOL,
            Direction::Down => consts::HEAD_DOWN_SYMBOL,
            Direction::Left => consts::HEAD_LEFT_SYMBOL,
            Direction::Right => consts::HEAD_RIGHT_SYMBOL,
        }
    }
}

fn increment_in_bounds(x: u16, max: u16) -> Option<u16> {
    x.checked_add(1).filter(|&x2| x2 < max)
}
