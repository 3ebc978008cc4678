use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect};
use std::collections::HashSet;

/// The board's obstacle layout for one game.
///
/// Obstacles are placed once at game start and never move.  The board's
/// bounds themselves are fixed at [`consts::GRID_SIZE`]; stepping off the
/// edge is caught by [`Direction::advance`][super::direction::Direction],
/// which never produces an out-of-bounds cell to query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    pub(super) obstacles: HashSet<Position>,
}

impl Grid {
    /// Generate a board with `qty` obstacles drawn uniformly from the cells
    /// not in `keep_clear`.
    pub(super) fn generate<R: Rng>(
        qty: usize,
        keep_clear: &HashSet<Position>,
        rng: &mut R,
    ) -> Grid {
        let obstacles = Grid::cells()
            .filter(|p| !keep_clear.contains(p))
            .choose_multiple(rng, qty)
            .into_iter()
            .collect();
        Grid { obstacles }
    }

    /// Iterate over every cell of the board
    pub(super) fn cells() -> Positions {
        Rect::from((Position::ORIGIN, consts::GRID_SIZE)).positions()
    }

    pub(super) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    /// True if `pos` is an obstacle or one of `occupied`'s cells
    pub(super) fn is_blocked<I>(&self, pos: Position, occupied: I) -> bool
    where
        I: IntoIterator<Item = Position>,
    {
        self.obstacles.contains(&pos) || occupied.into_iter().any(|p| p == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn cell_count() {
        assert_eq!(Grid::cells().count(), 400);
    }

    #[test]
    fn generate_none() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::generate(0, &HashSet::new(), &mut rng);
        assert!(grid.obstacles.is_empty());
    }

    #[test]
    fn generate_avoids_keep_clear() {
        let keep_clear = Grid::cells().filter(|p| p.y < 19).collect::<HashSet<_>>();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::generate(3, &keep_clear, &mut rng);
        assert_eq!(grid.obstacles.len(), 3);
        for &pos in &grid.obstacles {
            assert_eq!(pos.y, 19, "obstacle {pos:?} outside the free row");
            assert!(pos.x < 20, "obstacle {pos:?} out of bounds");
        }
    }

    #[test]
    fn generate_exact_count() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::generate(3, &HashSet::new(), &mut rng);
        assert_eq!(grid.obstacles.len(), 3);
    }

    #[test]
    fn is_blocked() {
        let grid = Grid {
            obstacles: HashSet::from([Position::new(4, 4)]),
        };
        let occupied = [Position::new(7, 7), Position::new(7, 8)];
        assert!(grid.is_blocked(Position::new(4, 4), occupied));
        assert!(grid.is_blocked(Position::new(7, 8), occupied));
        assert!(!grid.is_blocked(Position::new(0, 0), occupied));
    }
}
