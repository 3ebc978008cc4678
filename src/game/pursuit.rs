use super::direction::Direction;
use super::grid::Grid;
use super::snake::Snake;
use rand::{seq::SliceRandom, Rng};
use ratatui::layout::Position;
use std::cmp::Ordering;

/// Choose the hunter's next heading in pursuit of `food`.
///
/// Aims greedily at the food, closing the column gap before the row gap,
/// and keeps the current heading when there is no food or the food sits
/// exactly at the head.  If the aimed step would leave the board, hit an
/// obstacle, or hit the prey, the four directions are tried in a uniformly
/// random order and the first legal one wins.  Returns `None` when every
/// direction is blocked: the hunter is boxed in.
///
/// Only walls, obstacles, and the prey block a step; the hunter's own body
/// never does, so the policy is free to reverse over its own neck.
pub(super) fn pursue<R: Rng>(
    hunter: &Snake,
    prey: &Snake,
    food: Option<Position>,
    grid: &Grid,
    rng: &mut R,
) -> Option<Direction> {
    let aimed = food.map_or(hunter.direction, |f| aim(hunter.head(), f, hunter.direction));
    if is_open(aimed, hunter, prey, grid) {
        return Some(aimed);
    }
    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    directions
        .into_iter()
        .find(|&d| is_open(d, hunter, prey, grid))
}

fn aim(head: Position, food: Position, current: Direction) -> Direction {
    match food.x.cmp(&head.x) {
        Ordering::Greater => Direction::Right,
        Ordering::Less => Direction::Left,
        Ordering::Equal => match food.y.cmp(&head.y) {
            Ordering::Greater => Direction::Down,
            Ordering::Less => Direction::Up,
            Ordering::Equal => current,
        },
    }
}

fn is_open(direction: Direction, hunter: &Snake, prey: &Snake, grid: &Grid) -> bool {
    direction
        .advance(hunter.head())
        .is_some_and(|pos| !grid.is_blocked(pos, prey.cells()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::HashSet;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn empty_grid() -> Grid {
        Grid {
            obstacles: HashSet::new(),
        }
    }

    fn far_prey() -> Snake {
        Snake::new(Position::new(17, 17), Direction::Left)
    }

    #[rstest]
    #[case(Position::new(15, 15), Position::new(5, 5), Direction::Left)]
    #[case(Position::new(5, 15), Position::new(15, 15), Direction::Right)]
    #[case(Position::new(5, 15), Position::new(5, 5), Direction::Up)]
    #[case(Position::new(5, 5), Position::new(5, 15), Direction::Down)]
    #[case(Position::new(5, 5), Position::new(15, 15), Direction::Right)]
    #[case(Position::new(15, 5), Position::new(5, 15), Direction::Left)]
    fn greedy_aim(#[case] head: Position, #[case] food: Position, #[case] expected: Direction) {
        let hunter = Snake::new(head, Direction::Down);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(&hunter, &far_prey(), Some(food), &empty_grid(), &mut rng);
        assert_eq!(got, Some(expected));
    }

    #[test]
    fn no_food_keeps_heading() {
        let hunter = Snake::new(Position::new(10, 10), Direction::Up);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(&hunter, &far_prey(), None, &empty_grid(), &mut rng);
        assert_eq!(got, Some(Direction::Up));
    }

    #[test]
    fn food_at_head_keeps_heading() {
        let hunter = Snake::new(Position::new(10, 10), Direction::Down);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(
            &hunter,
            &far_prey(),
            Some(Position::new(10, 10)),
            &empty_grid(),
            &mut rng,
        );
        assert_eq!(got, Some(Direction::Down));
    }

    #[test]
    fn blocked_aim_falls_back_to_sole_open_direction() {
        let hunter = Snake::new(Position::new(3, 0), Direction::Right);
        let grid = Grid {
            obstacles: HashSet::from([Position::new(4, 0), Position::new(2, 0)]),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(
            &hunter,
            &far_prey(),
            Some(Position::new(10, 0)),
            &grid,
            &mut rng,
        );
        assert_eq!(got, Some(Direction::Down));
    }

    #[test]
    fn prey_blocks_aim() {
        let hunter = Snake::new(Position::new(5, 5), Direction::Right);
        let prey = Snake::new(Position::new(6, 5), Direction::Down);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(
            &hunter,
            &prey,
            Some(Position::new(9, 5)),
            &empty_grid(),
            &mut rng,
        );
        assert!(matches!(
            got,
            Some(Direction::Up | Direction::Down | Direction::Left)
        ));
    }

    #[test]
    fn own_body_never_blocks() {
        let hunter = Snake::new(Position::new(0, 5), Direction::Left);
        let grid = Grid {
            obstacles: HashSet::from([Position::new(0, 4), Position::new(0, 6)]),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(&hunter, &far_prey(), None, &grid, &mut rng);
        assert_eq!(got, Some(Direction::Right));
    }

    #[test]
    fn boxed_in_yields_none() {
        let hunter = Snake::new(Position::new(0, 0), Direction::Up);
        let grid = Grid {
            obstacles: HashSet::from([Position::new(1, 0), Position::new(0, 1)]),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let got = pursue(
            &hunter,
            &far_prey(),
            Some(Position::new(10, 10)),
            &grid,
            &mut rng,
        );
        assert_eq!(got, None);
    }
}
