use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;
use std::iter;

/// State for one snake, human- or computer-steered alike.
///
/// All positions are cells relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, with the cell
    /// touching the head at the end
    pub(super) body: VecDeque<Position>,

    /// The maximum total length (head included).  Raised by [`Snake::grow`];
    /// the tail is trimmed to fit whenever the snake moves.
    pub(super) max_len: usize,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Food items eaten so far
    pub(super) score: u32,
}

impl Snake {
    /// Create a snake with its head at `head`, facing `direction`, and with
    /// its body trailing behind the head to an initial total length of
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] cells.
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        let rearwards = direction.reverse();
        let mut body = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH);
        for pos in iter::successors(Some(head), |&p| rearwards.advance(p))
            .skip(1)
            .take(consts::INITIAL_SNAKE_LENGTH - 1)
        {
            body.push_front(pos);
        }
        Snake {
            head,
            body,
            max_len: consts::INITIAL_SNAKE_LENGTH,
            direction,
            score: 0,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells in the snake's body
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Iterate over every cell the snake occupies, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the cell one step ahead of the head in the current direction,
    /// or `None` if that step would leave the board
    pub(super) fn next_head(&self) -> Option<Position> {
        self.direction.advance(self.head)
    }

    /// Change the snake's direction to `direction`.  A request to reverse
    /// straight back into the neck is ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Commit a move: `head` becomes the new head, the old head joins the
    /// body, and the tail is trimmed to the length watermark.
    pub(super) fn advance_to(&mut self, head: Position) {
        self.body.push_back(self.head);
        self.head = head;
        while self.body.len() >= self.max_len {
            let _ = self.body.pop_front();
        }
    }

    /// Extend the snake's maximum length in response to eating a food item
    pub(super) fn grow(&mut self) {
        self.max_len += consts::SNAKE_GROWTH;
    }
}
