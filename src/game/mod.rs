mod direction;
mod grid;
mod over;
mod pursuit;
mod snake;
use self::direction::Direction;
use self::grid::Grid;
use self::over::Overlay;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::iter;
use std::time::{Duration, Instant};

/// The duel screen: the player's snake races an AI snake for food on a
/// shared board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,

    /// The human-steered snake
    player: Snake,

    /// The computer-steered snake
    enemy: Snake,

    /// The food item currently on the board, if any
    food: Option<Position>,

    /// The obstacle layout for this game
    grid: Grid,

    /// Completed ticks; the match clock is derived from this, so the game
    /// logic never reads a wall clock.
    ticks: u32,

    state: GameState,

    /// Where a fatal collision happened, for the renderer
    collision: Option<Position>,

    globals: Globals,

    /// The time at which the next tick should occur, if known
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, mut rng: R) -> Game<R> {
        let player = Snake::new(consts::PLAYER_SPAWN, Direction::Right);
        let enemy = Snake::new(consts::ENEMY_SPAWN, Direction::Left);
        let mut keep_clear = HashSet::new();
        for snake in [&player, &enemy] {
            keep_clear.extend(snake.cells());
            keep_clear.extend(
                iter::successors(snake.next_head(), |&p| snake.direction.advance(p))
                    .take(consts::OBSTACLE_CLEARANCE),
            );
        }
        let grid = Grid::generate(globals.difficulty.obstacle_qty(), &keep_clear, &mut rng);
        Game {
            rng,
            player,
            enemy,
            food: None,
            grid,
            ticks: 0,
            state: GameState::Running,
            collision: None,
            globals,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one tick of the duel: the player steps, the AI steps, food is
    /// spawned and eaten, and the clock and scores are checked.  Does
    /// nothing once the game is over.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let player_target = self
            .player
            .next_head()
            .filter(|&p| !self.grid.is_blocked(p, self.enemy.cells()));
        let Some(head) = player_target else {
            self.collision = Some(self.player.head());
            self.finish();
            return;
        };
        self.player.advance_to(head);
        let chase = pursuit::pursue(
            &self.enemy,
            &self.player,
            self.food,
            &self.grid,
            &mut self.rng,
        );
        let Some(direction) = chase else {
            self.collision = Some(self.enemy.head());
            self.finish();
            return;
        };
        self.enemy.direction = direction;
        let head = self
            .enemy
            .next_head()
            .expect("pursuit direction should stay on the board");
        self.enemy.advance_to(head);
        if self.food.is_none() {
            self.place_food();
        }
        if self.food == Some(self.player.head()) {
            self.player.score += 1;
            self.player.grow();
            self.food = None;
        } else if self.food == Some(self.enemy.head()) {
            self.enemy.score += 1;
            self.enemy.grow();
            self.food = None;
        }
        self.ticks += 1;
        if self.elapsed() >= consts::TIME_LIMIT
            || self.player.score >= consts::WINNING_SCORE
            || self.enemy.score >= consts::WINNING_SCORE
        {
            self.finish();
        }
    }

    /// Place a new food item in a uniformly-random cell occupied by nothing
    /// else
    fn place_food(&mut self) {
        let mut occupied = self.grid.obstacles().clone();
        occupied.extend(self.player.cells());
        occupied.extend(self.enemy.cells());
        self.food = Grid::cells()
            .filter(move |p| !occupied.contains(p))
            .choose(&mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.player.turn(Direction::Up),
                Command::Left => self.player.turn(Direction::Left),
                Command::Down => self.player.turn(Direction::Down),
                Command::Right => self.player.turn(Direction::Right),
                _ => (),
            },
            GameState::Over(_) => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => return Some(Screen::Game(Game::new(self.globals.clone()))),
                Command::M => {
                    return Some(Screen::Main(crate::menu::MainMenu::new(
                        self.globals.clone(),
                    )))
                }
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    /// End the game, resolving the winner from the current scores.  The
    /// first transition sticks; any further call changes nothing.
    fn finish(&mut self) {
        if self.running() {
            self.state = GameState::Over(Winner::from_scores(self.player.score, self.enemy.score));
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Time elapsed over all completed ticks
    fn elapsed(&self) -> Duration {
        consts::TICK_PERIOD * self.ticks
    }

    /// Whole seconds left on the match clock
    fn remaining_secs(&self) -> u64 {
        consts::TIME_LIMIT
            .as_secs()
            .saturating_sub(self.elapsed().as_secs())
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let board_size = Size {
            width: consts::GRID_SIZE.width.saturating_add(2),
            height: consts::GRID_SIZE.height.saturating_add(2),
        };
        let [score_area, board_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board_size.height),
            Constraint::Fill(1),
        ])
        .areas(display);
        let [board_area] = Layout::horizontal([Constraint::Length(board_size.width)])
            .flex(Flex::Center)
            .areas(board_area);
        Line::styled(
            format!(
                " Your Score: {}   AI Score: {}   Time Left: {}s",
                self.player.score,
                self.enemy.score,
                self.remaining_secs()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        Block::bordered().render(board_area, buf);

        let theme = &self.globals.theme;
        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &pos in self.grid.obstacles() {
            board.draw_cell(pos, consts::OBSTACLE_SYMBOL, theme.obstacle);
        }
        if let Some(pos) = self.food {
            board.draw_cell(pos, consts::FOOD_SYMBOL, theme.food);
        }
        for &pos in self.enemy.body() {
            board.draw_cell(pos, consts::ENEMY_BODY_SYMBOL, theme.enemy);
        }
        board.draw_cell(
            self.enemy.head(),
            self.enemy.direction.head_symbol(),
            theme.enemy,
        );
        for &pos in self.player.body() {
            board.draw_cell(pos, consts::PLAYER_BODY_SYMBOL, theme.player);
        }
        board.draw_cell(
            self.player.head(),
            self.player.direction.head_symbol(),
            theme.player,
        );
        // Drawn last so it overwrites whatever the loser ran into
        if let Some(pos) = self.collision {
            board.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        if let GameState::Over(winner) = self.state {
            let over_area = center_rect(
                display,
                Size {
                    width: Overlay::WIDTH,
                    height: Overlay::HEIGHT,
                },
            );
            Overlay::new(winner).render(over_area, buf);
        }
    }
}

/// Helper for drawing board cells onto a buffer region
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Lifecycle of one duel
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over(Winner),
}

/// Outcome of a finished duel
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Winner {
    Player,
    Ai,
    Tie,
}

impl Winner {
    /// Resolve the outcome from the two scores
    fn from_scores(player: u32, enemy: u32) -> Winner {
        match player.cmp(&enemy) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Ai,
            Ordering::Equal => Winner::Tie,
        }
    }
}
