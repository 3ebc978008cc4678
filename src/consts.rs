//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snakes
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Length of a match; when this much time has passed, the higher score wins.
pub(crate) const TIME_LIMIT: Duration = Duration::from_secs(60);

/// A snake that reaches this score wins immediately.
pub(crate) const WINNING_SCORE: u32 = 10;

/// Size of the board in cells
pub(crate) const GRID_SIZE: Size = Size {
    width: 20,
    height: 20,
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Cell occupied by the player's head at the start of a game.  The body
/// extends to the left, and the snake faces right.
pub(crate) const PLAYER_SPAWN: Position = Position { x: 5, y: 5 };

/// Cell occupied by the AI's head at the start of a game.  The body extends
/// to the right, and the snake faces left.
pub(crate) const ENEMY_SPAWN: Position = Position { x: 15, y: 15 };

/// Total snake length (head included) before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// How many cells a snake's length increases by upon eating a food item
pub(crate) const SNAKE_GROWTH: usize = 1;

/// Number of obstacles placed on the board on difficulties that have them
pub(crate) const OBSTACLE_QTY: usize = 3;

/// When placing obstacles, keep this many cells in front of each snake's
/// head obstacle-free so that neither snake can collide before its first
/// chance to steer.
pub(crate) const OBSTACLE_CLEARANCE: usize = 3;

/// Glyph for a snake's head when it is moving up
pub(crate) const HEAD_UP_SYMBOL: char = 'v';

/// Glyph for a snake's head when it is moving down
pub(crate) const HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for a snake's head when it is moving right
pub(crate) const HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for a snake's head when it is moving left
pub(crate) const HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the player snake's body
pub(crate) const PLAYER_BODY_SYMBOL: char = '⚬';

/// Glyph for the parts of the AI snake's body
pub(crate) const ENEMY_BODY_SYMBOL: char = '◦';

/// Glyph for the food item
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for a snake's head after a fatal collision
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Default style for the player snake
pub(crate) const PLAYER_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Default style for the AI snake
pub(crate) const ENEMY_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Default style for the food item
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Default style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Blue);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
