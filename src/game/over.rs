use super::Winner;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for displaying the outcome of a finished duel as a pop-up over
/// the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Overlay {
    winner: Winner,
}

impl Overlay {
    /// The height that should be used for the `Rect` passed to
    /// `Overlay::render()`
    pub(super) const HEIGHT: u16 = 8;

    /// The width that should be used for the `Rect` passed to
    /// `Overlay::render()`
    pub(super) const WIDTH: u16 = 30;

    pub(super) fn new(winner: Winner) -> Overlay {
        Overlay { winner }
    }
}

impl Widget for Overlay {
    /*
     * ┌──────── GAME OVER! ────────┐
     * │ Congratulations! You Win!  │
     * │                            │
     * │ Restart (r)                │
     * │ Main Menu (m)              │
     * │ Quit (q)                   │
     * │                            │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER! ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let message = match self.winner {
            Winner::Player => "Congratulations! You Win!",
            Winner::Ai => "Sorry! AI Wins!",
            Winner::Tie => "It's a Tie!",
        };
        let lines = [
            Line::from(message),
            Line::default(),
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Main Menu ("),
                Span::styled("m", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
