use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const RAT_WIDTH: u16 = 15;
    const DUEL_WIDTH: u16 = 20;
    const BODY_LENGTH: u16 = 5;
    const FOOD_GUTTER: u16 = 2;
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::RAT_WIDTH + Self::DUEL_WIDTH;

    #[rustfmt::skip]
    const RAT: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____       _  ",
        r"|  _ \ __ _| |_",
         "| |_) / _` | __",
         "|  _ < (_| | |_",
        r"|_| \_\__,_|\__",
    ];

    #[rustfmt::skip]
    const DUEL: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____             _ ",
        r"|  _ \ _   _  ___| |",
        r"| | | | | | |/ _ \ |",
         "| |_| | |_| |  __/ |",
        r"|____/ \__,_|\___|_|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        let [rat_area, duel_area] = Layout::horizontal([Self::RAT_WIDTH, Self::DUEL_WIDTH])
            .flex(Flex::Start)
            .areas(words_area);
        Text::from_iter(Self::RAT)
            .style(consts::FOOD_STYLE)
            .render(rat_area, buf);
        Text::from_iter(Self::DUEL)
            .style(consts::PLAYER_STYLE)
            .render(duel_area, buf);
        let [player_area, head_area, _, food_area, _, enemy_head_area, enemy_area] =
            Layout::horizontal([
                Constraint::Length(Self::BODY_LENGTH),
                Constraint::Length(1),
                Constraint::Length(Self::FOOD_GUTTER),
                Constraint::Length(1),
                Constraint::Length(Self::FOOD_GUTTER),
                Constraint::Length(1),
                Constraint::Length(Self::BODY_LENGTH),
            ])
            .flex(Flex::Center)
            .areas(diagram_area);
        for p in player_area.positions() {
            if let Some(cell) = buf.cell_mut(p) {
                cell.set_char(consts::PLAYER_BODY_SYMBOL);
                cell.set_style(consts::PLAYER_STYLE);
            }
        }
        for p in head_area.positions() {
            if let Some(cell) = buf.cell_mut(p) {
                cell.set_char(consts::HEAD_RIGHT_SYMBOL);
                cell.set_style(consts::PLAYER_STYLE);
            }
        }
        for p in food_area.positions() {
            if let Some(cell) = buf.cell_mut(p) {
                cell.set_char(consts::FOOD_SYMBOL);
                cell.set_style(consts::FOOD_STYLE);
            }
        }
        for p in enemy_head_area.positions() {
            if let Some(cell) = buf.cell_mut(p) {
                cell.set_char(consts::HEAD_LEFT_SYMBOL);
                cell.set_style(consts::ENEMY_STYLE);
            }
        }
        for p in enemy_area.positions() {
            if let Some(cell) = buf.cell_mut(p) {
                cell.set_char(consts::ENEMY_BODY_SYMBOL);
                cell.set_style(consts::ENEMY_STYLE);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 24;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Steer your snake with:"),
            Line::from_iter([
                Span::raw("       "),
                Span::styled("←", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↓", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↑", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("→", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("h", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("j", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("k", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("l", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("a", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("s", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("w", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("d", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("4", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("2", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("8", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("6", consts::KEY_STYLE),
            ]),
            Line::from("First to 10 points wins!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod logo {
        use super::*;

        #[test]
        fn test_render() {
            let mut buffer = Buffer::empty(Rect::new(0, 0, 50, 10));
            Logo.render(Rect::new(3, 1, Logo::WIDTH, Logo::HEIGHT), &mut buffer);
            #[rustfmt::skip]
            let mut expected = Buffer::with_lines([
                 "",
                 "    ____       _   ____             _             ",
                r"   |  _ \ __ _| |_|  _ \ _   _  ___| |            ",
                r"   | |_) / _` | __| | | | | | |/ _ \ |            ",
                 "   |  _ < (_| | |_| |_| | |_| |  __/ |            ",
                r"   |_| \_\__,_|\__|____/ \__,_|\___|_|            ",
                 "",
                 "            ⚬⚬⚬⚬⚬<  ●  >◦◦◦◦◦                     ",
                 "",
                 "",
            ]);
            expected.set_style(Rect::new(3, 1, 15, 5), consts::FOOD_STYLE);
            expected.set_style(Rect::new(18, 1, 20, 5), consts::PLAYER_STYLE);
            expected.set_style(Rect::new(12, 7, 6, 1), consts::PLAYER_STYLE);
            expected.set_style(Rect::new(20, 7, 1, 1), consts::FOOD_STYLE);
            expected.set_style(Rect::new(23, 7, 6, 1), consts::ENEMY_STYLE);
            pretty_assertions::assert_eq!(buffer, expected);
        }

        #[test]
        fn test_render_too_big() {
            let mut buffer = Buffer::empty(Rect::new(0, 0, 50, 10));
            Logo.render(Rect::new(3, 1, 47, 9), &mut buffer);
            #[rustfmt::skip]
            let mut expected = Buffer::with_lines([
                 "",
                 "    ____       _   ____             _             ",
                r"   |  _ \ __ _| |_|  _ \ _   _  ___| |            ",
                r"   | |_) / _` | __| | | | | | |/ _ \ |            ",
                 "   |  _ < (_| | |_| |_| | |_| |  __/ |            ",
                r"   |_| \_\__,_|\__|____/ \__,_|\___|_|            ",
                 "",
                 "            ⚬⚬⚬⚬⚬<  ●  >◦◦◦◦◦                     ",
                 "",
                 "",
            ]);
            expected.set_style(Rect::new(3, 1, 15, 5), consts::FOOD_STYLE);
            expected.set_style(Rect::new(18, 1, 20, 5), consts::PLAYER_STYLE);
            expected.set_style(Rect::new(12, 7, 6, 1), consts::PLAYER_STYLE);
            expected.set_style(Rect::new(20, 7, 1, 1), consts::FOOD_STYLE);
            expected.set_style(Rect::new(23, 7, 6, 1), consts::ENEMY_STYLE);
            pretty_assertions::assert_eq!(buffer, expected);
        }

        #[test]
        fn rat_width() {
            assert!(Logo::RAT
                .iter()
                .all(|ln| ln.len() == usize::from(Logo::RAT_WIDTH)));
        }

        #[test]
        fn duel_width() {
            assert!(Logo::DUEL
                .iter()
                .all(|ln| ln.len() == usize::from(Logo::DUEL_WIDTH)));
        }
    }
}
