use crate::app::Screen;
use crate::command::Command;
use crate::menu::MainMenu;
use crate::util::{center_rect, Globals};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
    Frame,
};
use std::borrow::Cow;

/// A pop-up shown before the main menu when something nonfatal went wrong
/// during startup, such as an unreadable configuration file.
///
/// The headline error is followed by a bulleted list of its causes,
/// outermost first.  Long reports can be scrolled with the steering keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    scroll_offset: usize,
}

impl Warning {
    /// Number of report lines shown at once; anything longer scrolls
    const VISIBLE_LINES: u16 = 14;

    /// Width at which report lines are wrapped
    const TEXT_WIDTH: u16 = 44;

    /// Width of the pop-up: the text plus a border and padding on each side
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit | Command::Q => Some(WarningOutcome::Quit),
            Command::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            Command::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.max_scroll());
                None
            }
            _ => None,
        }
    }

    fn scrolling(&self) -> bool {
        self.lines.len() > usize::from(Self::VISIBLE_LINES)
    }

    fn max_scroll(&self) -> usize {
        self.lines
            .len()
            .saturating_sub(usize::from(Self::VISIBLE_LINES))
    }

    fn from_error_messages<I: IntoIterator<Item = String>>(msgs: I) -> Warning {
        let mut msgs = msgs.into_iter();
        let mut lines = Vec::new();
        if let Some(headline) = msgs.next() {
            lines.extend(wrap_indented(&headline, "", ""));
            for (i, cause) in msgs.enumerate() {
                if i == 0 {
                    lines.push(String::new());
                    lines.push(String::from("Caused by:"));
                }
                lines.extend(wrap_indented(&cause, "  - ", "    "));
            }
        } else {
            lines.push(String::from("An unknown error occurred."));
        }
        Warning {
            lines,
            scroll_offset: 0,
        }
    }
}

fn wrap_indented(msg: &str, first: &str, rest: &str) -> Vec<String> {
    let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
        .break_words(true)
        .initial_indent(first)
        .subsequent_indent(rest);
    textwrap::wrap(msg, opts)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl From<&anyhow::Error> for Warning {
    fn from(e: &anyhow::Error) -> Warning {
        Warning::from_error_messages(e.chain().map(ToString::to_string))
    }
}

impl Widget for &Warning {
    // `area` is the whole display; the pop-up centers itself within it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::VISIBLE_LINES);
        // A scrollbar column and its spacing widen the pop-up.
        let width = Warning::WIDTH.saturating_add(u16::from(self.scrolling()) * 2);
        let block_area = center_rect(
            area,
            Size {
                width,
                height: visible.saturating_add(4),
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, dismiss_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .flex(Flex::Start)
                .spacing(1)
                .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        let text = Text::from_iter(
            self.lines
                .iter()
                .skip(self.scroll_offset)
                .take(usize::from(Warning::VISIBLE_LINES))
                .map(String::as_str),
        );
        if self.scrolling() {
            let [text_area, scrollbar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                    .flex(Flex::Start)
                    .spacing(1)
                    .areas(text_area);
            text.render(text_area, buf);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_symbol(Some(ratatui::symbols::shade::MEDIUM));
            let mut scroll_state =
                ScrollbarState::new(self.max_scroll()).position(self.scroll_offset);
            scrollbar.render(scrollbar_area, buf, &mut scroll_state);
        } else {
            text.render(text_area, buf);
        }
        Line::from("[Continue]").centered().render(dismiss_area, buf);
    }
}

/// Screen that shows a [`Warning`] until the user dismisses it, after which
/// the main menu is entered
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct WarningScreen {
    warning: Warning,
    globals: Globals,
}

impl WarningScreen {
    pub(crate) fn new(warning: Warning, globals: Globals) -> Self {
        WarningScreen { warning, globals }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.warning, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match self.warning.handle_command(cmd)? {
            WarningOutcome::Dismissed => Some(Screen::Main(MainMenu::new(self.globals.clone()))),
            WarningOutcome::Quit => Some(Screen::Quit),
        }
    }
}
