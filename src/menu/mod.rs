mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::options::Difficulty;
use crate::util::{get_display_area, EnumExt, Globals};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    globals: Globals,
    selection: Selection,
    difficulty: DifficultyMenu,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        let difficulty = DifficultyMenu::new(globals.difficulty);
        MainMenu {
            globals,
            selection: Selection::default(),
            difficulty,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit) => return Some(Screen::Quit),
            (_, Command::Home) => self.select(Selection::PlayButton, None),
            (_, Command::End) => self.select(Selection::QuitButton, None),
            (Selection::PlayButton, Command::Enter) | (_, Command::P) => {
                return Some(Screen::Game(self.play()))
            }
            (Selection::PlayButton, Command::Prev) => self.select(Selection::QuitButton, None),
            (Selection::PlayButton, Command::Down | Command::Next) => {
                self.select(Selection::Difficulty, Some(true));
            }
            (Selection::Difficulty, Command::Up | Command::Prev) => {
                if let Some(sel) = self.difficulty.move_up() {
                    self.select(sel, None);
                }
            }
            (Selection::Difficulty, Command::Down | Command::Next) => {
                if let Some(sel) = self.difficulty.move_down() {
                    self.select(sel, None);
                }
            }
            (Selection::Difficulty, Command::Space | Command::Enter) => self.difficulty.choose(),
            (Selection::QuitButton, Command::Enter) | (_, Command::Q) => {
                return Some(Screen::Quit);
            }
            (Selection::QuitButton, Command::Next) => self.select(Selection::PlayButton, None),
            (Selection::QuitButton, Command::Up | Command::Prev) => {
                self.select(Selection::Difficulty, Some(false));
            }
            _ => (),
        }
        None
    }

    fn play(&self) -> Game {
        let mut globals = self.globals.clone();
        globals.difficulty = self.difficulty.chosen;
        Game::new(globals)
    }

    fn select(&mut self, selection: Selection, first_row: Option<bool>) {
        self.selection = selection;
        if selection == Selection::Difficulty {
            if let Some(first) = first_row {
                self.difficulty.selection = if first {
                    Some(Difficulty::min())
                } else {
                    Some(Difficulty::max())
                };
            } else {
                self.difficulty.selection = None;
            }
        }
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, difficulty_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                1,
                DifficultyMenu::HEIGHT,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        let play_style = if self.selection == Selection::PlayButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Play (", play_style),
            Span::styled("p", consts::KEY_STYLE.patch(play_style)),
            Span::styled(")]", play_style),
        ])
        .centered()
        .render(play_area, buf);

        let [difficulty_area] = Layout::horizontal([DifficultyMenu::WIDTH])
            .flex(Flex::Center)
            .areas(difficulty_area);
        (&self.difficulty).render(difficulty_area, buf);

        let qstyle = if self.selection == Selection::QuitButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Quit (", qstyle),
            Span::styled("q", consts::KEY_STYLE.patch(qstyle)),
            Span::styled(")]", qstyle),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    Difficulty,
    QuitButton,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct DifficultyMenu {
    /// If the currently-selected main menu item is a row of this menu, then
    /// `selection` is `Some(difficulty)`, where `difficulty` is the row in
    /// question.
    selection: Option<Difficulty>,
    chosen: Difficulty,
}

impl DifficultyMenu {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (Difficulty::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const RADIO_WIDTH: u16 = 4;
    const WIDTH: u16 = 2 /* for border */
        + 2 * Self::HORIZONTAL_PADDING
        + Self::POINTER_WIDTH
        + Self::RADIO_WIDTH
        + Difficulty::DISPLAY_WIDTH;

    fn new(chosen: Difficulty) -> Self {
        DifficultyMenu {
            selection: None,
            chosen,
        }
    }

    fn move_up(&mut self) -> Option<Selection> {
        self.selection = self.selection?.prev();
        self.selection.is_none().then_some(Selection::PlayButton)
    }

    fn move_down(&mut self) -> Option<Selection> {
        self.selection = self.selection?.next();
        self.selection.is_none().then_some(Selection::QuitButton)
    }

    fn choose(&mut self) {
        if let Some(sel) = self.selection {
            self.chosen = sel;
        }
    }
}

impl Widget for &DifficultyMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Difficulty: ")
            .padding(Padding::horizontal(DifficultyMenu::HORIZONTAL_PADDING));
        let menu_area = block.inner(area);
        block.render(area, buf);
        for (difficulty, row) in Difficulty::iter().zip(menu_area.rows()) {
            let selected = Some(difficulty) == self.selection;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let s = format!(
                "{pointer:pwidth$}({marker}) {difficulty:lwidth$}",
                pointer = if selected { "»" } else { "" },
                pwidth = usize::from(DifficultyMenu::POINTER_WIDTH),
                marker = if self.chosen == difficulty { '•' } else { ' ' },
                lwidth = usize::from(Difficulty::DISPLAY_WIDTH),
            );
            Span::styled(s, style).render(row, buf);
        }
    }
}
