use crate::game::Game;
use crate::menu::MainMenu;
use crate::util::Globals;
use crate::warning::{Warning, WarningScreen};
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        let screen = match warning {
            Some(warning) => Screen::Warning(WarningScreen::new(warning, globals)),
            None => Screen::Main(MainMenu::new(globals)),
        };
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Warning(ref warning) => {
                terminal.draw(|frame| warning.draw(frame))?;
            }
            Screen::Main(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Warning(ref mut warning) => {
                if let Some(screen) = warning.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Main(ref mut menu) => {
                if let Some(screen) = menu.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Game(ref mut game) => {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Warning(WarningScreen),
    Main(MainMenu),
    Game(Game),
    Quit,
}
